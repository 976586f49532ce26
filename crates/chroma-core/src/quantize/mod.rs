//! Octree palette quantization
//!
//! Colors go into an [`Octree`] of bounded depth. [`Octree::reduce`] folds
//! the cheapest subtrees into their parents until the requested number of
//! color-bearing nodes remains, and [`Octree::colors`] returns their
//! centroids. [`PaletteExtractor`] wraps the three steps.

mod extractor;
mod octree;
mod reduce;

pub use extractor::{PaletteExtractor, DEFAULT_MAX_COLORS};
pub use octree::{Octree, DEFAULT_MAX_DEPTH};
pub use reduce::{Reduction, ReductionPass};
