use chroma_core::{Color, Octree, PaletteExtractor};
use serde::Serialize;
use std::io::Read;

use super::pixel_stream::PixelStream;
use crate::error::AppError;
use crate::models::PaletteConfig;

/// Leaves kept in a freshly built tree before the final reduction.
///
/// Pre-reducing keeps cached trees small; later reductions to any palette
/// size up to this bound see the same clusters.
pub const CACHED_LEAVES: usize = 200;

/// A named palette color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
    pub rgb: [f32; 3],
}

impl PaletteEntry {
    pub fn new(source: &str, index: usize, color: Color) -> Self {
        let rgb = color.rgb();
        Self {
            name: format!("{source} #{index}"),
            hex: color.to_hex(),
            rgb: [rgb.r, rgb.g, rgb.b],
        }
    }
}

/// Builds palettes from pixel streams.
pub struct PaletteService {
    extractor: PaletteExtractor,
    max_colors: usize,
}

impl PaletteService {
    pub fn new(config: &PaletteConfig) -> Self {
        Self {
            extractor: PaletteExtractor::new()
                .max_colors(config.colors)
                .max_depth(config.max_depth),
            max_colors: config.colors,
        }
    }

    /// Insert every pixel of `stream` and pre-reduce the tree.
    ///
    /// The returned tree can be handed to [`palette`](Self::palette) any
    /// number of times.
    pub fn build_tree<R: Read>(&self, stream: PixelStream<R>) -> Result<Octree, AppError> {
        let mut tree = self.extractor.build(std::iter::empty());
        for pixel in stream {
            tree.insert(pixel?);
        }

        let leaves = tree.leaf_count();
        let reduction = tree.reduce(CACHED_LEAVES.max(self.max_colors));
        tracing::info!(
            pixels = tree.pixel_count(),
            leaves,
            kept = reduction.final_leaves(),
            "Built color tree"
        );
        Ok(tree)
    }

    /// Reduce a copy of `tree` and name the resulting colors
    /// `"<source> #<index>"`.
    pub fn palette(&self, source: &str, tree: &Octree) -> Vec<PaletteEntry> {
        self.extractor
            .reduce(tree)
            .into_iter()
            .enumerate()
            .map(|(index, color)| PaletteEntry::new(source, index, color))
            .collect()
    }

    /// Build and reduce in one step.
    pub fn extract<R: Read>(
        &self,
        source: &str,
        stream: PixelStream<R>,
    ) -> Result<Vec<PaletteEntry>, AppError> {
        let tree = self.build_tree(stream)?;
        Ok(self.palette(source, &tree))
    }
}
