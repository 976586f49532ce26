//! Palette extraction builder

use super::octree::{Octree, DEFAULT_MAX_DEPTH};
use crate::color::Color;

/// Default palette size.
pub const DEFAULT_MAX_COLORS: usize = 8;

/// Builds an octree from a pixel stream and reduces it to a palette.
///
/// Configuration methods consume and return `self`; [`extract`](Self::extract)
/// takes `&self` so one extractor can serve many images.
///
/// # Example
///
/// ```
/// use chroma_core::{Color, PaletteExtractor};
///
/// let pixels = [
///     Color::new(0.1, 0.1, 0.1),
///     Color::new(0.1, 0.1, 0.1),
///     Color::new(0.9, 0.2, 0.2),
/// ];
/// let palette = PaletteExtractor::new().max_colors(2).extract(pixels);
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteExtractor {
    max_colors: usize,
    max_depth: u32,
}

impl PaletteExtractor {
    /// Eight colors, depth 5.
    pub fn new() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Upper bound on the palette size.
    #[inline]
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// Terminal octree depth.
    #[inline]
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Unreduced tree for `pixels`, for callers that reduce it several times.
    pub fn build<I>(&self, pixels: I) -> Octree
    where
        I: IntoIterator<Item = Color>,
    {
        let mut tree = Octree::with_max_depth(self.max_depth);
        tree.extend(pixels);
        tree
    }

    /// Reduce a copy of `tree` and return its centroids.
    pub fn reduce(&self, tree: &Octree) -> Vec<Color> {
        let mut tree = tree.clone();
        let reduction = tree.reduce(self.max_colors);
        tracing::debug!(
            pixels = tree.pixel_count(),
            initial = reduction.initial_leaves,
            colors = reduction.final_leaves(),
            passes = reduction.passes.len(),
            "palette reduced"
        );
        tree.colors()
    }

    /// Palette of at most `max_colors` centroids.
    pub fn extract<I>(&self, pixels: I) -> Vec<Color>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut tree = self.build(pixels);
        tree.reduce(self.max_colors);
        tree.colors()
    }
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let extractor = PaletteExtractor::default();
        assert_eq!(extractor, PaletteExtractor::new().max_colors(8).max_depth(5));
    }

    #[test]
    fn test_reduce_leaves_source_tree_intact() {
        let extractor = PaletteExtractor::new().max_colors(1);
        let tree = extractor.build([
            Color::new(0.1, 0.2, 0.3),
            Color::new(0.7, 0.8, 0.9),
        ]);
        assert_eq!(extractor.reduce(&tree).len(), 1);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(extractor.max_colors(2).reduce(&tree).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(PaletteExtractor::new().extract(Vec::<Color>::new()).is_empty());
    }

    #[test]
    fn test_shallow_tree_merges_more() {
        let pixels = [Color::new(0.05, 0.05, 0.05), Color::new(0.2, 0.2, 0.2)];
        assert_eq!(PaletteExtractor::new().extract(pixels).len(), 2);
        assert_eq!(PaletteExtractor::new().max_depth(1).extract(pixels).len(), 1);
    }

    #[test]
    fn test_build_uses_configured_depth() {
        let tree = PaletteExtractor::new().max_depth(3).build([Color::new(0.5, 0.5, 0.5)]);
        assert_eq!(tree.max_depth(), 3);
        assert_eq!(tree.node_count(), 4);
    }
}
