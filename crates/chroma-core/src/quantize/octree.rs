//! Octree over the unit RGB cube
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Freed
//! slots go on a free list and are reused by later insertions, so pruning
//! never shifts live indices.

use crate::color::Color;

/// Depth of the terminal level, counted from the root at depth 0.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Index of a node in the octree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-node aggregates.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// Pixels that passed through this node on their way down
    pub(crate) pixels: u64,
    /// Pixels that terminate at this node
    pub(crate) pixels_in: u64,
    /// Sum of the terminating pixels' coordinates
    pub(crate) color_sum: [f64; 3],
    /// Sum of squared distances from every passing pixel to the cube center
    pub(crate) distance: f64,
    pub(crate) children: [Option<NodeId>; 8],
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    fn with_parent(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }
}

/// Sub-cube of the color space: origin corner and edge length.
#[derive(Debug, Clone, Copy)]
struct Cube {
    origin: [f64; 3],
    size: f64,
}

impl Cube {
    const UNIT: Cube = Cube {
        origin: [0.0; 3],
        size: 1.0,
    };

    /// Octant of `p` and the matching sub-cube.
    ///
    /// Bit 0 selects the upper half of x, bit 1 of y, bit 2 of z. Points
    /// outside the cube land in whichever half the comparison picks.
    fn octant(&self, p: [f64; 3]) -> (usize, Cube) {
        let half = self.size / 2.0;
        let mut origin = self.origin;
        let mut octant = 0;
        for axis in 0..3 {
            if p[axis] - self.origin[axis] >= half {
                octant |= 1 << axis;
                origin[axis] += half;
            }
        }
        (octant, Cube { origin, size: half })
    }

    fn squared_distance_to_center(&self, p: [f64; 3]) -> f64 {
        let half = self.size / 2.0;
        (0..3)
            .map(|axis| {
                let d = p[axis] - (self.origin[axis] + half);
                d * d
            })
            .sum()
    }
}

/// Bounded-depth octree accumulating colors for palette reduction.
///
/// Colors are expected in `[0, 1]` per channel. Anything else is still
/// accepted and lands in some octant; the resulting clusters are just not
/// meaningful.
///
/// # Example
///
/// ```
/// use chroma_core::{Color, Octree};
///
/// let mut tree = Octree::new();
/// tree.extend([
///     Color::new(0.1, 0.1, 0.1),
///     Color::new(0.9, 0.9, 0.9),
///     Color::new(0.9, 0.9, 0.9),
/// ]);
/// assert_eq!(tree.leaf_count(), 2);
///
/// tree.reduce(1);
/// assert_eq!(tree.colors().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Octree {
    pub(crate) nodes: Vec<Node>,
    free: Vec<NodeId>,
    /// Reused traversal stack for subtree folds
    scratch: Vec<NodeId>,
    max_depth: u32,
}

impl Octree {
    /// Empty tree with the default depth of 5.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Empty tree with a custom terminal depth. Depth 0 keeps every color
    /// in the root.
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            nodes: vec![Node::with_parent(None)],
            free: Vec::new(),
            scratch: Vec::new(),
            max_depth,
        }
    }

    /// Terminal depth of this tree.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Add one color. Only the first three channels are used.
    pub fn insert(&mut self, color: Color) {
        let c = color.channels();
        let p = [f64::from(c[0]), f64::from(c[1]), f64::from(c[2])];

        let mut id = NodeId::ROOT;
        let mut cube = Cube::UNIT;
        let max_depth = self.max_depth;
        for depth in 0..=max_depth {
            let node = self.node_mut(id);
            node.pixels += 1;
            node.distance += cube.squared_distance_to_center(p);

            if depth == max_depth {
                node.pixels_in += 1;
                for (sum, v) in node.color_sum.iter_mut().zip(p) {
                    *sum += v;
                }
                break;
            }

            let (octant, sub) = cube.octant(p);
            let existing = node.children[octant];
            id = match existing {
                Some(child) => child,
                None => {
                    let child = self.allocate(id);
                    self.node_mut(id).children[octant] = Some(child);
                    child
                }
            };
            cube = sub;
        }
    }

    /// Add one 8-bit RGB pixel, scaled to `[0, 1]`.
    pub fn insert_u8(&mut self, rgb: [u8; 3]) {
        self.insert(Color::new(
            f32::from(rgb[0]) / 255.0,
            f32::from(rgb[1]) / 255.0,
            f32::from(rgb[2]) / 255.0,
        ));
    }

    /// Nodes currently holding colors.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.pixels_in > 0).count()
    }

    /// Live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Pixels inserted so far.
    pub fn pixel_count(&self) -> u64 {
        self.node(NodeId::ROOT).pixels
    }

    /// True until the first insertion.
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Centroid of every color-bearing node, alpha 1.
    ///
    /// Depth-first, parent before children, children in octant order.
    pub fn colors(&self) -> Vec<Color> {
        let mut out = Vec::new();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.pixels_in > 0 {
                let n = node.pixels_in as f64;
                let [r, g, b] = node.color_sum.map(|s| (s / n) as f32);
                out.push(Color::with_alpha(r, g, b, 1.0));
            }
            stack.extend(node.children.iter().rev().flatten());
        }
        out
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    fn allocate(&mut self, parent: NodeId) -> NodeId {
        let node = Node::with_parent(Some(parent));
        match self.free.pop() {
            Some(id) => {
                *self.node_mut(id) = node;
                id
            }
            None => {
                let id = NodeId(self.nodes.len() as u32);
                self.nodes.push(node);
                id
            }
        }
    }

    /// Free `id` and its descendants. Returns how many of them held colors
    /// together with their terminal pixel count and color sum.
    fn take_subtree(&mut self, id: NodeId) -> (usize, u64, [f64; 3]) {
        let mut leaves = 0;
        let mut pixels_in = 0;
        let mut sum = [0.0; 3];
        let mut stack = std::mem::take(&mut self.scratch);
        stack.push(id);
        while let Some(id) = stack.pop() {
            let node = std::mem::take(self.node_mut(id));
            if node.pixels_in > 0 {
                leaves += 1;
            }
            pixels_in += node.pixels_in;
            for (acc, v) in sum.iter_mut().zip(node.color_sum) {
                *acc += v;
            }
            stack.extend(node.children.iter().flatten());
            self.free.push(id);
        }
        self.scratch = stack;
        (leaves, pixels_in, sum)
    }

    /// Fold the subtree in child slot `octant` into `id`.
    ///
    /// Returns the number of color-bearing nodes removed from the tree; `id`
    /// itself is not counted even if it gains its first pixels.
    pub(crate) fn absorb_child(&mut self, id: NodeId, octant: usize) -> usize {
        let Some(child) = self.node_mut(id).children[octant].take() else {
            return 0;
        };
        let (leaves, pixels_in, sum) = self.take_subtree(child);
        let node = self.node_mut(id);
        node.pixels_in += pixels_in;
        for (acc, v) in node.color_sum.iter_mut().zip(sum) {
            *acc += v;
        }
        leaves
    }
}

impl Default for Octree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Color> for Octree {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        for color in iter {
            self.insert(color);
        }
    }
}

impl FromIterator<Color> for Octree {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut tree = Octree::new();
        tree.extend(iter);
        tree
    }
}
