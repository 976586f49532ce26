//! Greedy threshold pruning
//!
//! Each pass walks the tree once. A node whose accumulated distance is at
//! or below the threshold is folded into its parent together with its whole
//! subtree. Nodes that survive report their distance, and the smallest one
//! seen becomes the next pass's threshold. Thresholds therefore never
//! decrease and every pass after the first folds at least one node.

use super::octree::{NodeId, Octree};

/// One pruning pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionPass {
    /// Distance at or below which nodes were folded
    pub threshold: f64,
    /// Color-bearing nodes left after the pass
    pub leaves: usize,
}

/// Record of a [`Octree::reduce`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reduction {
    /// Color-bearing nodes before the first pass
    pub initial_leaves: usize,
    /// Passes in execution order
    pub passes: Vec<ReductionPass>,
    /// The root itself fell under the threshold and absorbed everything
    pub root_collapsed: bool,
}

impl Reduction {
    /// Leaf count after the last pass.
    pub fn final_leaves(&self) -> usize {
        self.passes
            .last()
            .map_or(self.initial_leaves, |pass| pass.leaves)
    }
}

struct PassState {
    threshold: f64,
    min_distance: f64,
    leaves: usize,
    folded: usize,
}

impl Octree {
    /// Prune until at most `target` color-bearing nodes remain.
    ///
    /// A target at or above the current leaf count leaves the tree
    /// untouched. The root is never removed: once it falls under the
    /// threshold every child is folded into it and reduction stops, so a
    /// non-empty tree always keeps at least one color and target 0 means
    /// "as few as possible".
    pub fn reduce(&mut self, target: usize) -> Reduction {
        let mut leaves = self.leaf_count();
        let mut reduction = Reduction {
            initial_leaves: leaves,
            ..Reduction::default()
        };
        let mut threshold = 0.0;

        while leaves > target {
            let root_distance = self.node(NodeId::ROOT).distance;
            let mut pass = PassState {
                threshold,
                min_distance: root_distance,
                leaves,
                folded: 0,
            };

            if root_distance <= threshold {
                for octant in 0..8 {
                    self.absorb_child(NodeId::ROOT, octant);
                }
                leaves = usize::from(self.node(NodeId::ROOT).pixels_in > 0);
                reduction.passes.push(ReductionPass { threshold, leaves });
                reduction.root_collapsed = true;
                tracing::debug!(threshold, leaves, "octree root collapsed");
                break;
            }

            self.prune_below(NodeId::ROOT, &mut pass);
            leaves = pass.leaves;
            reduction.passes.push(ReductionPass { threshold, leaves });
            tracing::debug!(threshold, leaves, folded = pass.folded, "octree pruning pass");

            // NaN distances from non-finite input would stall the loop
            if pass.folded == 0 && !(pass.min_distance > threshold) {
                tracing::warn!(threshold, leaves, "octree reduction made no progress");
                break;
            }
            threshold = pass.min_distance;
        }

        reduction
    }

    /// Visit the children of a node that survived the current threshold.
    fn prune_below(&mut self, id: NodeId, pass: &mut PassState) {
        let distance = self.node(id).distance;
        if distance < pass.min_distance {
            pass.min_distance = distance;
        }

        let had_pixels = self.node(id).pixels_in > 0;
        for octant in 0..8 {
            let Some(child) = self.node(id).children[octant] else {
                continue;
            };
            debug_assert_eq!(self.node(child).parent, Some(id));

            if self.node(child).distance <= pass.threshold {
                pass.leaves -= self.absorb_child(id, octant);
                pass.folded += 1;
            } else {
                self.prune_below(child, pass);
            }
        }

        if !had_pixels && self.node(id).pixels_in > 0 {
            pass.leaves += 1;
        }
    }
}
