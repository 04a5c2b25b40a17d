use super::*;
use common::shapes::Aabb;

impl QuadTree {
    /// Subdivides a node into four quadrants that exactly tile its bounds,
    /// split at the center. No-op if the node already has children.
    ///
    /// Objects already held in the node's slots stay where they are; only
    /// later overflow routes into the new children.
    pub(crate) fn split(&mut self, index: u32) {
        if self.nodes[index as usize].children.is_some() {
            return;
        }

        let bounds = self.nodes[index as usize].bounds;
        let depth = self.nodes[index as usize].depth + 1;
        let (left, top) = (bounds.left(), bounds.top());
        let (right, bottom) = (bounds.right(), bounds.bottom());
        let (x, y) = (bounds.x(), bounds.y());

        let top_left = self.alloc_node(Aabb::new(left, top, x, y), index, depth);
        let top_right = self.alloc_node(Aabb::new(x, top, right, y), index, depth);
        let bottom_right = self.alloc_node(Aabb::new(x, y, right, bottom), index, depth);
        let bottom_left = self.alloc_node(Aabb::new(left, y, x, bottom), index, depth);

        self.nodes[index as usize].children =
            Some([top_left, top_right, bottom_right, bottom_left]);
    }

    /// Collapses a node back to leaf form, returning every descendant to
    /// the free list. The node's own slots are untouched. Only the pruning
    /// step calls this; a populated subtree must never be merged directly.
    pub(crate) fn merge(&mut self, index: u32) {
        if let Some(children) = self.nodes[index as usize].children.take() {
            for child in children {
                self.merge(child);
                self.release_node(child);
            }
        }
    }

    /// Post-order pruning pass: once a node's descendants hold no live
    /// objects, its children are merged away. Keeps the structural
    /// footprint proportional to the live population rather than the
    /// historical peak.
    pub(crate) fn remove_empty_nodes(&mut self, index: u32) {
        if let Some(children) = self.nodes[index as usize].children {
            for child in children {
                self.remove_empty_nodes(child);
            }
            if self.children_total_objects(index) == 0 {
                self.merge(index);
            }
        }
    }

    /// Recomputes `max_bounds` for this node, then for every ancestor up
    /// to the root, so queries anywhere in the tree see a consistent
    /// envelope after any population change.
    pub(crate) fn resolve_max_bounds(&mut self, index: u32) {
        let mut current = Some(index);
        while let Some(node) = current {
            self.recompute_max_bounds(node);
            current = self.nodes[node as usize].parent;
        }
    }

    /// Union of the node's own bounds, every live slot rectangle and every
    /// child envelope. A degenerate union never replaces a known-good
    /// bound: it falls back to the node's static bounds.
    fn recompute_max_bounds(&mut self, index: u32) {
        let bounds = self.nodes[index as usize].bounds;
        let children = self.nodes[index as usize].children;

        let mut max_bounds = bounds;
        for slot in self.nodes[index as usize].slots.iter().flatten() {
            max_bounds.expand_to_include(&slot.bounds);
        }
        if let Some(children) = children {
            for child in children {
                let child_max = self.nodes[child as usize].max_bounds;
                max_bounds.expand_to_include(&child_max);
            }
        }
        if !max_bounds.is_valid() {
            max_bounds = bounds;
        }

        self.nodes[index as usize].max_bounds = max_bounds;
    }
}
