mod config;
mod core;
mod insert;
mod query;
mod remove;
mod structure;
mod types;

pub use config::Config;
pub use types::QuadTreeObject;

pub(crate) use types::{Node, CHILDREN, ROOT};

use common::shapes::Aabb;

/// Mutable spatial index over axis-aligned bounding boxes.
///
/// Objects are routed into a tree of nodes that subdivide into four
/// quadrants once a node's slot budget overflows and collapse back to
/// leaves once their subtrees empty out. Every node keeps an aggregated
/// envelope (`max_bounds`) over itself, its live objects and its whole
/// subtree, which queries use to skip empty regions with a single
/// rectangle test.
///
/// Nodes live in an arena and reference each other by index: children
/// are indices, a parent is a plain back index, and merged nodes go on a
/// free list for reuse. There is no shared ownership anywhere, so there
/// is no reference cycle to break on teardown.
pub struct QuadTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) free_nodes: Vec<u32>,
    pub(crate) config: Config,
}

/// Read-only handle to one node of a [`QuadTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) tree: &'a QuadTree,
    pub(crate) index: u32,
}

impl<'a> NodeRef<'a> {
    /// The node's static bounds, fixed at construction.
    pub fn bounds(&self) -> &'a Aabb {
        &self.tree.nodes[self.index as usize].bounds
    }

    /// The aggregated envelope over the node, its live objects and its
    /// subtree.
    pub fn max_bounds(&self) -> &'a Aabb {
        &self.tree.nodes[self.index as usize].max_bounds
    }

    pub fn depth(&self) -> usize {
        self.tree.nodes[self.index as usize].depth
    }

    /// Live objects held directly in this node's slots.
    pub fn object_count(&self) -> usize {
        self.tree.nodes[self.index as usize].live_count
    }

    /// Live objects held in this node and its whole subtree.
    pub fn total_objects(&self) -> usize {
        self.tree.total_objects_at(self.index)
    }

    pub fn has_children(&self) -> bool {
        self.tree.nodes[self.index as usize].children.is_some()
    }

    /// Quadrant handles in top-left, top-right, bottom-right, bottom-left
    /// order, or `None` for a leaf.
    pub fn children(&self) -> Option<[NodeRef<'a>; CHILDREN]> {
        self.tree.nodes[self.index as usize].children.map(|children| {
            children.map(|index| NodeRef {
                tree: self.tree,
                index,
            })
        })
    }
}
