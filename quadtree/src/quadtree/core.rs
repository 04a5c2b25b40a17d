use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Aabb;

impl QuadTree {
    /// Creates a tree over `bounds` with the default [`Config`].
    pub fn new(bounds: Aabb) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    /// Creates a tree over `bounds`. The root rectangle must be valid;
    /// a degenerate one is rejected here so it can never become a node's
    /// spatial bound.
    pub fn new_with_config(bounds: Aabb, config: Config) -> QuadtreeResult<Self> {
        if !bounds.is_valid() {
            return Err(QuadtreeError::InvalidBounds {
                left: bounds.left(),
                top: bounds.top(),
                right: bounds.right(),
                bottom: bounds.bottom(),
            });
        }
        let mut nodes = Vec::with_capacity(config.pool_size.max(1));
        nodes.push(Node::new_leaf(bounds, None, 0, config.node_capacity));
        Ok(QuadTree {
            nodes,
            free_nodes: Vec::new(),
            config,
        })
    }

    pub(crate) fn alloc_node(&mut self, bounds: Aabb, parent: u32, depth: usize) -> u32 {
        let capacity = self.config.node_capacity;
        match self.free_nodes.pop() {
            Some(index) => {
                self.nodes[index as usize].initialize(bounds, Some(parent), depth, capacity);
                index
            }
            None => {
                self.nodes.push(Node::new_leaf(bounds, Some(parent), depth, capacity));
                (self.nodes.len() - 1) as u32
            }
        }
    }

    pub(crate) fn release_node(&mut self, index: u32) {
        debug_assert!(index != ROOT, "the root node is never released");
        self.free_nodes.push(index);
    }

    /// The root's static bounds.
    pub fn bounds(&self) -> &Aabb {
        &self.nodes[ROOT as usize].bounds
    }

    /// The root's aggregated envelope.
    pub fn max_bounds(&self) -> &Aabb {
        &self.nodes[ROOT as usize].max_bounds
    }

    pub fn has_children(&self) -> bool {
        self.nodes[ROOT as usize].children.is_some()
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            index: ROOT,
        }
    }

    /// Live objects in the whole tree.
    pub fn total_objects(&self) -> usize {
        self.total_objects_at(ROOT)
    }

    pub fn is_empty(&self) -> bool {
        self.total_objects() == 0
    }

    pub(crate) fn total_objects_at(&self, index: u32) -> usize {
        let node = &self.nodes[index as usize];
        let mut count = node.live_count;
        if let Some(children) = node.children {
            for child in children {
                count += self.total_objects_at(child);
            }
        }
        count
    }

    /// Live objects below this node, excluding its own slots.
    pub(crate) fn children_total_objects(&self, index: u32) -> usize {
        match self.nodes[index as usize].children {
            Some(children) => children
                .iter()
                .map(|&child| self.total_objects_at(child))
                .sum(),
            None => 0,
        }
    }

    /// Collects the static bounds of every node, root first.
    pub fn all_node_bounds(&self, bounds: &mut Vec<Aabb>) {
        self.node_bounds_at(ROOT, bounds);
    }

    fn node_bounds_at(&self, index: u32, out: &mut Vec<Aabb>) {
        out.push(self.nodes[index as usize].bounds);
        if let Some(children) = self.nodes[index as usize].children {
            for child in children {
                self.node_bounds_at(child, out);
            }
        }
    }
}
