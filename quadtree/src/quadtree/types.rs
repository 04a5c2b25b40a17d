use common::shapes::Aabb;

pub(crate) const CHILDREN: usize = 4;
pub(crate) const ROOT: u32 = 0;

/// One indexed object: a rectangle, an opaque payload handle the tree
/// never interprets, and the caller-assigned id used to remove it later.
///
/// Ids must be unique among the objects currently live in one tree; the
/// id is the sole key removal matches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTreeObject {
    pub bounds: Aabb,
    pub value: u32,
    pub id: u64,
}

impl QuadTreeObject {
    pub fn new(bounds: Aabb, value: u32, id: u64) -> Self {
        Self { bounds, value, id }
    }
}

pub(crate) struct Node {
    /// Static spatial bound, fixed when the node is (re)initialized.
    pub(crate) bounds: Aabb,
    /// Envelope over `bounds`, every live slot and every child's
    /// `max_bounds`; maintained bottom-up on every population change.
    pub(crate) max_bounds: Aabb,
    /// Tombstoned slots stay `None` and are recycled by later inserts.
    /// The vector only grows past the configured capacity when a depth-
    /// or size-limited node absorbs overflow directly.
    pub(crate) slots: Vec<Option<QuadTreeObject>>,
    pub(crate) live_count: usize,
    /// A node has either no children or exactly four, in top-left,
    /// top-right, bottom-right, bottom-left order.
    pub(crate) children: Option<[u32; CHILDREN]>,
    /// Back index for upward envelope propagation; never an owner.
    pub(crate) parent: Option<u32>,
    pub(crate) depth: usize,
}

impl Node {
    pub(crate) fn new_leaf(bounds: Aabb, parent: Option<u32>, depth: usize, capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize(capacity, None);
        Self {
            bounds,
            max_bounds: bounds,
            slots,
            live_count: 0,
            children: None,
            parent,
            depth,
        }
    }

    /// Reinitializes a node recycled from the free list.
    pub(crate) fn initialize(
        &mut self,
        bounds: Aabb,
        parent: Option<u32>,
        depth: usize,
        capacity: usize,
    ) {
        self.bounds = bounds;
        self.max_bounds = bounds;
        self.slots.clear();
        self.slots.resize(capacity, None);
        self.live_count = 0;
        self.children = None;
        self.parent = parent;
        self.depth = depth;
    }

    pub(crate) fn first_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }
}
