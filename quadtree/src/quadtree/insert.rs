use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};

impl QuadTree {
    /// Inserts an object, routing it to the first node that can hold it.
    ///
    /// Returns `Ok(false)` when the object's rectangle does not intersect
    /// the root bounds; the object is simply not stored. A rectangle that
    /// intersects a split node but none of its four quadrants indicates
    /// degenerate geometry and is reported as
    /// [`QuadtreeError::OutOfRange`] rather than silently dropped.
    pub fn insert(&mut self, object: QuadTreeObject) -> QuadtreeResult<bool> {
        if !object.bounds.is_valid() {
            return Err(QuadtreeError::InvalidBounds {
                left: object.bounds.left(),
                top: object.bounds.top(),
                right: object.bounds.right(),
                bottom: object.bounds.bottom(),
            });
        }
        self.insert_at(ROOT, object)
    }

    fn insert_at(&mut self, index: u32, object: QuadTreeObject) -> QuadtreeResult<bool> {
        if !self.nodes[index as usize].bounds.intersects(&object.bounds) {
            return Ok(false);
        }

        if self.nodes[index as usize].live_count < self.config.node_capacity {
            self.place(index, object);
            return Ok(true);
        }

        // Depth- and size-limited nodes absorb overflow directly instead
        // of subdividing without bound under coincident input.
        if !self.can_split(index) {
            self.place(index, object);
            return Ok(true);
        }

        self.split(index);
        if let Some(children) = self.nodes[index as usize].children {
            for child in children {
                if self.insert_at(child, object)? {
                    return Ok(true);
                }
            }
        }
        Err(QuadtreeError::OutOfRange {
            left: object.bounds.left(),
            top: object.bounds.top(),
            right: object.bounds.right(),
            bottom: object.bounds.bottom(),
        })
    }

    /// Places the object in the first tombstoned slot, growing the slot
    /// vector only when an overflow-absorbing node is already full.
    fn place(&mut self, index: u32, object: QuadTreeObject) {
        let node = &mut self.nodes[index as usize];
        match node.first_free_slot() {
            Some(slot) => node.slots[slot] = Some(object),
            None => node.slots.push(Some(object)),
        }
        node.live_count += 1;
        self.resolve_max_bounds(index);
    }

    fn can_split(&self, index: u32) -> bool {
        let node = &self.nodes[index as usize];
        if node.depth >= self.config.max_depth {
            return false;
        }
        node.bounds.width() / 2.0 >= self.config.min_size
            && node.bounds.height() / 2.0 >= self.config.min_size
    }
}
