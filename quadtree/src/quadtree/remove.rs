use super::*;

impl QuadTree {
    /// Removes the live object whose id matches `object.id`.
    ///
    /// The rectangle in `object` is only used to route the search: a node
    /// is searched iff its bounds intersect it, mirroring the routing
    /// decision `insert` made. Returns `false` when no intersecting part
    /// of the tree holds a live object with that id, including a second
    /// call after a successful removal.
    pub fn remove(&mut self, object: &QuadTreeObject) -> bool {
        self.remove_at(ROOT, object)
    }

    fn remove_at(&mut self, index: u32, object: &QuadTreeObject) -> bool {
        if !self.nodes[index as usize].bounds.intersects(&object.bounds) {
            return false;
        }

        if self.nodes[index as usize].live_count > 0 {
            let node = &mut self.nodes[index as usize];
            let hit = node
                .slots
                .iter()
                .position(|slot| matches!(slot, Some(held) if held.id == object.id));
            if let Some(slot) = hit {
                node.slots[slot] = None;
                node.live_count -= 1;
                self.remove_empty_nodes(index);
                self.resolve_max_bounds(index);
                return true;
            }
        }

        if let Some(children) = self.nodes[index as usize].children {
            for child in children {
                if self.remove_at(child, object) {
                    // The removal may have emptied everything below this
                    // node; collapse the children before reporting back.
                    if self.children_total_objects(index) == 0 {
                        self.merge(index);
                        self.resolve_max_bounds(index);
                    }
                    return true;
                }
            }
        }

        false
    }
}
