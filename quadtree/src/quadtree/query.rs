use super::*;
use common::shapes::Aabb;
use smallvec::SmallVec;

type NodeStack = SmallVec<[u32; 64]>;

impl QuadTree {
    /// Visits every live object whose rectangle intersects `bounds`.
    ///
    /// Both buffer-based output modes are wrappers over this, so all of
    /// them prune on the same rectangle: the aggregated envelope, never
    /// the static node bounds. Pass `bound_checks = false` to skip the
    /// envelope test when the query is known to cover the whole space.
    pub fn query_with<F>(&self, bounds: &Aabb, bound_checks: bool, mut f: F)
    where
        F: FnMut(&QuadTreeObject),
    {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index as usize];
            if bound_checks && !node.max_bounds.intersects(bounds) {
                continue;
            }
            // Children are pushed unconditionally; each performs its own
            // envelope test when popped.
            if let Some(children) = node.children {
                stack.extend_from_slice(&children);
            }
            if node.live_count == 0 {
                continue;
            }
            for object in node.slots.iter().flatten() {
                if object.bounds.intersects(bounds) {
                    f(object);
                }
            }
        }
    }

    /// Growable output mode: appends every match to `objects`.
    pub fn query(&self, bounds: &Aabb, bound_checks: bool, objects: &mut Vec<QuadTreeObject>) {
        self.query_with(bounds, bound_checks, |object| objects.push(*object));
    }

    /// Bounded output mode for zero-allocation hot paths: copies matches
    /// into `objects` starting at `*length` and advances the cursor.
    /// Matches beyond the end of the buffer are dropped, so size it for
    /// the worst case.
    pub fn query_into(
        &self,
        bounds: &Aabb,
        bound_checks: bool,
        objects: &mut [QuadTreeObject],
        length: &mut usize,
    ) {
        self.query_with(bounds, bound_checks, |object| {
            if *length < objects.len() {
                objects[*length] = *object;
                *length += 1;
            }
        });
    }
}
