use rand::Rng;

/// Axis-aligned bounding box stored as its four edges, with the center
/// and dimensions cached alongside them.
///
/// The cached values are derived, not authoritative; they are recomputed
/// whenever the edges change, which is why the fields are private and the
/// only way to build an `Aabb` is through [`Aabb::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Aabb {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let mut aabb = Self {
            left,
            top,
            right,
            bottom,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
        aabb.set_center();
        aabb.set_dimensions();
        aabb
    }

    fn set_center(&mut self) {
        self.x = (self.left + self.right) / 2.0;
        self.y = (self.top + self.bottom) / 2.0;
    }

    fn set_dimensions(&mut self) {
        self.width = self.right - self.left;
        self.height = self.bottom - self.top;
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// A rectangle is valid when it has strictly positive extent on both
    /// axes. An invalid rectangle must never be used as a spatial bound.
    pub fn is_valid(&self) -> bool {
        self.left < self.right && self.top < self.bottom
    }

    /// Open-interval overlap test: edges that merely touch do not count
    /// as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Strict interior containment; boundary points are excluded.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }

    pub fn expand_to_include(&mut self, other: &Aabb) {
        self.left = f64::min(self.left, other.left);
        self.top = f64::min(self.top, other.top);
        self.right = f64::max(self.right, other.right);
        self.bottom = f64::max(self.bottom, other.bottom);
        self.set_center();
        self.set_dimensions();
    }

    pub fn get_random_aabb_inside<R: Rng>(&self, width: f64, height: f64, rng: &mut R) -> Aabb {
        // Keep a minimal margin so the box lands strictly inside.
        let left = self._safe_randf64(rng, self.left + 1.0, self.right - width - 1.0);
        let top = self._safe_randf64(rng, self.top + 1.0, self.bottom - height - 1.0);
        Aabb::new(left, top, left + width, top + height)
    }

    fn _safe_randf64<R: Rng>(&self, rng: &mut R, min: f64, max: f64) -> f64 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
