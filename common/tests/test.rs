use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let aabb = Aabb::new(0.0, 0.0, 4.0, 6.0);
    assert_eq!(aabb.left(), 0.0);
    assert_eq!(aabb.top(), 0.0);
    assert_eq!(aabb.right(), 4.0);
    assert_eq!(aabb.bottom(), 6.0);
    assert_eq!(aabb.x(), 2.0);
    assert_eq!(aabb.y(), 3.0);
    assert_eq!(aabb.width(), 4.0);
    assert_eq!(aabb.height(), 6.0);
}

#[test]
fn test_is_valid() {
    assert!(Aabb::new(0.0, 0.0, 1.0, 1.0).is_valid());
    assert!(!Aabb::new(0.0, 0.0, 0.0, 1.0).is_valid());
    assert!(!Aabb::new(0.0, 0.0, 1.0, 0.0).is_valid());
    assert!(!Aabb::new(1.0, 1.0, 0.0, 0.0).is_valid());
    assert!(!Aabb::default().is_valid());
}

#[test]
fn test_intersects_overlapping() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let b = Aabb::new(5.0, 5.0, 15.0, 15.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_intersects_contained() {
    let outer = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let inner = Aabb::new(2.0, 2.0, 3.0, 3.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn test_intersects_touching_edges() {
    // Edges that merely touch do not count as intersecting.
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let right = Aabb::new(10.0, 0.0, 20.0, 10.0);
    let below = Aabb::new(0.0, 10.0, 10.0, 20.0);
    let corner = Aabb::new(10.0, 10.0, 20.0, 20.0);
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
    assert!(!a.intersects(&corner));
}

#[test]
fn test_intersects_disjoint() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let b = Aabb::new(20.0, 20.0, 30.0, 30.0);
    assert!(!a.intersects(&b));
}

#[test]
fn test_contains_interior_point() {
    let aabb = Aabb::new(0.0, 0.0, 4.0, 6.0);
    assert!(aabb.contains(2.0, 3.0));
    assert!(!aabb.contains(6.0, 3.0));
    assert!(!aabb.contains(2.0, 8.0));
}

#[test]
fn test_contains_excludes_boundary() {
    let aabb = Aabb::new(0.0, 0.0, 4.0, 6.0);
    assert!(!aabb.contains(0.0, 3.0));
    assert!(!aabb.contains(4.0, 3.0));
    assert!(!aabb.contains(2.0, 0.0));
    assert!(!aabb.contains(2.0, 6.0));
    assert!(!aabb.contains(0.0, 0.0));
}

#[test]
fn test_expand_to_include() {
    let mut aabb = Aabb::new(0.0, 0.0, 4.0, 6.0);
    let other = Aabb::new(2.0, 4.0, 8.0, 5.0);
    aabb.expand_to_include(&other);
    assert_eq!(aabb.left(), 0.0);
    assert_eq!(aabb.top(), 0.0);
    assert_eq!(aabb.right(), 8.0);
    assert_eq!(aabb.bottom(), 6.0);
    // The cached center and dimensions follow the new edges.
    assert_eq!(aabb.x(), 4.0);
    assert_eq!(aabb.y(), 3.0);
    assert_eq!(aabb.width(), 8.0);
    assert_eq!(aabb.height(), 6.0);
}

#[test]
fn test_expand_to_include_no_growth() {
    let mut aabb = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let inner = Aabb::new(2.0, 2.0, 3.0, 3.0);
    aabb.expand_to_include(&inner);
    assert_eq!(aabb, Aabb::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_get_random_aabb_inside() {
    let bounds = Aabb::new(0.0, 0.0, 100.0, 100.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..10 {
        let aabb = bounds.get_random_aabb_inside(5.0, 5.0, &mut rng);
        assert!(aabb.is_valid());
        assert!(bounds.intersects(&aabb));
        assert!(aabb.left() >= bounds.left());
        assert!(aabb.top() >= bounds.top());
        assert!(aabb.right() <= bounds.right());
        assert!(aabb.bottom() <= bounds.bottom());
    }
}

#[test]
fn test_get_random_aabb_inside_small_bounds() {
    let bounds = Aabb::new(0.0, 0.0, 4.0, 4.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    // The requested size does not fit with margins; the box is clamped to
    // the top-left corner instead.
    let aabb = bounds.get_random_aabb_inside(4.0, 4.0, &mut rng);
    assert_eq!(aabb.left(), bounds.left() + 1.0);
    assert_eq!(aabb.top(), bounds.top() + 1.0);
}
