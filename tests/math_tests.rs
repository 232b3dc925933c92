use physix2d::math::{Aabb, Axis, Vector2};
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 8.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 4.0);

    // Scalar multiplication
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, v1.scale(2.0));
    assert_eq!(v2 / 2.0, Vector2::new(2.0, 3.0));
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));

    // Dot product
    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * 6.0);

    // Magnitude of a 3-4-5 triangle
    assert_eq!(diff.magnitude(), 5.0);
    assert_eq!(diff.magnitude_squared(), 25.0);
    assert_eq!(diff.length(), diff.magnitude());

    // Normalize
    let normalized = v2.normalize();
    assert_relative_eq!(normalized.magnitude(), 1.0);
    assert_relative_eq!(normalized.x, v2.x / v2.magnitude());
    assert_relative_eq!(normalized.y, v2.y / v2.magnitude());
}

#[test]
fn test_vector2_compound_assignment() {
    let mut v = Vector2::new(1.0, 1.0);
    v += Vector2::new(2.0, 3.0);
    assert_eq!(v, Vector2::new(3.0, 4.0));
    v -= Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(2.0, 3.0));
    v *= 3.0;
    assert_eq!(v, Vector2::new(6.0, 9.0));
    v /= 3.0;
    assert_eq!(v, Vector2::new(2.0, 3.0));
}

#[test]
fn test_zero_vector_stays_zero_when_normalized() {
    let zero = Vector2::zero();
    assert!(zero.is_zero());
    assert_eq!(zero.normalize(), zero);
    assert!(!Vector2::unit_x().is_zero());
}

#[test]
fn test_vector2_components_and_conversions() {
    let mut v = Vector2::new(7.0, -3.0);
    assert_eq!(v.component(Axis::X), 7.0);
    assert_eq!(v.component(Axis::Y), -3.0);

    *v.component_mut(Axis::Y) = 5.0;
    assert_eq!(v, Vector2::new(7.0, 5.0));

    let array: [f64; 2] = v.into();
    assert_eq!(array, [7.0, 5.0]);

    let na = v.to_nalgebra();
    assert_eq!(na.x, 7.0);
    assert_eq!(na.y, 5.0);
    assert_eq!(Vector2::from_nalgebra(&(na * 2.0)), Vector2::new(14.0, 10.0));

    assert_eq!(format!("{}", v), "(7, 5)");
    assert_eq!(Axis::X.unit(), Vector2::unit_x());
    assert_eq!(Axis::Y.unit(), Vector2::unit_y());
}

#[test]
fn test_vector2_approx_comparison() {
    let a = Vector2::new(0.1 + 0.2, 1.0);
    let b = Vector2::new(0.3, 1.0);
    assert_ne!(a, b);
    assert_relative_eq!(a, b);
}

#[test]
fn test_aabb_from_position_size() {
    let aabb = Aabb::from_position_size(Vector2::new(100.0, 200.0), 50.0, 20.0);
    assert_eq!(aabb.min, Vector2::new(100.0, 200.0));
    assert_eq!(aabb.max, Vector2::new(150.0, 220.0));
    assert_eq!(aabb.center(), Vector2::new(125.0, 210.0));
    assert_eq!(aabb.extents(), Vector2::new(50.0, 20.0));
}

#[test]
fn test_aabb_intersection_is_strict() {
    let a = Aabb::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
    let overlapping = Aabb::new(Vector2::new(5.0, 5.0), Vector2::new(15.0, 15.0));
    let touching = Aabb::new(Vector2::new(10.0, 0.0), Vector2::new(20.0, 10.0));
    let apart = Aabb::new(Vector2::new(11.0, 0.0), Vector2::new(20.0, 10.0));

    assert!(a.intersects(&overlapping));
    assert!(overlapping.intersects(&a));
    assert!(!a.intersects(&touching));
    assert!(!a.intersects(&apart));

    assert_eq!(a.overlap_on(&overlapping, Axis::X), 5.0);
    assert_eq!(a.overlap_on(&touching, Axis::X), 0.0);
    assert_eq!(a.overlap_on(&apart, Axis::X), -1.0);
    assert_eq!(a.overlap_on(&touching, Axis::Y), 10.0);
}

#[test]
fn test_aabb_containment() {
    let outer = Aabb::new(Vector2::new(0.0, 0.0), Vector2::new(100.0, 100.0));
    let inner = Aabb::new(Vector2::new(10.0, 10.0), Vector2::new(20.0, 20.0));
    assert!(outer.contains_aabb(&inner));
    assert!(!inner.contains_aabb(&outer));
    assert!(outer.contains_aabb(&outer));
}
