use physix2d::{
    collision::{
        apply_bounce, contact, contact_geometry, ordered_pairs, overlaps, prevent_overlap,
        resolve_bounce,
    },
    error::PhysicsError,
    math::{Axis, Vector2},
    RigidBody,
};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn square(x: f64, y: f64, size: f64, mass: f64) -> RigidBody {
    RigidBody::new_dynamic(Vector2::new(x, y), size, size, mass).unwrap()
}

fn momentum(a: &RigidBody, b: &RigidBody) -> Vector2 {
    a.get_velocity() * a.get_mass() + b.get_velocity() * b.get_mass()
}

#[test]
fn test_overlap_is_strict_and_symmetric() {
    let a = square(0.0, 0.0, 10.0, 1.0);

    let overlapping = square(5.0, 5.0, 10.0, 1.0);
    assert!(overlaps(&a, &overlapping));
    assert!(overlaps(&overlapping, &a));

    // Sharing an edge or a corner is not overlapping
    assert!(!overlaps(&a, &square(10.0, 0.0, 10.0, 1.0)));
    assert!(!overlaps(&a, &square(0.0, 10.0, 10.0, 1.0)));
    assert!(!overlaps(&a, &square(10.0, 10.0, 10.0, 1.0)));

    // Overlapping on one axis only
    assert!(!overlaps(&a, &square(5.0, 20.0, 10.0, 1.0)));
    assert!(!overlaps(&a, &square(30.0, 30.0, 10.0, 1.0)));

    // Full containment
    let big = square(-10.0, -10.0, 40.0, 1.0);
    assert!(overlaps(&a, &big));
    assert!(overlaps(&big, &a));
}

#[test]
fn test_contact_picks_least_penetration_axis() {
    let a = square(100.0, 100.0, 50.0, 2.0);
    let b = square(140.0, 100.0, 50.0, 2.0);

    let ab = contact(&a, &b).unwrap();
    assert_eq!(ab.axis, Axis::X);
    assert_eq!(ab.penetration, 10.0);
    assert_eq!(ab.normal, Vector2::new(1.0, 0.0));

    let ba = contact(&b, &a).unwrap();
    assert_eq!(ba.axis, Axis::X);
    assert_eq!(ba.penetration, 10.0);
    assert_eq!(ba.normal, Vector2::new(-1.0, 0.0));

    let below = square(110.0, 145.0, 50.0, 2.0);
    let vertical = contact(&a, &below).unwrap();
    assert_eq!(vertical.axis, Axis::Y);
    assert_eq!(vertical.penetration, 5.0);
    assert_eq!(vertical.normal, Vector2::new(0.0, 1.0));

    assert!(contact(&a, &square(300.0, 300.0, 10.0, 1.0)).is_none());
}

#[test]
fn test_contact_tie_prefers_x() {
    let a = square(0.0, 0.0, 10.0, 1.0);
    let b = square(5.0, 5.0, 10.0, 1.0);

    let c = contact(&a, &b).unwrap();
    assert_eq!(c.axis, Axis::X);
    assert_eq!(c.penetration, 5.0);
}

#[test]
fn test_coincident_bodies_get_positive_normal() {
    let a = square(0.0, 0.0, 10.0, 1.0);
    let b = square(0.0, 0.0, 10.0, 1.0);

    let c = contact(&a, &b).unwrap();
    assert_eq!(c.axis, Axis::X);
    assert_eq!(c.normal, Vector2::new(1.0, 0.0));
}

#[test]
fn test_head_on_collision_separates_then_swaps_velocities() {
    let mut a = square(100.0, 100.0, 50.0, 2.0).with_velocity(Vector2::new(2.0, 0.0));
    let mut b = square(140.0, 100.0, 50.0, 2.0).with_velocity(Vector2::new(-2.0, 0.0));

    assert!(overlaps(&a, &b));

    let resolved = prevent_overlap(&mut a, &mut b).unwrap();
    assert_eq!(resolved.axis, Axis::X);
    assert_eq!(a.get_position(), Vector2::new(95.0, 100.0));
    assert_eq!(b.get_position(), Vector2::new(145.0, 100.0));

    let gap = b.get_bounds().min.x - a.get_bounds().max.x;
    assert_eq!(gap, 0.0);
    assert!(!overlaps(&a, &b));

    resolve_bounce(&mut a, &mut b, 1.0).unwrap();
    assert_relative_eq!(a.get_velocity(), Vector2::new(-2.0, 0.0));
    assert_relative_eq!(b.get_velocity(), Vector2::new(2.0, 0.0));
}

#[test]
fn test_static_body_absorbs_no_correction() {
    let mut wall = RigidBody::new_static(Vector2::new(0.0, 0.0), 50.0, 50.0).unwrap();
    let mut body = square(40.0, 0.0, 50.0, 3.0);

    prevent_overlap(&mut wall, &mut body).unwrap();

    assert_eq!(wall.get_position(), Vector2::new(0.0, 0.0));
    assert_eq!(body.get_position(), Vector2::new(50.0, 0.0));

    // Same pair with the static body second
    let mut body = square(-40.0, 0.0, 50.0, 3.0);
    let mut wall = RigidBody::new_static(Vector2::new(0.0, 0.0), 50.0, 50.0).unwrap();
    prevent_overlap(&mut body, &mut wall).unwrap();

    assert_eq!(wall.get_position(), Vector2::new(0.0, 0.0));
    assert_eq!(body.get_position(), Vector2::new(-50.0, 0.0));
}

#[test]
fn test_two_static_bodies_are_left_overlapping() {
    let mut a = RigidBody::new_static(Vector2::new(0.0, 0.0), 50.0, 50.0).unwrap();
    let mut b = RigidBody::new_static(Vector2::new(10.0, 10.0), 50.0, 50.0).unwrap();

    assert!(prevent_overlap(&mut a, &mut b).is_none());
    assert_eq!(a.get_position(), Vector2::new(0.0, 0.0));
    assert_eq!(b.get_position(), Vector2::new(10.0, 10.0));
    assert!(overlaps(&a, &b));
}

#[test]
fn test_separation_is_idempotent() {
    let mut a = square(0.0, 0.0, 10.0, 1.0);
    let mut b = square(3.0, 1.0, 10.0, 1.0);

    assert!(prevent_overlap(&mut a, &mut b).is_some());
    let (after_a, after_b) = (a.get_position(), b.get_position());

    assert!(prevent_overlap(&mut a, &mut b).is_none());
    assert_eq!(a.get_position(), after_a);
    assert_eq!(b.get_position(), after_b);
}

#[test]
fn test_separation_preserves_center_of_mass() {
    let mut light = square(0.0, 0.0, 10.0, 1.0);
    let mut heavy = square(6.0, 0.0, 10.0, 3.0);

    let center = |a: &RigidBody, b: &RigidBody| {
        (a.get_bounds().center().x * a.get_mass() + b.get_bounds().center().x * b.get_mass())
            / (a.get_mass() + b.get_mass())
    };
    let before = center(&light, &heavy);

    prevent_overlap(&mut light, &mut heavy).unwrap();

    // The light body takes three quarters of the correction
    assert_relative_eq!(light.get_position().x, -3.0, epsilon = 1e-9);
    assert_relative_eq!(heavy.get_position().x, 7.0, epsilon = 1e-9);
    assert_relative_eq!(center(&light, &heavy), before, epsilon = 1e-9);
    assert!(!overlaps(&light, &heavy));
}

#[test]
fn test_separation_when_one_box_spans_the_other() {
    // b is narrower than a on X but sticks out below it, so X has the least
    // overlap even though pushing b out takes more than that overlap
    let mut a = square(0.0, 0.0, 100.0, 1.0);
    let mut b = RigidBody::new_dynamic(Vector2::new(30.0, 40.0), 20.0, 120.0, 1.0).unwrap();

    let center_x = |a: &RigidBody, b: &RigidBody| {
        (a.get_bounds().center().x * a.get_mass() + b.get_bounds().center().x * b.get_mass())
            / (a.get_mass() + b.get_mass())
    };
    let before = center_x(&a, &b);

    let resolved = prevent_overlap(&mut a, &mut b).unwrap();
    assert_eq!(resolved.axis, Axis::X);
    assert_eq!(resolved.normal, Vector2::new(-1.0, 0.0));

    // Each body moves half of the 50 units between b's right edge and a's left edge
    assert_eq!(a.get_position().x, 25.0);
    assert_eq!(b.get_position().x, 5.0);
    assert_eq!(b.get_bounds().max.x, a.get_bounds().min.x);
    assert_eq!(center_x(&a, &b), before);
    assert!(!overlaps(&a, &b));
}

#[test]
fn test_random_overlaps_always_separate() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let mut a = RigidBody::new_dynamic(
            Vector2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
            rng.gen_range(1.0..60.0),
            rng.gen_range(1.0..60.0),
            rng.gen_range(0.1..10.0),
        )
        .unwrap();
        let offset = Vector2::new(
            rng.gen_range(-0.9..0.9) * a.get_width(),
            rng.gen_range(-0.9..0.9) * a.get_height(),
        );
        // Widths up to twice the largest first box, so either box may span the other
        let mut b = RigidBody::new_dynamic(
            a.get_position() + offset,
            rng.gen_range(1.0..120.0),
            rng.gen_range(1.0..120.0),
            rng.gen_range(0.1..10.0),
        )
        .unwrap();

        if rng.gen_bool(0.2) {
            b = RigidBody::new_static(b.get_position(), b.get_width(), b.get_height()).unwrap();
        }

        let center = |a: &RigidBody, b: &RigidBody, axis: Axis| {
            let (ca, cb) = (a.get_bounds().center(), b.get_bounds().center());
            (ca.component(axis) * a.get_mass() + cb.component(axis) * b.get_mass())
                / (a.get_mass() + b.get_mass())
        };
        let centers_before = [center(&a, &b, Axis::X), center(&a, &b, Axis::Y)];

        let was_overlapping = overlaps(&a, &b);
        let resolved = prevent_overlap(&mut a, &mut b);

        assert_eq!(resolved.is_some(), was_overlapping);
        assert!(!overlaps(&a, &b), "still overlapping: {:?} {:?}", a, b);

        let Some(contact) = resolved else {
            continue;
        };

        // The pair ends up touching, not pushed further apart than needed
        let axis = contact.axis;
        let gap = if contact.direction() > 0.0 {
            b.get_bounds().min.component(axis) - a.get_bounds().max.component(axis)
        } else {
            a.get_bounds().min.component(axis) - b.get_bounds().max.component(axis)
        };
        assert!((0.0..1e-9).contains(&gap), "gap {gap} after separation");

        if b.is_movable() {
            assert_relative_eq!(center(&a, &b, Axis::X), centers_before[0], epsilon = 1e-9);
            assert_relative_eq!(center(&a, &b, Axis::Y), centers_before[1], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_separating_pair_is_not_bounced() {
    let mut a = square(0.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(-1.0, 0.0));
    let mut b = square(50.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(1.0, 0.0));

    resolve_bounce(&mut a, &mut b, 1.0).unwrap();

    assert_eq!(a.get_velocity(), Vector2::new(-1.0, 0.0));
    assert_eq!(b.get_velocity(), Vector2::new(1.0, 0.0));
}

#[test]
fn test_distant_pair_is_not_bounced() {
    // Approaching each other but 100 units apart
    let mut a = square(0.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(3.0, 0.0));
    let mut b = square(150.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(-3.0, 0.0));

    resolve_bounce(&mut a, &mut b, 1.0).unwrap();
    assert_eq!(a.get_velocity(), Vector2::new(3.0, 0.0));
    assert_eq!(b.get_velocity(), Vector2::new(-3.0, 0.0));

    // Level on X but apart on Y
    let mut c = square(0.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(0.0, 2.0));
    let mut d = square(10.0, 80.0, 50.0, 1.0).with_velocity(Vector2::new(0.0, -2.0));

    resolve_bounce(&mut c, &mut d, 1.0).unwrap();
    assert_eq!(c.get_velocity(), Vector2::new(0.0, 2.0));
    assert_eq!(d.get_velocity(), Vector2::new(0.0, -2.0));
}

#[test]
fn test_bounce_keeps_tangential_velocity() {
    let mut a = square(0.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(2.0, 3.0));
    let mut b = square(50.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(-2.0, -1.0));

    resolve_bounce(&mut a, &mut b, 1.0).unwrap();

    assert_relative_eq!(a.get_velocity(), Vector2::new(-2.0, 3.0));
    assert_relative_eq!(b.get_velocity(), Vector2::new(2.0, -1.0));
}

#[test]
fn test_bounce_off_static_body() {
    let mut body = square(0.0, 0.0, 50.0, 2.0).with_velocity(Vector2::new(4.0, 1.0));
    let mut wall = RigidBody::new_static(Vector2::new(50.0, 0.0), 50.0, 50.0).unwrap();

    resolve_bounce(&mut body, &mut wall, 1.0).unwrap();

    assert_relative_eq!(body.get_velocity(), Vector2::new(-4.0, 1.0));
    assert!(wall.get_velocity().is_zero());
}

#[test]
fn test_inelastic_bounce_leaves_common_velocity() {
    let mut a = square(0.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(3.0, 0.0));
    let mut b = square(50.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(-1.0, 0.0));

    resolve_bounce(&mut a, &mut b, 0.0).unwrap();

    assert_relative_eq!(a.get_velocity(), Vector2::new(1.0, 0.0));
    assert_relative_eq!(b.get_velocity(), Vector2::new(1.0, 0.0));
}

#[test]
fn test_bounce_rejects_bad_restitution() {
    let mut a = square(0.0, 0.0, 50.0, 1.0).with_velocity(Vector2::new(1.0, 0.0));
    let mut b = square(50.0, 0.0, 50.0, 1.0);

    for restitution in [1.5, -0.1, f64::NAN] {
        assert!(matches!(
            resolve_bounce(&mut a, &mut b, restitution),
            Err(PhysicsError::InvalidParameter(_))
        ));
    }
    assert_eq!(a.get_velocity(), Vector2::new(1.0, 0.0));
    assert!(b.get_velocity().is_zero());
}

#[test]
fn test_random_bounces_conserve_momentum_and_lose_energy() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let mut a = square(0.0, 0.0, 50.0, rng.gen_range(0.5..5.0))
            .with_velocity(Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)));
        let mut b = square(
            rng.gen_range(-40.0..40.0),
            rng.gen_range(-40.0..40.0),
            50.0,
            rng.gen_range(0.5..5.0),
        )
        .with_velocity(Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)));
        let restitution = rng.gen_range(0.0..1.0);

        let momentum_before = momentum(&a, &b);
        let energy_before = a.kinetic_energy() + b.kinetic_energy();

        let Some(contact) = prevent_overlap(&mut a, &mut b) else {
            continue;
        };
        apply_bounce(&mut a, &mut b, &contact, restitution).unwrap();

        let energy_after = a.kinetic_energy() + b.kinetic_energy();
        assert!(energy_after <= energy_before + 1e-9);
        assert_relative_eq!(momentum(&a, &b), momentum_before, epsilon = 1e-9);

        // The pair no longer approaches along the normal
        let closing = (b.get_velocity() - a.get_velocity()).dot(&contact.normal);
        assert!(closing >= -1e-9);
    }
}

#[test]
fn test_contact_geometry_of_touching_pair() {
    let a = square(0.0, 0.0, 50.0, 1.0);
    let b = square(50.0, 10.0, 50.0, 1.0);

    let c = contact_geometry(&a, &b);
    assert_eq!(c.axis, Axis::X);
    assert_eq!(c.penetration, 0.0);
    assert_eq!(c.normal, Vector2::new(1.0, 0.0));
}

#[test]
fn test_ordered_pairs() {
    let pairs: Vec<_> = ordered_pairs(4).collect();
    assert_eq!(pairs, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);

    assert_eq!(ordered_pairs(1).count(), 0);
    assert_eq!(ordered_pairs(0).count(), 0);
}
