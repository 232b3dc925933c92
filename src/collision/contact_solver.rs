use crate::bodies::RigidBody;
use crate::collision::{collision_detector, Contact};
use crate::math::{next_down, next_up, Axis, EPSILON};
use crate::Result;

/// Upper bound on ulp nudges needed to clear rounding residue
const MAX_SETTLE_ITERATIONS: usize = 8;

/// Pushes two overlapping bodies apart along the axis of least penetration.
///
/// The correction is split in proportion to the bodies' inverse masses, so
/// an immovable body absorbs none of it and two movable bodies keep their
/// shared center of mass. Afterwards the rectangles touch without
/// overlapping. Returns the contact that was resolved, or `None` if the
/// bodies did not overlap or neither can move.
pub fn prevent_overlap(a: &mut RigidBody, b: &mut RigidBody) -> Option<Contact> {
    let contact = collision_detector::contact(a, b)?;

    let inv_mass_a = a.get_inverse_mass();
    let inv_mass_b = b.get_inverse_mass();
    let inv_mass_sum = inv_mass_a + inv_mass_b;

    if inv_mass_sum <= 0.0 {
        return None;
    }

    let axis = contact.axis;
    let correction = separation(a, b, &contact) * contact.direction();

    shift(a, axis, -correction * (inv_mass_a / inv_mass_sum));
    shift(b, axis, correction * (inv_mass_b / inv_mass_sum));

    if contact.direction() > 0.0 {
        settle(a, b, axis);
    } else {
        settle(b, a, axis);
    }

    Some(contact)
}

/// Applies an impulse bounce between two bodies that are in contact.
///
/// The collision normal is recomputed from the current geometry, which
/// also works for a pair [`prevent_overlap`] has just separated. Bodies that
/// neither touch nor overlap are left alone.
pub fn resolve_bounce(a: &mut RigidBody, b: &mut RigidBody, restitution: f64) -> Result<()> {
    crate::validate_restitution(restitution)?;

    let contact = collision_detector::contact_geometry(a, b);
    let side_overlap = a
        .get_bounds()
        .overlap_on(&b.get_bounds(), contact.axis.other());

    // A separated pair may be left an ulp apart
    if contact.penetration < -EPSILON || side_overlap <= 0.0 {
        return Ok(());
    }

    apply_bounce(a, b, &contact, restitution)
}

/// Applies an impulse bounce along the normal of `contact`.
///
/// Nothing happens if the bodies are already moving apart along the normal.
/// Only the normal component of each movable body's velocity changes.
pub fn apply_bounce(
    a: &mut RigidBody,
    b: &mut RigidBody,
    contact: &Contact,
    restitution: f64,
) -> Result<()> {
    crate::validate_restitution(restitution)?;

    let inv_mass_a = a.get_inverse_mass();
    let inv_mass_b = b.get_inverse_mass();
    let inv_mass_sum = inv_mass_a + inv_mass_b;

    if inv_mass_sum <= 0.0 {
        return Ok(());
    }

    let normal = contact.normal;
    let relative_velocity = (b.get_velocity() - a.get_velocity()).dot(&normal);

    // Separating or resting
    if relative_velocity >= 0.0 {
        return Ok(());
    }

    let impulse_magnitude = -(1.0 + restitution) * relative_velocity / inv_mass_sum;
    let impulse = normal * impulse_magnitude;

    if a.is_movable() {
        a.set_velocity(a.get_velocity() - impulse * inv_mass_a);
    }
    if b.is_movable() {
        b.set_velocity(b.get_velocity() + impulse * inv_mass_b);
    }

    Ok(())
}

/// Distance the pair must move apart along the contact normal.
///
/// Equal to the penetration unless one box spans the other on the contact
/// axis, where it is the full distance from the far edge of one to the near
/// edge of the other.
fn separation(a: &RigidBody, b: &RigidBody, contact: &Contact) -> f64 {
    let axis = contact.axis;
    let (bounds_a, bounds_b) = (a.get_bounds(), b.get_bounds());

    if contact.direction() > 0.0 {
        bounds_a.max.component(axis) - bounds_b.min.component(axis)
    } else {
        bounds_b.max.component(axis) - bounds_a.min.component(axis)
    }
}

fn shift(body: &mut RigidBody, axis: Axis, amount: f64) {
    if !body.is_movable() || amount == 0.0 {
        return;
    }

    let mut position = body.get_position();
    *position.component_mut(axis) += amount;
    body.set_position(position);
}

/// Clears any overlap rounding left between `low` (the body on the negative
/// side along `axis`) and `high`, moving whichever body is movable.
fn settle(low: &mut RigidBody, high: &mut RigidBody, axis: Axis) {
    for _ in 0..MAX_SETTLE_ITERATIONS {
        let low_edge = low.get_position().component(axis) + low.get_extent(axis);
        let high_edge = high.get_position().component(axis);
        let excess = low_edge - high_edge;

        if excess <= 0.0 {
            return;
        }

        if high.is_movable() {
            let mut position = high.get_position();
            let value = position.component_mut(axis);
            *value = next_up(*value + excess);
            high.set_position(position);
        } else {
            let mut position = low.get_position();
            let value = position.component_mut(axis);
            *value = next_down(*value - excess);
            low.set_position(position);
        }
    }
}
