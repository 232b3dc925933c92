use tracing::trace;

use crate::bodies::RigidBody;
use crate::collision::{
    apply_bounce, ordered_pairs, pair_mut, prevent_overlap, reflect, CollisionPair, WorldBounds,
};
use crate::forces::ForceRegistry;
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::Result;

/// Runs one simulation tick over `bodies`.
///
/// The tick runs in four passes, each over every body in slice order:
/// 1. apply every force generator in `forces` to the body's velocity;
/// 2. move the body by its velocity over `dt`;
/// 3. reflect its velocity at the world `bounds`;
/// 4. for each pair `(i, j)` with `i < j`, ascending, separate the pair if it
///    overlaps and then bounce it with `restitution`.
///
/// Pairs are resolved one after another, so a body pushed out of one pair
/// can end up overlapping a body of a later pair in the same tick; that pair
/// then sees the already-corrected position. This order is part of the
/// result and the loop must stay sequential for runs to be reproducible.
///
/// Arguments are validated before any body is touched: a negative or
/// non-finite `dt` or a restitution outside `[0, 1]` returns an error and
/// leaves `bodies` unchanged. Returns the pairs that were resolved, in the
/// order they were processed.
pub fn step(
    bodies: &mut [RigidBody],
    forces: &ForceRegistry,
    dt: f64,
    bounds: &WorldBounds,
    restitution: f64,
) -> Result<Vec<CollisionPair>> {
    crate::validate_time_step(dt)?;
    crate::validate_restitution(restitution)?;
    bounds.validate()?;

    let integrator = SymplecticEulerIntegrator::new();

    for body in bodies.iter_mut() {
        forces.apply_to(body, &integrator, dt)?;
    }

    for body in bodies.iter_mut() {
        integrator.integrate_position(body, dt)?;
    }

    for body in bodies.iter_mut() {
        reflect(body, bounds);
    }

    let mut resolved = Vec::new();

    for (i, j) in ordered_pairs(bodies.len()) {
        let (a, b) = pair_mut(bodies, i, j);

        let Some(contact) = prevent_overlap(a, b) else {
            continue;
        };
        apply_bounce(a, b, &contact, restitution)?;

        trace!(
            body_a = i,
            body_b = j,
            axis = ?contact.axis,
            penetration = contact.penetration,
            "resolved contact"
        );

        resolved.push(CollisionPair {
            body_a: i,
            body_b: j,
            contact,
        });
    }

    trace!(dt, bodies = bodies.len(), contacts = resolved.len(), "step complete");

    Ok(resolved)
}
