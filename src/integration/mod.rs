mod integrator;
mod symplectic_euler;

pub use self::integrator::Integrator;
pub use self::symplectic_euler::SymplecticEulerIntegrator;

use crate::bodies::RigidBody;
use crate::math::Vector2;
use crate::Result;

/// Applies `force` to `body` for `dt` using the default integrator
pub fn apply_force(body: &mut RigidBody, force: Vector2, dt: f64) -> Result<()> {
    SymplecticEulerIntegrator.apply_force(body, force, dt)
}

/// Advances `body` by its velocity over `dt` using the default integrator
pub fn integrate_position(body: &mut RigidBody, dt: f64) -> Result<()> {
    SymplecticEulerIntegrator.integrate_position(body, dt)
}
