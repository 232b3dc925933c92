use crate::bodies::RigidBody;
use crate::math::Vector2;
use crate::Result;

/// Trait for numerical integration algorithms.
///
/// Force application and position integration are separate calls so several
/// forces can act on a body within one step before it moves.
pub trait Integrator: Send + Sync {
    /// Applies `force` to `body` for a time slice of `dt`, changing its velocity
    fn apply_force(&self, body: &mut RigidBody, force: Vector2, dt: f64) -> Result<()>;

    /// Advances the body's position by its current velocity over `dt`
    fn integrate_position(&self, body: &mut RigidBody, dt: f64) -> Result<()>;

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
