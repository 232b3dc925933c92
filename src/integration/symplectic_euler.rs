use crate::bodies::RigidBody;
use crate::integration::Integrator;
use crate::math::Vector2;
use crate::Result;

/// Symplectic Euler integrator (semi-implicit Euler)
/// More stable than explicit Euler for physics simulations
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn apply_force(&self, body: &mut RigidBody, force: Vector2, dt: f64) -> Result<()> {
        crate::validate_time_step(dt)?;

        // Immovable bodies never pick up velocity from forces
        if !body.is_movable() {
            return Ok(());
        }

        // F = ma, a = F/m
        let acceleration = force / body.get_mass();
        body.set_velocity(body.get_velocity() + acceleration * dt);

        Ok(())
    }

    fn integrate_position(&self, body: &mut RigidBody, dt: f64) -> Result<()> {
        crate::validate_time_step(dt)?;

        if !body.is_movable() {
            return Ok(());
        }

        // Position uses the velocity already updated by this step's forces
        body.set_position(body.get_position() + body.get_velocity() * dt);

        Ok(())
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
