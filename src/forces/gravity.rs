use crate::forces::ForceGenerator;
use crate::bodies::RigidBody;
use crate::math::Vector2;
use std::any::Any;

/// A force generator that applies uniform gravity to bodies
#[derive(Debug, Clone)]
pub struct GravityForce {
    /// The gravity acceleration vector
    gravity: Vector2,

    /// Whether the force generator is enabled
    enabled: bool,
}

impl GravityForce {
    /// Creates a new gravity force generator with the given acceleration
    pub fn new(gravity: Vector2) -> Self {
        Self {
            gravity,
            enabled: true,
        }
    }

    /// Returns whether the force generator is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the force generator is enabled
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Gets the current gravity acceleration
    pub fn get_gravity(&self) -> Vector2 {
        self.gravity
    }

    /// Sets the gravity acceleration vector
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.gravity = gravity;
    }
}

impl ForceGenerator for GravityForce {
    fn generator_type(&self) -> &'static str {
        "Gravity"
    }

    fn force_on(&self, body: &RigidBody) -> Vector2 {
        // F = m * g
        self.gravity * body.get_mass()
    }

    fn affects_body(&self, body: &RigidBody) -> bool {
        self.enabled && body.is_affected_by_gravity()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_generator(&self) -> Box<dyn ForceGenerator> {
        Box::new(self.clone())
    }
}
