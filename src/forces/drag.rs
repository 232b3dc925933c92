use crate::forces::ForceGenerator;
use crate::bodies::RigidBody;
use crate::math::Vector2;
use std::any::Any;

/// A force generator that simulates drag (air resistance)
#[derive(Debug, Clone)]
pub struct DragForce {
    /// Linear drag coefficient (k1 * v)
    linear_coefficient: f64,

    /// Quadratic drag coefficient (k2 * v^2)
    quadratic_coefficient: f64,

    /// Whether the force generator is enabled
    enabled: bool,
}

impl DragForce {
    /// Creates a new drag force generator with the given coefficients
    pub fn new(linear_coefficient: f64, quadratic_coefficient: f64) -> Self {
        Self {
            linear_coefficient: linear_coefficient.max(0.0),
            quadratic_coefficient: quadratic_coefficient.max(0.0),
            enabled: true,
        }
    }

    /// Creates a purely velocity-proportional drag, `F = -k * v`
    pub fn linear(coefficient: f64) -> Self {
        Self::new(coefficient, 0.0)
    }

    /// Returns whether the force generator is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the force generator is enabled
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Gets the linear drag coefficient
    pub fn get_linear_coefficient(&self) -> f64 {
        self.linear_coefficient
    }

    /// Sets the linear drag coefficient
    pub fn set_linear_coefficient(&mut self, coefficient: f64) {
        self.linear_coefficient = coefficient.max(0.0);
    }

    /// Gets the quadratic drag coefficient
    pub fn get_quadratic_coefficient(&self) -> f64 {
        self.quadratic_coefficient
    }

    /// Sets the quadratic drag coefficient
    pub fn set_quadratic_coefficient(&mut self, coefficient: f64) {
        self.quadratic_coefficient = coefficient.max(0.0);
    }
}

impl ForceGenerator for DragForce {
    fn generator_type(&self) -> &'static str {
        "Drag"
    }

    fn force_on(&self, body: &RigidBody) -> Vector2 {
        // F_drag = -(k1 * |v| + k2 * |v|^2) * v_hat = -(k1 + k2 * |v|) * v
        let velocity = body.get_velocity();
        let speed = velocity.magnitude();
        let coefficient = self.linear_coefficient + self.quadratic_coefficient * speed;

        -(velocity * coefficient)
    }

    fn affects_body(&self, body: &RigidBody) -> bool {
        self.enabled && body.is_affected_by_drag()
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
