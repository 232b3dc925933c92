use crate::collision::WorldBounds;
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The fixed time step used when advancing by wall-clock time
    pub time_step: f64,

    /// The maximum number of fixed steps taken by one call to `advance`
    pub max_substeps: u32,

    /// Gravity acceleration applied to every body that accepts it
    pub gravity: Vector2,

    /// Velocity-proportional drag coefficient, `F = -linear_drag * v`
    pub linear_drag: f64,

    /// Coefficient of restitution for body-body collisions, 0-1
    pub restitution: f64,

    /// The rectangle bodies bounce back from
    pub bounds: WorldBounds,
}

impl SimulationConfig {
    /// Checks every field, returning the first problem found
    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "time_step {} must be finite and > 0",
                self.time_step
            )));
        }

        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "max_substeps must be at least 1".to_string(),
            ));
        }

        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "gravity {} must be finite",
                self.gravity
            )));
        }

        if !(self.linear_drag.is_finite() && self.linear_drag >= 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "linear_drag {} must be finite and >= 0",
                self.linear_drag
            )));
        }

        crate::validate_restitution(self.restitution)?;
        self.bounds.validate()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.1,
            max_substeps: 10,
            gravity: Vector2::zero(),
            linear_drag: 2.0,
            restitution: 1.0,
            bounds: WorldBounds::ARENA,
        }
    }
}
