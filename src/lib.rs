pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod forces;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{step, BodyHandle, PhysicsWorld, SimulationConfig};
pub use crate::bodies::{RigidBody, RigidBodyType};
pub use crate::collision::WorldBounds;
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid body configuration: mass {mass}, width {width}, height {height} (all must be finite and > 0)")]
        InvalidBodyConfiguration {
            mass: f64,
            width: f64,
            height: f64,
        },

        #[error("Invalid time step: {0} (must be finite and >= 0)")]
        InvalidTimeStep(f64),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Checks that `dt` is usable as a time slice
pub(crate) fn validate_time_step(dt: f64) -> Result<()> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(error::PhysicsError::InvalidTimeStep(dt))
    }
}

/// Checks that a restitution coefficient lies in `[0, 1]`
pub(crate) fn validate_restitution(restitution: f64) -> Result<()> {
    if (0.0..=1.0).contains(&restitution) {
        Ok(())
    } else {
        Err(error::PhysicsError::InvalidParameter(format!(
            "restitution {} is outside [0, 1]",
            restitution
        )))
    }
}
