mod force_generator;
mod gravity;
mod drag;

pub use self::force_generator::{ForceGenerator, ForceRegistry, ConstantForceGenerator};
pub use self::gravity::GravityForce;
pub use self::drag::DragForce;
