#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Type of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum RigidBodyType {
    /// Dynamic bodies are moved by forces, boundaries and collisions
    #[default]
    Dynamic,

    /// Static bodies never move and act as infinite mass in collisions
    Static,
}

impl RigidBodyType {
    /// Returns true for bodies the simulation is allowed to move
    #[inline]
    pub fn is_movable(self) -> bool {
        self == RigidBodyType::Dynamic
    }
}
