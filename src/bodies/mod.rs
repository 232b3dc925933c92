mod rigid_body;
mod body_type;

pub use self::rigid_body::RigidBody;
pub use self::body_type::RigidBodyType;
pub use self::body_flags::BodyFlags;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling which parts of a step act on a body
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
        pub struct BodyFlags: u32 {
            /// Body is affected by gravity generators
            const AFFECTED_BY_GRAVITY = 0x01;

            /// Body is slowed by drag generators
            const AFFECTED_BY_DRAG = 0x02;

            /// Resolved contacts involving this body are reported as events
            const GENERATE_COLLISION_EVENTS = 0x04;
        }
    }

    impl Default for BodyFlags {
        fn default() -> Self {
            Self::all()
        }
    }
}
