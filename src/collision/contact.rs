use crate::math::{Axis, Vector2};

/// Geometry of a contact between two axis-aligned boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The axis of least penetration
    pub axis: Axis,

    /// Unit normal along `axis`, pointing from the first body towards the second
    pub normal: Vector2,

    /// Overlap depth along `axis`; zero when touching, negative when apart
    pub penetration: f64,
}

impl Contact {
    /// Returns +1 if the normal points along the positive axis, -1 otherwise
    #[inline]
    pub fn direction(&self) -> f64 {
        self.normal.component(self.axis).signum()
    }
}
