use crate::math::{Axis, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-Aligned Bounding Box (AABB) in world coordinates.
///
/// `min` is the top-left corner and `max` the bottom-right corner; the y axis
/// grows downwards like screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner of the AABB
    pub min: Vector2,

    /// Maximum corner of the AABB
    pub max: Vector2,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from its top-left corner and its size
    #[inline]
    pub fn from_position_size(position: Vector2, width: f64, height: f64) -> Self {
        Self {
            min: position,
            max: Vector2::new(position.x + width, position.y + height),
        }
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extents of the AABB in each dimension
    #[inline]
    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    /// Checks if this AABB fully contains another AABB
    #[inline]
    pub fn contains_aabb(&self, other: &Self) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x &&
        self.min.y <= other.min.y && self.max.y >= other.max.y
    }

    /// Checks if this AABB overlaps another with a non-empty interior.
    ///
    /// Boxes that merely share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x && other.min.x < self.max.x &&
        self.min.y < other.max.y && other.min.y < self.max.y
    }

    /// Signed overlap length of the two boxes projected onto `axis`.
    ///
    /// Positive when the projections overlap, zero when they touch and
    /// negative when there is a gap between them.
    #[inline]
    pub fn overlap_on(&self, other: &Self, axis: Axis) -> f64 {
        let upper = self.max.component(axis).min(other.max.component(axis));
        let lower = self.min.component(axis).max(other.min.component(axis));
        upper - lower
    }
}
