mod vector;
mod aabb;

pub use vector::Vector2;
pub use aabb::Aabb;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Constant for a very small number, used for comparisons
pub const EPSILON: f64 = 1.0e-9;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// One of the two coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The unit vector pointing along the positive direction of this axis
    #[inline]
    pub fn unit(self) -> Vector2 {
        match self {
            Axis::X => Vector2::unit_x(),
            Axis::Y => Vector2::unit_y(),
        }
    }

    /// The perpendicular axis
    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Smallest representable `f64` strictly greater than `x`.
///
/// Used to push an edge past its neighbour by a single ulp when rounding
/// left two rectangles overlapping by less than the width of a float.
pub(crate) fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Largest representable `f64` strictly less than `x`.
pub(crate) fn next_down(x: f64) -> f64 {
    -next_up(-x)
}
