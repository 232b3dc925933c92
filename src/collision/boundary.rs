use crate::bodies::RigidBody;
use crate::error::PhysicsError;
use crate::math::{Aabb, Axis, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The fixed rectangle that contains the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldBounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl WorldBounds {
    /// The walled 550x550 arena starting at (100, 100)
    pub const ARENA: WorldBounds = WorldBounds {
        min_x: 100.0,
        min_y: 100.0,
        max_x: 650.0,
        max_y: 650.0,
    };

    /// Creates world bounds, rejecting empty or non-finite rectangles
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let bounds = Self { min_x, min_y, max_x, max_y };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks that the bounds describe a finite rectangle with positive area
    pub fn validate(&self) -> Result<()> {
        let finite = [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite());

        if finite && self.min_x < self.max_x && self.min_y < self.max_y {
            Ok(())
        } else {
            Err(PhysicsError::InvalidParameter(format!(
                "world bounds ({}, {})-({}, {}) do not form a finite rectangle",
                self.min_x, self.min_y, self.max_x, self.max_y
            )))
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Lower bound along `axis`
    pub fn lower(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.min_x,
            Axis::Y => self.min_y,
        }
    }

    /// Upper bound along `axis`
    pub fn upper(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
        }
    }

    /// The bounds as a box
    pub fn as_aabb(&self) -> Aabb {
        Aabb::new(
            Vector2::new(self.min_x, self.min_y),
            Vector2::new(self.max_x, self.max_y),
        )
    }

    /// Returns true if the body lies entirely inside the bounds
    pub fn contains(&self, body: &RigidBody) -> bool {
        self.as_aabb().contains_aabb(&body.get_bounds())
    }
}

/// Points a body's velocity back inside the world on every axis where it
/// has crossed a bound.
///
/// Crossing the lower bound makes that velocity component non-negative and
/// crossing the upper bound makes it non-positive; the magnitude is kept.
/// Positions are not corrected, so a body may overshoot a wall slightly
/// before it comes back. Immovable bodies are left alone. A body larger than
/// the world on an axis crosses both bounds and ends up moving towards the
/// lower one.
pub fn reflect(body: &mut RigidBody, bounds: &WorldBounds) {
    if !body.is_movable() {
        return;
    }

    let position = body.get_position();
    let mut velocity = body.get_velocity();

    for axis in [Axis::X, Axis::Y] {
        let leading = position.component(axis);
        let trailing = leading + body.get_extent(axis);
        let component = velocity.component_mut(axis);

        if leading < bounds.lower(axis) {
            *component = component.abs();
        }
        if trailing > bounds.upper(axis) {
            *component = -component.abs();
        }
    }

    body.set_velocity(velocity);
}
