use crate::bodies::{BodyFlags, RigidBodyType};
use crate::error::PhysicsError;
use crate::math::{Aabb, Axis, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::Serialize;

/// An axis-aligned rectangular rigid body.
///
/// The body's mass and size are validated on construction and on every
/// setter, so a `RigidBody` value always has a finite, strictly positive
/// mass, width and height. Position and velocity are free for the driver to
/// change between steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct RigidBody {
    /// Top-left corner of the bounding rectangle in world space
    position: Vector2,

    /// Velocity in units per simulated time unit
    velocity: Vector2,

    /// The body's mass
    mass: f64,

    /// Width of the bounding rectangle
    width: f64,

    /// Height of the bounding rectangle
    height: f64,

    /// The body's type (dynamic or static)
    body_type: RigidBodyType,

    /// The body's flags
    flags: BodyFlags,
}

impl RigidBody {
    /// Creates a new rigid body at rest
    pub fn new(
        position: Vector2,
        width: f64,
        height: f64,
        mass: f64,
        body_type: RigidBodyType,
    ) -> Result<Self> {
        validate_configuration(mass, width, height)?;

        Ok(Self {
            position,
            velocity: Vector2::zero(),
            mass,
            width,
            height,
            body_type,
            flags: BodyFlags::default(),
        })
    }

    /// Creates a new dynamic rigid body
    pub fn new_dynamic(position: Vector2, width: f64, height: f64, mass: f64) -> Result<Self> {
        Self::new(position, width, height, mass, RigidBodyType::Dynamic)
    }

    /// Creates a new static (immovable) rigid body.
    ///
    /// Static bodies behave as infinite mass, so the stored mass is only a
    /// placeholder that keeps the positive-mass invariant.
    pub fn new_static(position: Vector2, width: f64, height: f64) -> Result<Self> {
        Self::new(position, width, height, 1.0, RigidBodyType::Static)
    }

    /// Returns the body with its velocity set
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns the body with its flags replaced
    pub fn with_flags(mut self, flags: BodyFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the body's position (top-left corner)
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Sets the body's mass
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        validate_configuration(mass, self.width, self.height)?;
        self.mass = mass;
        Ok(())
    }

    /// Returns the body's inverse mass, zero for immovable bodies
    pub fn get_inverse_mass(&self) -> f64 {
        if self.is_movable() {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    /// Returns the width of the bounding rectangle
    pub fn get_width(&self) -> f64 {
        self.width
    }

    /// Returns the height of the bounding rectangle
    pub fn get_height(&self) -> f64 {
        self.height
    }

    /// Sets the size of the bounding rectangle
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        validate_configuration(self.mass, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Returns the extent of the rectangle along `axis`
    pub fn get_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Returns the bounding rectangle in world space
    pub fn get_bounds(&self) -> Aabb {
        Aabb::from_position_size(self.position, self.width, self.height)
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Sets the body type. Turning a body static stops it in place.
    pub fn set_body_type(&mut self, body_type: RigidBodyType) {
        self.body_type = body_type;

        if !body_type.is_movable() {
            self.velocity = Vector2::zero();
        }
    }

    /// Returns true if the simulation may move this body
    pub fn is_movable(&self) -> bool {
        self.body_type.is_movable()
    }

    /// Returns the body's flags
    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    /// Returns whether the body is affected by gravity
    pub fn is_affected_by_gravity(&self) -> bool {
        self.flags.contains(BodyFlags::AFFECTED_BY_GRAVITY)
    }

    /// Sets whether the body is affected by gravity
    pub fn set_affected_by_gravity(&mut self, affected: bool) {
        self.flags.set(BodyFlags::AFFECTED_BY_GRAVITY, affected);
    }

    /// Returns whether the body is affected by drag
    pub fn is_affected_by_drag(&self) -> bool {
        self.flags.contains(BodyFlags::AFFECTED_BY_DRAG)
    }

    /// Sets whether the body is affected by drag
    pub fn set_affected_by_drag(&mut self, affected: bool) {
        self.flags.set(BodyFlags::AFFECTED_BY_DRAG, affected);
    }

    /// Returns whether the body generates collision events
    pub fn generates_collision_events(&self) -> bool {
        self.flags.contains(BodyFlags::GENERATE_COLLISION_EVENTS)
    }

    /// Sets whether the body generates collision events
    pub fn set_generates_collision_events(&mut self, generates: bool) {
        self.flags.set(BodyFlags::GENERATE_COLLISION_EVENTS, generates);
    }

    /// Kinetic energy of the body's translation
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }
}

fn validate_configuration(mass: f64, width: f64, height: f64) -> Result<()> {
    let valid = |value: f64| value.is_finite() && value > 0.0;

    if valid(mass) && valid(width) && valid(height) {
        Ok(())
    } else {
        Err(PhysicsError::InvalidBodyConfiguration { mass, width, height })
    }
}
