use crate::bodies::RigidBody;
use crate::integration::Integrator;
use crate::math::Vector2;
use crate::Result;
use std::any::Any;

/// Base trait for force generators that push on bodies every step
pub trait ForceGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Returns the type name of the force generator
    fn generator_type(&self) -> &'static str;

    /// Computes the force this generator exerts on `body` in its current state
    fn force_on(&self, body: &RigidBody) -> Vector2;

    /// Returns true if the force generator acts on the given body
    fn affects_body(&self, _body: &RigidBody) -> bool {
        true
    }

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Returns a dynamic mutable reference to any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone the force generator to create a new box
    fn clone_generator(&self) -> Box<dyn ForceGenerator>;
}

/// A simple force generator that applies the same constant force to every body
#[derive(Debug, Clone)]
pub struct ConstantForceGenerator {
    /// The force to apply (in world space)
    force: Vector2,

    /// Whether the force is enabled
    enabled: bool,
}

impl ConstantForceGenerator {
    /// Creates a new constant force generator
    pub fn new(force: Vector2) -> Self {
        Self {
            force,
            enabled: true,
        }
    }

    /// Returns whether the force generator is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the force generator is enabled
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Gets the current force
    pub fn get_force(&self) -> Vector2 {
        self.force
    }

    /// Sets the force to apply
    pub fn set_force(&mut self, force: Vector2) {
        self.force = force;
    }
}

impl ForceGenerator for ConstantForceGenerator {
    fn generator_type(&self) -> &'static str {
        "ConstantForce"
    }

    fn force_on(&self, _body: &RigidBody) -> Vector2 {
        self.force
    }

    fn affects_body(&self, _body: &RigidBody) -> bool {
        self.enabled
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_generator(&self) -> Box<dyn ForceGenerator> {
        Box::new(self.clone())
    }
}

/// A force generator registry that manages multiple force generators.
///
/// Generators are applied in the order they were added.
#[derive(Debug, Default)]
pub struct ForceRegistry {
    /// The list of force generators
    generators: Vec<Box<dyn ForceGenerator>>,
}

impl ForceRegistry {
    /// Creates a new empty force registry
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Adds a force generator to the registry
    pub fn add_generator(&mut self, generator: Box<dyn ForceGenerator>) {
        self.generators.push(generator);
    }

    /// Removes a force generator from the registry
    pub fn remove_generator(&mut self, index: usize) -> Option<Box<dyn ForceGenerator>> {
        if index < self.generators.len() {
            Some(self.generators.remove(index))
        } else {
            None
        }
    }

    /// Returns the number of generators in the registry
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Returns a generator by index
    pub fn get(&self, index: usize) -> Option<&dyn ForceGenerator> {
        self.generators.get(index).map(|g| g.as_ref())
    }

    /// Returns a mutable generator by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn ForceGenerator> {
        self.generators.get_mut(index).map(|g| g.as_mut())
    }

    /// Returns an iterator over the generators in application order
    pub fn iter(&self) -> impl Iterator<Item = &dyn ForceGenerator> {
        self.generators.iter().map(|g| g.as_ref())
    }

    /// Removes all generators
    pub fn clear(&mut self) {
        self.generators.clear();
    }

    /// Applies every generator to `body` in turn.
    ///
    /// Each force is evaluated against the body's state after the previous
    /// one was applied, so drag sees the velocity gravity just produced.
    pub fn apply_to(&self, body: &mut RigidBody, integrator: &dyn Integrator, dt: f64) -> Result<()> {
        for generator in &self.generators {
            if !generator.affects_body(body) {
                continue;
            }

            let force = generator.force_on(body);
            integrator.apply_force(body, force, dt)?;
        }

        Ok(())
    }
}

impl Clone for ForceRegistry {
    fn clone(&self) -> Self {
        Self {
            generators: self.generators.iter().map(|g| g.clone_generator()).collect(),
        }
    }
}
