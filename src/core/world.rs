use tracing::debug;

use crate::core::{
    BodyEvent, BodyEventType, BodyHandle, BodyStorage, CollisionEvent, EventQueue,
    SimulationConfig,
};
use crate::bodies::RigidBody;
use crate::error::PhysicsError;
use crate::forces::{DragForce, ForceGenerator, ForceRegistry, GravityForce};
use crate::math::Vector2;
use crate::Result;

/// Fraction of a time step below which `advance` treats leftover time as zero
const ADVANCE_RESIDUE: f64 = 1e-9;

/// The main physics world that owns all bodies and drives the simulation
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    /// All rigid bodies in the world
    bodies: BodyStorage,

    /// Generators added by the user, applied after the configured ones
    custom_forces: ForceRegistry,

    /// Configured gravity and drag followed by `custom_forces`
    forces: ForceRegistry,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Queue of physics events
    events: EventQueue,

    /// The total elapsed simulation time
    time: f64,

    /// Number of ticks run so far
    tick_count: u64,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::from_valid_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulationConfig) -> Self {
        let mut world = Self {
            bodies: BodyStorage::new(),
            custom_forces: ForceRegistry::new(),
            forces: ForceRegistry::new(),
            config,
            events: EventQueue::new(),
            time: 0.0,
            tick_count: 0,
        };
        world.rebuild_forces();
        world
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f64 {
        self.time
    }

    /// Returns the number of ticks run since the world was created or cleared
    pub fn get_tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the configuration, rebuilding the configured forces
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.rebuild_forces();
        Ok(())
    }

    /// Adds a force generator that acts on every body each tick
    pub fn add_force(&mut self, generator: Box<dyn ForceGenerator>) {
        self.custom_forces.add_generator(generator);
        self.rebuild_forces();
    }

    /// Returns the generators applied each tick, in application order
    pub fn get_forces(&self) -> &ForceRegistry {
        &self.forces
    }

    fn rebuild_forces(&mut self) {
        let mut forces = ForceRegistry::new();

        if self.config.gravity != Vector2::zero() {
            forces.add_generator(Box::new(GravityForce::new(self.config.gravity)));
        }
        if self.config.linear_drag > 0.0 {
            forces.add_generator(Box::new(DragForce::linear(self.config.linear_drag)));
        }
        for generator in self.custom_forces.iter() {
            forces.add_generator(generator.clone_generator());
        }

        self.forces = forces;
    }

    /// Adds a rigid body to the world and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);
        debug!(body = ?handle, count = self.bodies.len(), "added body");

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: handle,
        });

        handle
    }

    /// Removes a rigid body from the world.
    ///
    /// The remaining bodies keep their relative order.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<RigidBody> {
        let body = self.bodies.remove(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })?;
        debug!(body = ?handle, count = self.bodies.len(), "removed body");

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: handle,
        });

        Ok(body)
    }

    /// Gets a reference to a rigid body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a rigid body by its handle.
    ///
    /// Use this between ticks to steer a body, for example by changing its
    /// velocity in response to input.
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns the body storage
    pub fn bodies(&self) -> &BodyStorage {
        &self.bodies
    }

    /// Runs exactly one tick of `dt`
    pub fn step(&mut self, dt: f64) -> Result<()> {
        // Clear events from previous step
        self.events.clear();
        self.step_simulation(dt)
    }

    /// Advances the simulation by `elapsed` time in fixed ticks of
    /// `config.time_step`, taking at most `config.max_substeps` ticks.
    ///
    /// A remainder shorter than the time step is run as one shorter tick;
    /// rounding residue below a billionth of a step is discarded.
    /// Returns the number of ticks taken.
    pub fn advance(&mut self, elapsed: f64) -> Result<u32> {
        crate::validate_time_step(elapsed)?;
        self.events.clear();

        let fixed_step = self.config.time_step;
        let max_steps = self.config.max_substeps;
        let residue = fixed_step * ADVANCE_RESIDUE;

        let mut remaining = elapsed;
        let mut steps = 0;

        while remaining > residue && steps < max_steps {
            let dt = fixed_step.min(remaining);

            self.step_simulation(dt)?;

            remaining -= dt;
            steps += 1;
        }

        debug!(elapsed, ticks = steps, "advanced");
        if remaining > residue {
            debug!(dropped = remaining, "advance hit max_substeps");
        }

        Ok(steps)
    }

    /// Performs a single step of the physics simulation
    fn step_simulation(&mut self, dt: f64) -> Result<()> {
        let resolved = crate::core::step(
            self.bodies.as_mut_slice(),
            &self.forces,
            dt,
            &self.config.bounds,
            self.config.restitution,
        )?;

        let bodies = self.bodies.as_slice();
        for pair in resolved {
            let reports = bodies[pair.body_a].generates_collision_events()
                || bodies[pair.body_b].generates_collision_events();
            if !reports {
                continue;
            }

            let (Some(body_a), Some(body_b)) = (
                self.bodies.handle_at(pair.body_a),
                self.bodies.handle_at(pair.body_b),
            ) else {
                continue;
            };

            self.events.add_collision_event(CollisionEvent {
                body_a,
                body_b,
                axis: pair.contact.axis,
                normal: pair.contact.normal,
                penetration: pair.contact.penetration,
            });
        }

        self.time += dt;
        self.tick_count += 1;

        Ok(())
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Clears the world of all bodies and events
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.events.clear();
        self.time = 0.0;
        self.tick_count = 0;
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
