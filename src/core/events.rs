use crate::core::BodyHandle;
use crate::math::{Axis, Vector2};
use std::collections::VecDeque;

/// A contact between two bodies that was resolved during a step
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// The first body in the collision
    pub body_a: BodyHandle,

    /// The second body in the collision
    pub body_b: BodyHandle,

    /// The axis the bodies were separated along
    pub axis: Axis,

    /// Collision normal pointing from `body_a` towards `body_b`
    pub normal: Vector2,

    /// How deep the bodies overlapped before separation
    pub penetration: f64,
}

/// Types of body events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// A body has been added to the world
    Added,

    /// A body has been removed from the world
    Removed,
}

/// An event related to a single body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyEvent {
    /// The type of body event
    pub event_type: BodyEventType,

    /// The body that the event refers to
    pub body: BodyHandle,
}

/// A queue of physics events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    /// Collision events
    collision_events: VecDeque<CollisionEvent>,

    /// Body events
    body_events: VecDeque<BodyEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
            body_events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Adds a body event to the queue
    pub fn add_body_event(&mut self, event: BodyEvent) {
        self.body_events.push_back(event);
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Gets the next body event from the queue
    pub fn next_body_event(&mut self) -> Option<BodyEvent> {
        self.body_events.pop_front()
    }

    /// Returns whether there are any collision events in the queue
    pub fn has_collision_events(&self) -> bool {
        !self.collision_events.is_empty()
    }

    /// Returns whether there are any body events in the queue
    pub fn has_body_events(&self) -> bool {
        !self.body_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty() && self.body_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
        self.body_events.clear();
    }

    /// Iterates over the queued collision events in the order they happened
    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Gets all collision events involving a specific body
    pub fn get_collision_events_for_body(&self, body: BodyHandle) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.body_a == body || e.body_b == body)
            .collect()
    }

    /// Gets all body events of a specific type
    pub fn get_body_events_of_type(&self, event_type: BodyEventType) -> Vec<&BodyEvent> {
        self.body_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }
}
