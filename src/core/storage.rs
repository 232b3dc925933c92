use crate::bodies::RigidBody;
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Insertion-ordered storage for physics bodies.
///
/// Bodies keep the order in which they were added, also across removals,
/// and that order is the order a step iterates them in. Handles are issued
/// in increasing order, so the handle list stays sorted.
#[derive(Debug, Clone)]
pub struct BodyStorage {
    handles: Vec<BodyHandle>,
    bodies: Vec<RigidBody>,
    next_id: u32,
}

impl Default for BodyStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyStorage {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
            bodies: Vec::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds a body to the storage and returns its handle
    pub fn add(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.handles.push(handle);
        self.bodies.push(body);
        handle
    }

    /// Returns the slice index of the body with the given handle
    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.handles.binary_search(&handle).ok()
    }

    /// Returns the handle of the body at a slice index
    pub fn handle_at(&self, index: usize) -> Option<BodyHandle> {
        self.handles.get(index).copied()
    }

    /// Gets a reference to a body by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&RigidBody> {
        let index = self.index_of(handle)?;
        Some(&self.bodies[index])
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let index = self.index_of(handle)?;
        Some(&mut self.bodies[index])
    }

    /// Removes a body from the storage, keeping the order of the others
    pub fn remove(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let index = self.index_of(handle)?;
        self.handles.remove(index);
        Some(self.bodies.remove(index))
    }

    /// Returns the number of bodies in the storage
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Clears all bodies from the storage
    pub fn clear(&mut self) {
        self.handles.clear();
        self.bodies.clear();
    }

    /// Returns all handles in storage order
    pub fn handles(&self) -> &[BodyHandle] {
        &self.handles
    }

    /// Returns an iterator over all bodies in storage order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    /// Returns a mutable iterator over all bodies in storage order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut RigidBody)> + '_ {
        self.handles.iter().copied().zip(self.bodies.iter_mut())
    }

    /// The bodies as a slice in storage order
    pub fn as_slice(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// The bodies as a mutable slice in storage order
    pub fn as_mut_slice(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}
