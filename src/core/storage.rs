use crate::bodies::Body;
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Ordered storage for bodies.
///
/// Iteration follows insertion order; removing a body keeps the relative
/// order of the others.
#[derive(Debug, Default, Clone)]
pub struct BodyStorage {
    handles: Vec<BodyHandle>,
    bodies: Vec<Body>,
    next_id: u32,
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

    /// Appends a body and returns its handle
    pub fn add(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.handles.push(handle);
        self.bodies.push(body);
        handle
    }

    /// Returns the position of a body in iteration order
    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.handles.iter().position(|&h| h == handle)
    }

    /// Returns the handle at `index`
    pub fn handle_at(&self, index: usize) -> Option<BodyHandle> {
        self.handles.get(index).copied()
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.index_of(handle)
            .map(|index| &self.bodies[index])
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Removes the body at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<(BodyHandle, Body)> {
        if index >= self.bodies.len() {
            return None;
        }
        Some((self.handles.remove(index), self.bodies.remove(index)))
    }

    /// Removes a body by its handle, returning an error if not found
    pub fn remove(&mut self, handle: BodyHandle) -> Result<Body> {
        let index = self.index_of(handle).ok_or(PhysicsError::BodyNotFound(handle))?;
        self.handles.remove(index);
        Ok(self.bodies.remove(index))
    }

    /// Returns mutable references to two distinct bodies, `i < j`
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        debug_assert!(i < j, "pair indices must be ordered");
        let (head, tail) = self.bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }

    /// Returns the bodies in iteration order
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Returns the bodies in iteration order, mutably
    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Returns the handles in iteration order
    pub fn handles(&self) -> &[BodyHandle] {
        &self.handles
    }

    /// Returns an iterator over (handle, body) pairs
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    /// Returns a mutable iterator over (handle, body) pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> + '_ {
        self.handles.iter().copied().zip(self.bodies.iter_mut())
    }

    /// Returns the number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Clears all bodies; handles are never reused
    pub fn clear(&mut self) {
        self.handles.clear();
        self.bodies.clear();
    }
}
