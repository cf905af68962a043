use crate::bodies::BodyParams;
use crate::interaction::InteractionMode;
use crate::math::Vector2;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// A deferred mutation of the world, applied between ticks
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a body at a single point
    Add {
        position: Vector2,
        params: BodyParams,
    },

    /// Insert a body while dragging; throttled against earlier drag inserts
    AddDragged {
        position: Vector2,
        params: BodyParams,
        at: f64,
    },

    /// Remove the body nearest to a point
    RemoveNearest { position: Vector2 },

    /// Resize the world
    SetBounds { width: f64, height: f64 },

    /// Switch the interaction mode
    SetMode(InteractionMode),
}

/// Cloneable handle for submitting commands to a world.
///
/// Input handlers (possibly on other threads) push commands here; the world
/// drains them at the start of its next tick, so the body collection is never
/// mutated in the middle of a pairwise pass.
#[derive(Debug, Clone, Default)]
pub struct CommandSender {
    queue: Arc<Mutex<VecDeque<Command>>>,
}

impl CommandSender {
    /// Creates a sender with an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Command>> {
        // a panic while holding the lock cannot leave the deque half-written
        self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Enqueues a command
    pub fn send(&self, command: Command) {
        self.lock().push_back(command);
    }

    /// Returns the number of queued commands
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    /// Takes every queued command in submission order
    pub(crate) fn drain(&self) -> Vec<Command> {
        self.lock().drain(..).collect()
    }
}
