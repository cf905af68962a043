/// Something that arranges for the world's next tick to run.
///
/// The world calls [`Scheduler::schedule_next_tick`] when it enters the
/// running state and at the end of every tick while it keeps running. A host
/// backs this with its frame callback, a timer thread or a test driver.
pub trait Scheduler {
    /// Requests one more tick
    fn schedule_next_tick(&mut self);
}

/// Scheduler for hosts that step the world themselves.
///
/// It only remembers whether a tick was requested; the host polls
/// [`ManualScheduler::take_pending`] and calls `World::tick` when it is set.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    pending: bool,
    requests: usize,
}

impl ManualScheduler {
    /// Creates a scheduler with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the pending request, if any
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Returns whether a tick has been requested
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total number of requests received
    pub fn request_count(&self) -> usize {
        self.requests
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_next_tick(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}
