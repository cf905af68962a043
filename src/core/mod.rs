pub mod world;
pub mod config;
pub mod storage;
pub mod events;
pub mod commands;
mod scheduler;
mod renderer;
mod throttle;

pub use self::world::World;
pub use self::config::{SimulationConfig, ForceScaling};
pub use self::storage::BodyStorage;
pub use self::events::{EventQueue, ContactEvent, BodyEvent, BodyEventType};
pub use self::commands::{Command, CommandSender};
pub use self::scheduler::{Scheduler, ManualScheduler};
pub use self::renderer::{Renderer, NullRenderer, FrameRecorder};
pub use self::throttle::InsertionThrottle;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a body in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// Returns the raw id
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Whether the world keeps requesting ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum MotionState {
    /// No further ticks are requested
    #[default]
    Stopped,

    /// Every tick requests the next one
    Running,
}
