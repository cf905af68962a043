pub mod math;
pub mod core;
pub mod bodies;
pub mod geometry;
pub mod interaction;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{World, SimulationConfig, BodyHandle, MotionState};
pub use crate::bodies::{Body, BodyParams, Circle, Wall, Motion, DisplayAttrs};
pub use crate::interaction::InteractionMode;
pub use crate::math::Vector2;

/// Error types for the engine
pub mod error {
    use crate::core::BodyHandle;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Mass must be positive, got {0}")]
        NonPositiveMass(f64),

        #[error("Radius must be positive, got {0}")]
        NonPositiveRadius(f64),

        #[error("Non-finite value for {0}")]
        NonFinite(&'static str),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Body not found: {0:?}")]
        BodyNotFound(BodyHandle),
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
