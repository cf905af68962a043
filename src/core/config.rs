use crate::error::PhysicsError;
use crate::interaction::{InteractionMode, COULOMB_CONSTANT};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How the Coulomb velocity change relates to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ForceScaling {
    /// `F / m` is added to the velocity once per tick, whatever the frame length
    #[default]
    PerTick,

    /// `F / m * dt` with `dt` in seconds, consistent with position integration
    PerSecond,
}

/// Configuration parameters for the simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Initial world width
    pub width: f64,

    /// Initial world height
    pub height: f64,

    /// Coulomb constant `k`
    pub coulomb_constant: f64,

    /// Frames longer than this (ms) are treated as stale, e.g. after a pause
    pub stale_frame_ms: f64,

    /// Frame length (ms) used in place of a stale frame
    pub nominal_frame_ms: f64,

    /// Minimum interval (ms) between two drag insertions
    pub drag_insert_interval_ms: f64,

    /// Maximum distance from the pointer at which a body can be removed
    pub removal_threshold: f64,

    /// Initial speed multiplier
    pub speed_factor: f64,

    /// Time scaling of the Coulomb interaction
    pub force_scaling: ForceScaling,

    /// Initial interaction mode
    pub mode: InteractionMode,
}

impl SimulationConfig {
    /// Checks that every field is usable
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("width", self.width),
            ("height", self.height),
            ("drag_insert_interval_ms", self.drag_insert_interval_ms),
            ("removal_threshold", self.removal_threshold),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let positive = [
            ("stale_frame_ms", self.stale_frame_ms),
            ("nominal_frame_ms", self.nominal_frame_ms),
            ("speed_factor", self.speed_factor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !self.coulomb_constant.is_finite() {
            return Err(PhysicsError::NonFinite("coulomb_constant"));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            coulomb_constant: COULOMB_CONSTANT,
            stale_frame_ms: 50.0,
            nominal_frame_ms: 16.0,
            drag_insert_interval_ms: 150.0,
            removal_threshold: 10.0,
            speed_factor: 1.0,
            force_scaling: ForceScaling::PerTick,
            mode: InteractionMode::Collide,
        }
    }
}
