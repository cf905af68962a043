//! Pairwise interactions between bodies.
//!
//! Both interaction functions mutate only the two bodies they are given.
//! The first argument is the "earlier" body in iteration order; it matters
//! for which side absorbs a separation correction.

mod separation;
mod collide;
mod attract;

pub use self::separation::separate;
pub use self::collide::collide;
pub use self::attract::attract;

use crate::bodies::Body;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Default Coulomb constant
pub const COULOMB_CONSTANT: f64 = 90.0;

/// Which pairwise interaction the world runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum InteractionMode {
    /// Contact physics only
    #[default]
    Collide,

    /// Coulomb force plus contact separation, no bounce
    Attract,
}

impl InteractionMode {
    /// Returns the other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Collide => Self::Attract,
            Self::Attract => Self::Collide,
        }
    }

    /// Runs this mode's interaction on a pair
    pub fn apply(self, a: &mut Body, b: &mut Body, params: &InteractionParams) -> Outcome {
        match self {
            Self::Collide => collide(a, b),
            Self::Attract => attract(a, b, params),
        }
    }
}

/// Constants fed to the interaction functions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionParams {
    /// Coulomb constant `k`
    pub coulomb_constant: f64,

    /// Multiplier applied to the Coulomb velocity change (1 for a flat
    /// per-tick change, elapsed seconds for time-scaled forces)
    pub impulse_scale: f64,
}

impl Default for InteractionParams {
    fn default() -> Self {
        Self {
            coulomb_constant: COULOMB_CONSTANT,
            impulse_scale: 1.0,
        }
    }
}

/// What an interaction did to a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Degenerate pair (coincident points or two walls); nothing happened
    Skipped,

    /// Out of contact and no force exchanged
    Apart,

    /// In contact; overlap removed but velocities untouched
    Contact,

    /// In contact and velocities resolved
    Bounced,

    /// Coulomb force exchanged
    Attracted,
}

impl Outcome {
    /// Returns true if the pair was touching
    pub fn is_contact(self) -> bool {
        matches!(self, Self::Contact | Self::Bounced)
    }
}
