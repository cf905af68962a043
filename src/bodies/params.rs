use crate::bodies::{DisplayAttrs, Motion};
use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Parameters for a new circular body, as produced by the template
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyParams {
    /// Mass, strictly positive
    pub mass: f64,

    /// Signed charge
    pub charge: f64,

    /// Radius, strictly positive
    pub radius: f64,

    /// Dynamic velocity or pinned
    pub motion: Motion,

    /// Opaque display payload
    pub display: DisplayAttrs,
}

impl BodyParams {
    /// Creates parameters for a dynamic body at rest
    pub fn new(mass: f64, charge: f64, radius: f64) -> Self {
        Self {
            mass,
            charge,
            radius,
            motion: Motion::dynamic(0.0, 0.0),
            display: DisplayAttrs::default(),
        }
    }

    /// Sets the velocity, making the body dynamic
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.motion = Motion::dynamic(vx, vy);
        self
    }

    /// Pins the body in place
    pub fn pinned(mut self) -> Self {
        self.motion = Motion::Pinned;
        self
    }

    /// Sets the display payload
    pub fn with_display(mut self, display: DisplayAttrs) -> Self {
        self.display = display;
        self
    }

    /// Checks the positivity and finiteness constraints
    pub fn validate(&self) -> Result<()> {
        if !self.mass.is_finite() {
            return Err(PhysicsError::NonFinite("mass"));
        }
        if self.mass <= 0.0 {
            return Err(PhysicsError::NonPositiveMass(self.mass));
        }
        if !self.radius.is_finite() {
            return Err(PhysicsError::NonFinite("radius"));
        }
        if self.radius <= 0.0 {
            return Err(PhysicsError::NonPositiveRadius(self.radius));
        }
        if !self.charge.is_finite() {
            return Err(PhysicsError::NonFinite("charge"));
        }
        if !self.motion.velocity().is_finite() {
            return Err(PhysicsError::NonFinite("velocity"));
        }
        Ok(())
    }
}
