use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a circular body moves
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Motion {
    /// Free body with a velocity in units per second
    Dynamic {
        /// Current velocity
        velocity: Vector2,
    },

    /// Fixed in place: zero velocity and infinite mass in collisions, but
    /// still a source of charge
    Pinned,
}

impl Motion {
    /// Creates a dynamic motion with the given velocity components
    pub fn dynamic(vx: f64, vy: f64) -> Self {
        Self::Dynamic {
            velocity: Vector2::new(vx, vy),
        }
    }

    /// Creates a dynamic motion from a speed and a direction in degrees
    /// (counter-clockwise from the +x axis)
    pub fn from_polar(speed: f64, direction_degrees: f64) -> Self {
        Self::Dynamic {
            velocity: Vector2::from_angle(direction_degrees.to_radians()) * speed,
        }
    }

    /// Returns true for dynamic motion
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }

    /// Returns the effective velocity (zero when pinned)
    pub fn velocity(&self) -> Vector2 {
        match self {
            Self::Dynamic { velocity } => *velocity,
            Self::Pinned => Vector2::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polar_motion_points_counter_clockwise() {
        let velocity = Motion::from_polar(10.0, 90.0).velocity();
        assert_relative_eq!(velocity.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(velocity.y, 10.0, epsilon = 1e-12);
        assert!(Motion::from_polar(10.0, 90.0).is_dynamic());
    }

    #[test]
    fn pinned_motion_has_zero_velocity() {
        assert!(!Motion::Pinned.is_dynamic());
        assert!(Motion::Pinned.velocity().is_zero());
    }
}
