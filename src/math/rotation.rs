use nalgebra as na;

use crate::math::Vector2;

/// A 2D reference frame whose x-axis lies along a contact normal.
///
/// Collision response is solved one-dimensionally: velocities are rotated
/// into the frame, the normal (x) component is updated while the tangential
/// (y) component passes through, and the result is rotated back.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    rotation: na::Rotation2<f64>,
}

impl Frame {
    /// Creates a frame whose normal axis points along `angle` (radians)
    pub fn along(angle: f64) -> Self {
        Self {
            rotation: na::Rotation2::new(angle),
        }
    }

    /// Returns the angle of the normal axis
    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    /// Returns the unit normal in world coordinates
    pub fn normal(&self) -> Vector2 {
        Vector2::from_nalgebra(&(self.rotation * na::Vector2::x()))
    }

    /// Expresses a world vector in this frame as (normal, tangential)
    pub fn to_local(&self, v: Vector2) -> Vector2 {
        Vector2::from_nalgebra(&self.rotation.inverse_transform_vector(&v.to_nalgebra()))
    }

    /// Expresses a local (normal, tangential) vector in world coordinates
    pub fn to_world(&self, v: Vector2) -> Vector2 {
        Vector2::from_nalgebra(&self.rotation.transform_vector(&v.to_nalgebra()))
    }
}
