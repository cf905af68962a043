use crate::error::PhysicsError;
use crate::math::clamp;
use crate::bodies::Circle;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The rectangular world area `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Creates bounds, rejecting negative or non-finite extents
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(PhysicsError::NonFinite("bounds"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "bounds must be non-negative, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Creates bounds, mapping negative or NaN extents to zero
    pub fn saturating(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_nan() { 0.0 } else { v.max(0.0) };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Returns the width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(&self) -> f64 {
        self.height
    }
}

fn contain_axis(position: &mut f64, velocity: &mut f64, radius: f64, extent: f64, dt: f64) -> bool {
    let (low, high) = (radius, extent - radius);
    let next = *position + *velocity * dt;

    if next < low && *velocity < 0.0 {
        *velocity = -*velocity;
        *position = clamp(low, low, high);
        true
    } else if next > high && *velocity > 0.0 {
        *velocity = -*velocity;
        *position = clamp(high, low, high);
        true
    } else {
        *position = clamp(*position, low, high);
        false
    }
}

/// Keeps a circle inside the world.
///
/// On each axis, if the step of `dt` seconds would carry the circle across a
/// boundary it is moving toward, that velocity component is reflected and the
/// circle is placed against the boundary. Otherwise the circle is only
/// clamped into range. Returns true if any component was reflected.
pub fn contain(circle: &mut Circle, bounds: &Bounds, dt: f64) -> bool {
    let radius = circle.get_radius();
    let mut position = circle.get_position();
    let mut velocity = circle.get_velocity();

    let hit_x = contain_axis(&mut position.x, &mut velocity.x, radius, bounds.width, dt);
    let hit_y = contain_axis(&mut position.y, &mut velocity.y, radius, bounds.height, dt);

    circle.position = position;
    circle.set_velocity(velocity);
    hit_x || hit_y
}

/// Clamps a circle's center into the area its radius allows
pub(crate) fn clamp_into(circle: &mut Circle, bounds: &Bounds) {
    let radius = circle.get_radius();
    circle.position.x = clamp(circle.position.x, radius, bounds.width - radius);
    circle.position.y = clamp(circle.position.y, radius, bounds.height - radius);
}
