//! Distance and angle queries between bodies.
//!
//! Angles always describe the direction from the first body toward the
//! second. For a wall the reference point is the point of the segment
//! nearest to the other body, so a wall-to-circle angle is the normal of the
//! wall pointing at the circle, or the direction from the nearer endpoint when
//! the circle lies beyond the ends of the segment.

use crate::bodies::{Body, Wall};
use crate::math::{Vector2, EPSILON};

/// Distance and direction between two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Distance between the reference points
    pub distance: f64,

    /// Angle (radians) of the vector from the first body to the second
    pub angle: f64,
}

impl Separation {
    fn from_delta(delta: Vector2) -> Option<Self> {
        let distance = delta.length();
        // coincident reference points have no direction
        if !distance.is_finite() || distance < EPSILON {
            return None;
        }

        Some(Self {
            distance,
            angle: delta.angle(),
        })
    }

    /// Returns the unit vector pointing from the first body to the second
    pub fn normal(&self) -> Vector2 {
        Vector2::from_angle(self.angle)
    }
}

/// Returns the point of segment `start..end` closest to `point`.
///
/// A zero-length segment collapses to `start`.
pub fn closest_point_on_segment(start: Vector2, end: Vector2, point: Vector2) -> Vector2 {
    let direction = end - start;
    let length_squared = direction.length_squared();
    if length_squared < EPSILON * EPSILON {
        return start;
    }

    let t = (point - start).dot(&direction) / length_squared;
    if t <= 0.0 {
        // behind the start endpoint
        start
    } else if t >= 1.0 {
        end
    } else {
        start + direction * t
    }
}

fn wall_point(wall: &Wall, point: Vector2) -> Vector2 {
    let (start, end) = wall.get_segment();
    closest_point_on_segment(start, end, point)
}

/// Computes the distance and angle from `a` to `b`.
///
/// Returns `None` when the pair cannot interact: coincident reference points
/// (including a circle centred exactly on a wall) and wall–wall pairs.
pub fn distance_angle(a: &Body, b: &Body) -> Option<Separation> {
    match (a, b) {
        (Body::Circle(a), Body::Circle(b)) => {
            Separation::from_delta(b.get_position() - a.get_position())
        }
        (Body::Wall(wall), Body::Circle(circle)) => {
            let center = circle.get_position();
            Separation::from_delta(center - wall_point(wall, center))
        }
        (Body::Circle(circle), Body::Wall(wall)) => {
            let center = circle.get_position();
            Separation::from_delta(wall_point(wall, center) - center)
        }
        (Body::Wall(_), Body::Wall(_)) => None,
    }
}

/// Distance from `point` to a body's reference geometry: the center of a
/// circle or the nearest point of a wall segment.
pub fn point_distance(body: &Body, point: Vector2) -> f64 {
    match body {
        Body::Circle(circle) => circle.get_position().distance(&point),
        Body::Wall(wall) => wall_point(wall, point).distance(&point),
    }
}
