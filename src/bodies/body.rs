use crate::bodies::{BodyParams, DisplayAttrs, Motion};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A circular body, either dynamic or pinned
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    pub(crate) position: Vector2,
    pub(crate) motion: Motion,
    mass: f64,
    charge: f64,
    radius: f64,
    display: DisplayAttrs,
}

impl Circle {
    /// Creates a circle at `position` from template parameters
    pub fn new(position: Vector2, params: BodyParams) -> Result<Self> {
        params.validate()?;
        if !position.is_finite() {
            return Err(PhysicsError::NonFinite("position"));
        }

        Ok(Self {
            position,
            motion: params.motion,
            mass: params.mass,
            charge: params.charge,
            radius: params.radius,
            display: params.display,
        })
    }

    /// Returns the center of the circle
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Returns how the circle moves
    pub fn get_motion(&self) -> Motion {
        self.motion
    }

    /// Returns the effective velocity (zero when pinned)
    pub fn get_velocity(&self) -> Vector2 {
        self.motion.velocity()
    }

    /// Replaces the velocity of a dynamic circle; pinned circles ignore it
    pub(crate) fn set_velocity(&mut self, velocity: Vector2) {
        if let Motion::Dynamic { velocity: v } = &mut self.motion {
            *v = velocity;
        }
    }

    /// Returns the mass
    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Returns the signed charge
    pub fn get_charge(&self) -> f64 {
        self.charge
    }

    /// Returns the radius
    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Returns the display payload
    pub fn get_display(&self) -> &DisplayAttrs {
        &self.display
    }

    /// Returns true if the circle is pinned in place
    pub fn is_pinned(&self) -> bool {
        !self.motion.is_dynamic()
    }
}

/// A static line segment with thickness.
///
/// Walls have no mass, charge or motion; they behave as infinitely massive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Wall {
    start: Vector2,
    end: Vector2,
    radius: f64,
    display: DisplayAttrs,
}

impl Wall {
    /// Creates a wall from `start` to `end` with half-thickness `radius`
    pub fn new(start: Vector2, end: Vector2, radius: f64, display: DisplayAttrs) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PhysicsError::NonFinite("wall endpoint"));
        }
        if !radius.is_finite() {
            return Err(PhysicsError::NonFinite("radius"));
        }
        if radius <= 0.0 {
            return Err(PhysicsError::NonPositiveRadius(radius));
        }

        Ok(Self { start, end, radius, display })
    }

    /// Returns the segment endpoints
    pub fn get_segment(&self) -> (Vector2, Vector2) {
        (self.start, self.end)
    }

    /// Returns the half-thickness
    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Returns the display payload
    pub fn get_display(&self) -> &DisplayAttrs {
        &self.display
    }
}

/// Any body taking part in the simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Body {
    /// A dynamic or pinned circle
    Circle(Circle),

    /// A static segment
    Wall(Wall),
}

impl Body {
    /// Creates a circular body from template parameters
    pub fn circle(position: Vector2, params: BodyParams) -> Result<Self> {
        Circle::new(position, params).map(Self::Circle)
    }

    /// Creates a wall body
    pub fn wall(start: Vector2, end: Vector2, radius: f64, display: DisplayAttrs) -> Result<Self> {
        Wall::new(start, end, radius, display).map(Self::Wall)
    }

    /// Returns the contact radius (half-thickness for walls)
    pub fn get_radius(&self) -> f64 {
        match self {
            Self::Circle(circle) => circle.get_radius(),
            Self::Wall(wall) => wall.get_radius(),
        }
    }

    /// Returns the signed charge; walls carry none
    pub fn get_charge(&self) -> f64 {
        match self {
            Self::Circle(circle) => circle.get_charge(),
            Self::Wall(_) => 0.0,
        }
    }

    /// Returns the effective velocity (zero for pinned circles and walls)
    pub fn get_velocity(&self) -> Vector2 {
        match self {
            Self::Circle(circle) => circle.get_velocity(),
            Self::Wall(_) => Vector2::zero(),
        }
    }

    /// Returns the finite mass of a dynamic circle, `None` for immovable bodies
    pub fn get_inertial_mass(&self) -> Option<f64> {
        match self {
            Self::Circle(circle) if !circle.is_pinned() => Some(circle.get_mass()),
            _ => None,
        }
    }

    /// Returns true for dynamic circles
    pub fn is_movable(&self) -> bool {
        matches!(self, Self::Circle(circle) if !circle.is_pinned())
    }

    /// Returns the display payload
    pub fn get_display(&self) -> &DisplayAttrs {
        match self {
            Self::Circle(circle) => circle.get_display(),
            Self::Wall(wall) => wall.get_display(),
        }
    }

    /// Returns the circle, if this body is one
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(circle) => Some(circle),
            Self::Wall(_) => None,
        }
    }

    /// Returns the wall, if this body is one
    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            Self::Wall(wall) => Some(wall),
            Self::Circle(_) => None,
        }
    }

    /// Moves a dynamic circle by `offset`; immovable bodies stay put
    pub(crate) fn displace(&mut self, offset: Vector2) {
        if let Self::Circle(circle) = self {
            if !circle.is_pinned() {
                circle.position += offset;
            }
        }
    }

    /// Replaces the velocity of a dynamic circle; immovable bodies ignore it
    pub(crate) fn set_velocity(&mut self, velocity: Vector2) {
        if let Self::Circle(circle) = self {
            circle.set_velocity(velocity);
        }
    }
}

impl From<Circle> for Body {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Wall> for Body {
    fn from(wall: Wall) -> Self {
        Self::Wall(wall)
    }
}
