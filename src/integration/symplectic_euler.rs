use crate::bodies::Body;
use crate::integration::{clamp_into, contain, Bounds, Integrator};

/// Semi-implicit Euler step with boundary containment.
///
/// Velocities have already been updated by the interaction pass, so the
/// position advances with the new velocity. Pinned circles and walls are
/// never moved.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&mut self, body: &mut Body, bounds: &Bounds, dt_ms: f64) {
        let Body::Circle(circle) = body else {
            return;
        };
        if circle.is_pinned() {
            return;
        }

        let dt = dt_ms / 1000.0;
        contain(circle, bounds, dt);
        circle.position += circle.get_velocity() * dt;

        // a single step can still overshoot when the area is narrower than the stride
        clamp_into(circle, bounds);
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
