use crate::bodies::Body;
use crate::integration::Bounds;

/// Trait for advancing bodies over a time step
pub trait Integrator: Send + Sync {
    /// Advances `body` by `dt_ms` milliseconds inside `bounds`
    fn integrate(&mut self, body: &mut Body, bounds: &Bounds, dt_ms: f64);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
