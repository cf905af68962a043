mod integrator;
mod containment;
mod symplectic_euler;

pub use self::integrator::Integrator;
pub use self::containment::{contain, Bounds};
pub use self::symplectic_euler::SymplecticEulerIntegrator;

pub(crate) use self::containment::clamp_into;
