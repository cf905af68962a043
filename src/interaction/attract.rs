use crate::bodies::Body;
use crate::geometry::distance_angle;
use crate::interaction::{separate, InteractionParams, Outcome};

/// Applies the Coulomb interaction between two bodies.
///
/// Overlapping bodies are only pushed apart. Otherwise the force
/// `k * qa * qb / d^2` acts along the line between them: positive (like
/// charges) pushes them apart, negative pulls them together. Each dynamic
/// side receives the velocity change `F / m` in opposite directions; pinned
/// circles act as sources but never move, and walls carry no charge.
pub fn attract(a: &mut Body, b: &mut Body, params: &InteractionParams) -> Outcome {
    let Some(separation) = distance_angle(a, b) else {
        return Outcome::Skipped;
    };
    if separation.distance < a.get_radius() + b.get_radius() {
        separate(a, b, &separation);
        return Outcome::Contact;
    }

    let force = params.coulomb_constant * a.get_charge() * b.get_charge()
        / (separation.distance * separation.distance);
    if force == 0.0 || !force.is_finite() {
        return Outcome::Apart;
    }

    let impulse = separation.normal() * (force * params.impulse_scale);
    if let Some(mass) = a.get_inertial_mass() {
        a.set_velocity(a.get_velocity() - impulse / mass);
    }
    if let Some(mass) = b.get_inertial_mass() {
        b.set_velocity(b.get_velocity() + impulse / mass);
    }
    Outcome::Attracted
}
