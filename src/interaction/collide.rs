use crate::bodies::Body;
use crate::geometry::distance_angle;
use crate::interaction::{separate, Outcome};
use crate::math::Frame;

/// Resolves a contact between two bodies as a perfectly elastic collision.
///
/// Overlap is removed first, then velocities are solved in a frame whose
/// x-axis is the contact normal: a dynamic body meeting a wall or a pinned
/// circle has its normal component mirrored, two dynamic bodies exchange
/// normal momentum with restitution 1. Tangential components pass through
/// unchanged. Velocities only change while the bodies are closing along the
/// normal, so a pair that is already separating is never pulled back.
pub fn collide(a: &mut Body, b: &mut Body) -> Outcome {
    let Some(separation) = distance_angle(a, b) else {
        return Outcome::Skipped;
    };
    if separation.distance > a.get_radius() + b.get_radius() {
        return Outcome::Apart;
    }

    separate(a, b, &separation);

    let frame = Frame::along(separation.angle);
    match (a.get_inertial_mass(), b.get_inertial_mass()) {
        (None, None) => Outcome::Contact,
        (Some(_), None) => {
            let mut local = frame.to_local(a.get_velocity());
            if local.x <= 0.0 {
                return Outcome::Contact;
            }
            local.x = -local.x;
            a.set_velocity(frame.to_world(local));
            Outcome::Bounced
        }
        (None, Some(_)) => {
            let mut local = frame.to_local(b.get_velocity());
            if local.x >= 0.0 {
                return Outcome::Contact;
            }
            local.x = -local.x;
            b.set_velocity(frame.to_world(local));
            Outcome::Bounced
        }
        (Some(mass_a), Some(mass_b)) => {
            let mut local_a = frame.to_local(a.get_velocity());
            let mut local_b = frame.to_local(b.get_velocity());
            if local_a.x - local_b.x <= 0.0 {
                return Outcome::Contact;
            }

            let total = mass_a + mass_b;
            let (ua, ub) = (local_a.x, local_b.x);
            local_a.x = ((mass_a - mass_b) * ua + 2.0 * mass_b * ub) / total;
            local_b.x = ((mass_b - mass_a) * ub + 2.0 * mass_a * ua) / total;

            a.set_velocity(frame.to_world(local_a));
            b.set_velocity(frame.to_world(local_b));
            Outcome::Bounced
        }
    }
}
