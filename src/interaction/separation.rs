use crate::bodies::Body;
use crate::geometry::Separation;

/// Pushes an overlapping pair apart along the contact normal until the two
/// bodies just touch.
///
/// The second body takes the whole correction when it is dynamic, otherwise
/// the first one does. Two immovable bodies stay where they are. Returns
/// whether any body was moved.
pub fn separate(a: &mut Body, b: &mut Body, separation: &Separation) -> bool {
    let overlap = a.get_radius() + b.get_radius() - separation.distance;
    if overlap <= 0.0 {
        return false;
    }

    let offset = separation.normal() * overlap;
    if b.is_movable() {
        b.displace(offset);
        true
    } else if a.is_movable() {
        a.displace(-offset);
        true
    } else {
        false
    }
}
