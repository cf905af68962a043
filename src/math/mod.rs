mod vector;
mod rotation;

pub use vector::Vector2;
pub use rotation::Frame;

/// Constant for a very small number, used for comparisons and degenerate geometry
pub const EPSILON: f64 = 1.0e-9;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value.
///
/// When the range is inverted (`min > max`) the midpoint is returned.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return (min + max) * 0.5;
    }
    value.max(min).min(max)
}
