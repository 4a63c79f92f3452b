//! Distance, direction and force-magnitude primitives between two bodies

use super::states::Body;

/// Gravitational constant in simulation units (scaled, not SI).
pub const G: f64 = 6.6742e-5;

/// Euclidean distance between the positions of `a` and `b`.
pub fn distance(a: &Body, b: &Body) -> f64 {
    (b.x - a.x).norm()
}

/// Angle in radians of the vector from `a` to `b`, in (-π, π].
///
/// Coincident positions give `atan2(0, 0)`, which is 0.
pub fn angle(a: &Body, b: &Body) -> f64 {
    (b.x.y - a.x.y).atan2(b.x.x - a.x.x)
}

/// `g * m1 * m2 / dist²`. Infinite for `dist == 0`.
pub fn force_magnitude(g: f64, m1: f64, m2: f64, dist: f64) -> f64 {
    (g * m1 * m2) / (dist * dist)
}
