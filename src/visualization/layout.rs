//! Screen fitting shared by the viewer and headless tooling

use crate::simulation::states::Body;

/// Half-width of the world area to show.
///
/// A positive finite `lim` fixes the axis range to `[-lim, lim]`; otherwise
/// the range is fitted to the largest coordinate of `bodies`, falling back to
/// 1 for an empty or collapsed layout.
pub fn half_extent(bodies: &[Body], lim: Option<f64>) -> f64 {
    if let Some(lim) = lim.filter(|l| l.is_finite() && *l > 0.0) {
        return lim;
    }
    let extent = bodies
        .iter()
        .map(|b| b.x.x.abs().max(b.x.y.abs()))
        .filter(|e| e.is_finite())
        .fold(0.0_f64, f64::max);
    if extent > 0.0 {
        extent
    } else {
        1.0
    }
}
