//! Per-tick driver of the simulation
//!
//! One tick has two phases: every net force is computed from the pre-step
//! snapshot, then every body is advanced with its own force. Integration
//! never observes a partially updated neighbour.

use super::forces::ForceModel;
use super::integrator::advance;
use super::states::{NVec2, System};

/// Runtime driver settings derived from the scenario
#[derive(Debug, Clone)]
pub struct Engine {
    pub frames: usize, // steps to run, t_end / dt
}

/// Advance the whole system by `dt` in place.
/// Degenerate pairs (coincident bodies) yield inf/NaN that carries into
/// later steps; nothing is trapped here
pub fn step<F>(sys: &mut System, forces: &F, dt: f64)
where
    F: ForceModel + ?Sized,
{
    let n = sys.bodies.len();
    if n == 0 { // no bodies, only time moves
        sys.t += dt;
        return;
    }

    // Phase 1: net forces from positions/masses at the start of the tick
    let mut f = vec![NVec2::zeros(); n];
    forces.net_forces(&sys.bodies, &mut f);

    // Phase 2: index-aligned Euler update
    for (b, fi) in sys.bodies.iter_mut().zip(f.iter()) {
        advance(b, fi, dt);
    }

    sys.t += dt;
}
