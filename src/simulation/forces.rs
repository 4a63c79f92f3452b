//! Pairwise force contributors for the n-body engine
//!
//! Forces here are true forces (not accelerations): the integrator divides
//! by mass. Net forces are exact O(N²) sums with no approximation.

use crate::simulation::states::{Body, NVec2};
use crate::simulation::vector_math::{angle, distance, force_magnitude, G};

/// Trait for pairwise force laws operating on a body set
pub trait ForceModel {
    /// Force exerted on `on` by `by`.
    fn pairwise_force(&self, on: &Body, by: &Body) -> NVec2;

    /// Net force on every body in `bodies`
    /// - `out[i]` is set to the sum of `pairwise_force(bodies[i], bodies[j])` for every `j != i`
    /// - self is skipped by index, so two bodies with identical values still act on each other
    fn net_forces(&self, bodies: &[Body], out: &mut [NVec2]) {
        debug_assert_eq!(bodies.len(), out.len());
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for (i, bi) in bodies.iter().enumerate() {
            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                out[i] += self.pairwise_force(bi, bj);
            }
        }
    }

    /// Allocating wrapper around [`ForceModel::net_forces`].
    fn net_force_vec(&self, bodies: &[Body]) -> Vec<NVec2> {
        let mut out = vec![NVec2::zeros(); bodies.len()];
        self.net_forces(bodies, &mut out);
        out
    }
}

/// 2D Newtonian gravity without softening
/// Coincident bodies produce infinite/NaN forces; nothing is trapped
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G }
    }
}

impl ForceModel for NewtonianGravity {
    fn pairwise_force(&self, on: &Body, by: &Body) -> NVec2 {
        let f = force_magnitude(self.G, on.m, by.m, distance(on, by));
        // direction from `on` toward `by`, so the force is attractive
        let theta = angle(on, by);
        NVec2::new(f * theta.cos(), f * theta.sin())
    }
}
