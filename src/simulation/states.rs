//! Core state types for the 2D N-body simulation.
//!
//! A `Body` is the point mass `(x, y, m, vx, vy)`; a `System` holds the
//! ordered body set and the current simulation time `t`.
//! Mass-weighted diagnostics (centre of mass, momentum) live here too, they
//! are read by generators and drivers but never by the step itself.

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, > 0
}

impl Body {
    /// Build a body, rejecting non-positive or non-finite mass.
    pub fn new(x: f64, y: f64, m: f64, vx: f64, vy: f64) -> Result<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(Error::NonPositiveMass(m));
        }
        Ok(Self {
            x: NVec2::new(x, y),
            v: NVec2::new(vx, vy),
            m,
        })
    }

    /// Build from the `[x, y, m, vx, vy]` layout.
    pub fn from_array(vals: [f64; 5]) -> Result<Self> {
        let [x, y, m, vx, vy] = vals;
        Self::new(x, y, m, vx, vy)
    }

    /// Same as [`Body::from_array`] but for a slice of any length.
    pub fn from_slice(vals: &[f64]) -> Result<Self> {
        let arr: [f64; 5] = vals
            .try_into()
            .map_err(|_| Error::InvalidBodyLength(vals.len()))?;
        Self::from_array(arr)
    }

    pub fn to_array(&self) -> [f64; 5] {
        [self.x.x, self.x.y, self.m, self.v.x, self.v.y]
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // body set, order stable across a step
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn center_of_mass(&self) -> NVec2 {
        center_of_mass(&self.bodies)
    }

    pub fn total_momentum(&self) -> NVec2 {
        total_momentum(&self.bodies)
    }
}

/// Mass-weighted centroid `(Σx·m / Σm, Σy·m / Σm)`.
///
/// An empty set or zero total mass gives NaN components (0/0); this is not
/// trapped.
pub fn center_of_mass(bodies: &[Body]) -> NVec2 {
    let mut moment = NVec2::zeros();
    let mut total_mass = 0.0;
    for b in bodies {
        total_mass += b.m;
        moment += b.x * b.m;
    }
    moment / total_mass
}

/// Total linear momentum `Σ m·v`.
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies.iter().fold(NVec2::zeros(), |p, b| p + b.v * b.m)
}
