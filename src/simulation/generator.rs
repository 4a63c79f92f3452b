//! Random initial conditions
//!
//! Two layouts:
//! - `generate_uniform`: positions, masses and velocities drawn from uniform boxes
//! - `generate_normal`: a galaxy-like isotropic normal cloud rotating around its
//!   centre of mass, with a dominant "black hole" injected at index 0
//!
//! Masses are drawn from `(0, massmult]` so every body satisfies `m > 0`.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::simulation::states::{center_of_mass, Body, NVec2};
use crate::simulation::vector_math::{angle, distance};

/// Mass of the injected central body relative to the heaviest generated body
pub const BLACK_HOLE_FACTOR: f64 = 10_000.0;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UniformParams {
    pub count: usize,
    pub center: f64, // centre of the position box
    pub width: f64, // side length of the position box
    pub massmult: f64, // upper bound of the mass range
    pub vcenter: f64, // centre of the velocity box
    pub vwidth: f64, // side length of the velocity box
}

impl Default for UniformParams {
    fn default() -> Self {
        Self {
            count: 100,
            center: 0.0,
            width: 10.0,
            massmult: 100.0,
            vcenter: 0.0,
            vwidth: 10.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NormalParams {
    pub count: usize,
    pub center: f64, // mean of both coordinates
    pub width: f64, // variance of each coordinate
    pub massmult: f64, // upper bound of the mass range
    pub vmult: f64, // orbital speed multiplier
}

impl Default for NormalParams {
    fn default() -> Self {
        Self {
            count: 200,
            center: 0.0,
            width: 100_000.0,
            massmult: 10.0,
            vmult: 100.0,
        }
    }
}

fn check(cond: bool, what: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::InvalidGenerator(what.to_string()))
    }
}

// (0, massmult]: flip the half-open [0, 1) sample so zero mass is impossible
fn sample_mass<R: Rng + ?Sized>(rng: &mut R, massmult: f64) -> f64 {
    (1.0 - rng.gen::<f64>()) * massmult
}

/// Bodies uniformly spread over a square of side `width` around `center`.
pub fn generate_uniform<R: Rng + ?Sized>(rng: &mut R, p: &UniformParams) -> Result<Vec<Body>> {
    check(p.width > 0.0 && p.width.is_finite(), "width must be positive")?;
    check(p.vwidth >= 0.0 && p.vwidth.is_finite(), "vwidth must not be negative")?;
    check(p.massmult > 0.0 && p.massmult.is_finite(), "massmult must be positive")?;
    check(p.center.is_finite() && p.vcenter.is_finite(), "center and vcenter must be finite")?;

    // Uniform::new panics on an empty range; a width lost to rounding at a far centre gives one
    let (lo, hi) = (p.center - p.width / 2.0, p.center + p.width / 2.0);
    check(lo < hi && (hi - lo).is_finite(), "width vanishes at this center")?;
    let pos = Uniform::new(lo, hi);
    let half_v = p.vwidth / 2.0;

    let mut bodies = Vec::with_capacity(p.count);
    for _ in 0..p.count {
        let x = pos.sample(rng);
        let y = pos.sample(rng);
        let m = sample_mass(rng, p.massmult);
        // Uniform::new panics on an empty range, so a zero vwidth is sampled by hand
        let vx = p.vcenter - half_v + p.vwidth * rng.gen::<f64>();
        let vy = p.vcenter - half_v + p.vwidth * rng.gen::<f64>();
        bodies.push(Body::new(x, y, m, vx, vy)?);
    }
    Ok(bodies)
}

/// Rotating normal cloud with a black hole at index 0.
///
/// Each body moves perpendicular to the line joining it to the centre of
/// mass, with speed `vmult·π·r / (massmult·width)` where `r` is its distance
/// to the centre of mass.
pub fn generate_normal<R: Rng + ?Sized>(rng: &mut R, p: &NormalParams) -> Result<Vec<Body>> {
    check(p.width > 0.0 && p.width.is_finite(), "width must be positive")?;
    check(p.massmult > 0.0 && p.massmult.is_finite(), "massmult must be positive")?;
    check(p.vmult.is_finite(), "vmult must be finite")?;
    check(p.center.is_finite(), "center must be finite")?;

    if p.count == 0 {
        return Ok(Vec::new());
    }

    // covariance width * I, so each axis has std dev sqrt(width)
    let normal = Normal::new(p.center, p.width.sqrt())
        .map_err(|e| Error::InvalidGenerator(e.to_string()))?;

    let mut bodies = Vec::with_capacity(p.count);
    for _ in 0..p.count {
        let x = normal.sample(rng);
        let y = normal.sample(rng);
        let m = sample_mass(rng, p.massmult);
        bodies.push(Body::new(x, y, m, 0.0, 0.0)?);
    }

    // velocities are oriented against the centre of mass of the cloud
    let com = Body {
        x: center_of_mass(&bodies),
        v: NVec2::zeros(),
        m: 1.0,
    };
    for b in bodies.iter_mut() {
        let theta = angle(&com, b) + PI / 2.0;
        let speed = p.vmult * PI * (distance(&com, b) / (p.massmult * p.width));
        b.v = NVec2::new(theta.cos() * speed, theta.sin() * speed);
    }

    let max_mass = bodies.iter().map(|b| b.m).fold(f64::MIN, f64::max);
    bodies[0] = Body::new(p.center, p.center, max_mass * BLACK_HOLE_FACTOR, 0.0, 0.0)?;

    Ok(bodies)
}
