//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and end time,
//! - gravitational constant `G` (scaled units),
//! - optional random seed for the generators

use crate::error::{Error, Result};

/// Upper bound on `t_end / dt`; anything above is treated as a misconfigured step
pub const MAX_FRAMES: usize = 100_000_000;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub t_end: f64, // time end
    pub G: f64, // gravitational constant
    pub seed: Option<u64>, // deterministic seed
}

impl Parameters {
    /// Reject step sizes and end times the driver loop cannot run.
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(Error::InvalidParameters(format!("dt must be positive and finite, got {}", self.dt)));
        }
        if !(self.t_end.is_finite() && self.t_end >= 0.0) {
            return Err(Error::InvalidParameters(format!("t_end must be finite and not negative, got {}", self.t_end)));
        }
        if !self.G.is_finite() {
            return Err(Error::InvalidParameters(format!("G must be finite, got {}", self.G)));
        }
        let frames = self.t_end / self.dt;
        if frames > MAX_FRAMES as f64 {
            return Err(Error::InvalidParameters(format!(
                "t_end / dt = {:e} exceeds {} frames",
                frames, MAX_FRAMES
            )));
        }
        Ok(())
    }

    /// Number of whole steps needed to reach `t_end`, capped at `MAX_FRAMES`.
    pub fn frames(&self) -> usize {
        if !(self.dt > 0.0) || !self.t_end.is_finite() {
            return 0;
        }
        ((self.t_end / self.dt) as usize).min(MAX_FRAMES)
    }
}
