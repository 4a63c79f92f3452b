//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, end time, gravitational constant, seed
//! - `bodies`             – explicit initial bodies as `[x, y, m, vx, vy]`
//! - [`GeneratorConfig`]  – optional random layout appended after the explicit bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 1.0                 # fixed step size
//!   t_end: 500.0            # total simulation time
//!   G: 6.6742e-5            # optional, scaled gravitational constant
//!   seed: 42                # optional, makes generated layouts reproducible
//!
//! bodies:
//!   - [0.0, 0.0, 1000.0, 0.0, 0.0]
//!   - [10.0, 0.0, 1.0, 0.0, 0.25]
//!
//! generator:
//!   kind: uniform           # or "normal"
//!   count: 50
//!   width: 100.0
//!
//! view:
//!   lim: 50.0               # optional fixed axis range [-lim, lim]
//! ```
//!
//! Missing generator fields fall back to the generator defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::generator::{NormalParams, UniformParams};
use crate::simulation::vector_math::G;

fn default_g() -> f64 {
    G
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,     // time step size
    pub t_end: f64,  // time end
    #[serde(default = "default_g")]
    pub G: f64,      // gravitational constant, scaled units
    #[serde(default)]
    pub seed: Option<u64>, // deterministic seed to make runs reproducable
}

/// Random initial-condition layout
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorConfig {
    Uniform(UniformParams),
    Normal(NormalParams),
}

/// Display options for the viewer
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ViewConfig {
    #[serde(default)]
    pub lim: Option<f64>, // fixed half-width of the shown area, world units
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<Vec<f64>>, // each entry is [x, y, m, vx, vy]
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
    #[serde(default)]
    pub view: ViewConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("failed to parse scenario yaml")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).with_context(|| format!("failed to parse {}", path.display()))
    }
}
