//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the force law (`NewtonianGravity`)
//!
//! With the `viewer` feature the scenario is a Bevy `Resource` that the
//! frame systems step and read.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{GeneratorConfig, ScenarioConfig, ViewConfig};
use crate::error::{Error, Result};
use crate::simulation::engine::{step, Engine};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::generator::{generate_normal, generate_uniform};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
    pub view: ViewConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            t_end: p_cfg.t_end,
            G: p_cfg.G,
            seed: p_cfg.seed,
        };
        parameters.validate()?;

        // Explicit bodies first, in file order
        let mut bodies = cfg
            .bodies
            .iter()
            .map(|vals| Body::from_slice(vals))
            .collect::<Result<Vec<Body>>>()?;

        // Then the generated layout, if any
        if let Some(gen) = &cfg.generator {
            let mut rng = match parameters.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let generated = match gen {
                GeneratorConfig::Uniform(p) => generate_uniform(&mut rng, p)?,
                GeneratorConfig::Normal(p) => generate_normal(&mut rng, p)?,
            };
            bodies.extend(generated);
        }

        if cfg.bodies.is_empty() && cfg.generator.is_none() {
            return Err(Error::MissingBodies);
        }

        let engine = Engine {
            frames: parameters.frames(),
        };

        let forces = NewtonianGravity { G: parameters.G };

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
            view: cfg.view,
        })
    }

    /// Advance by one tick of `parameters.dt`.
    pub fn step(&mut self) {
        let dt = self.parameters.dt;
        step(&mut self.system, &self.forces, dt);
    }
}
