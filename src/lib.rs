pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;
pub mod visualization;

pub use error::Error;

pub use simulation::states::{Body, System, NVec2, center_of_mass, total_momentum};
pub use simulation::vector_math::{distance, angle, force_magnitude, G};
pub use simulation::forces::{ForceModel, NewtonianGravity};
pub use simulation::integrator::{next_position, next_velocity, advance};
pub use simulation::engine::{step, Engine};
pub use simulation::generator::{generate_uniform, generate_normal, UniformParams, NormalParams};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, GeneratorConfig, ScenarioConfig, ViewConfig};
pub use visualization::layout::half_extent;

#[cfg(feature = "viewer")]
pub use visualization::viewer2d::run_2d;

pub use benchmark::benchmark::{bench_net_forces, bench_step};
