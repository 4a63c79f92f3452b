pub mod states;
pub mod params;
pub mod engine;
pub mod vector_math;
pub mod forces;
pub mod integrator;
pub mod generator;
pub mod scenario;
