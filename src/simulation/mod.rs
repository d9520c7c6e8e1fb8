pub mod states;
pub mod params;
pub mod run_state;
pub mod factory;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod engine;
