pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod logging;
pub mod benchmark;
pub mod error;

pub use error::{Error, Result};

pub use simulation::states::{Body, System, NVec3};
pub use simulation::params::Parameters;
pub use simulation::run_state::{Collision, Phase, RunState, StopReason};
pub use simulation::factory::{BodyRanges, RandomBodyFactory, UniformRange};
pub use simulation::forces::{collides, ForceAccumulator};
pub use simulation::integrator::{apply_euler, euler_integrator};
pub use simulation::scenario::Scenario;
pub use simulation::engine::{RunSummary, Simulation, TickObserver};

pub use configuration::config::{EngineConfig, ParametersConfig, SamplingConfig, LoggingConfig, BodyConfig, ScenarioConfig};

pub use visualization::headless::{HeadlessWindow, Window};
pub use logging::step_log::{LogFile, LogHeader, LogStatus, StepLogger};

pub use benchmark::benchmark::{bench_accumulate, bench_euler, BenchSample};
