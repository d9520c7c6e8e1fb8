//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – body count, seed, pacing and an optional tick budget
//! - [`ParametersConfig`] – physical constants and the tick duration
//! - [`SamplingConfig`]   – uniform ranges used to draw random bodies
//! - [`LoggingConfig`]    – where the step log goes and how many ticks it keeps
//! - [`BodyConfig`]       – optional explicit initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! Every section and every field has a default, so `{}` is a
//! valid three-body scenario.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   body_count: 3          # ignored when `bodies` is non-empty
//!   seed: 42               # omit for a fresh random seed
//!   pace_ms: 1.0           # sleep per unit dt, 0 disables
//!   max_ticks: 500         # headless close request, omit to run until collision
//!
//! parameters:
//!   G: 6.6743e-11
//!   dt: 1.0
//!   eps2: 0.0              # softening, 0 keeps the bare 1/r^2 law
//!
//! sampling:
//!   mass: [0.0, 1.0]       # [lower, upper)
//!   radius: [0.0, 1.0]
//!   position: [0.0, 1.0]   # per axis
//!   velocity: [0.0, 1.0]   # per axis
//!
//! logging:
//!   path: simulation_log.txt
//!   max_steps: 100
//!
//! bodies:
//!   - x: [ -0.5, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0
//!     radius: 0.1
//! ```

use serde::Deserialize;

use crate::simulation::params::{
    DEFAULT_BODY_COUNT, DEFAULT_DT, DEFAULT_MAX_LOG_STEPS, DEFAULT_PACE_MS, GRAVITATIONAL_CONSTANT,
};

/// Run-level options
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub body_count: usize, // number of randomly drawn bodies
    pub seed: Option<u64>, // deterministic seed, None -> OS entropy
    pub pace_ms: f64, // milliseconds slept per unit dt after each tick
    pub max_ticks: Option<u64>, // close request from the headless window
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            seed: None,
            pace_ms: DEFAULT_PACE_MS,
            max_ticks: None,
        }
    }
}

/// Physical constants and the fixed step
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub dt: f64, // tick duration
    pub eps2: f64, // softening
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            dt: DEFAULT_DT,
            eps2: 0.0,
        }
    }
}

/// `[lower, upper)` pairs for each sampled component
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    pub mass: [f64; 2],
    pub radius: [f64; 2],
    pub position: [f64; 2],
    pub velocity: [f64; 2],
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            mass: [0.0, 1.0],
            radius: [0.0, 1.0],
            position: [0.0, 1.0],
            velocity: [0.0, 1.0],
        }
    }
}

/// Plain-text step log
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub path: String, // output file, relative to the working directory
    pub max_steps: usize, // number of ticks written before the log closes
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            path: "simulation_log.txt".to_string(),
            max_steps: DEFAULT_MAX_LOG_STEPS,
        }
    }
}

/// Explicit initial state for one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position, three components
    pub v: Vec<f64>, // velocity, three components
    pub m: f64, // mass
    pub radius: f64, // collision radius
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub sampling: SamplingConfig,
    pub logging: LoggingConfig,
    pub bodies: Vec<BodyConfig>, // replaces random population when non-empty
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> crate::Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }
}
