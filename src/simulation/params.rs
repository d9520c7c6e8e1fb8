//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` and optional softening `eps2`,
//! - tick duration `dt`,
//! - pacing delay per unit of `dt`
//!
//! The defaults below are also the serde defaults of the scenario files.

/// Newtonian gravitational constant (SI)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;
pub const DEFAULT_DT: f64 = 1.0;
pub const DEFAULT_BODY_COUNT: usize = 3;
pub const DEFAULT_MAX_LOG_STEPS: usize = 100;
/// Milliseconds slept per unit of `dt` at the end of each tick
pub const DEFAULT_PACE_MS: f64 = 1.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed tick duration
    pub eps2: f64, // softening, 0 means plain 1/r^2
    pub pace_ms: f64, // pacing delay per unit dt, 0 disables
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            dt: DEFAULT_DT,
            eps2: 0.0,
            pace_ms: DEFAULT_PACE_MS,
        }
    }
}
