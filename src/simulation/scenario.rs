//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at tick 0)
//! - the force pass (`ForceAccumulator`)
//!
//! Bodies come from the explicit `bodies` list when it is non-empty,
//! otherwise they are drawn by a [`RandomBodyFactory`].

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::factory::{BodyRanges, RandomBodyFactory, UniformRange};
use crate::simulation::forces::ForceAccumulator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceAccumulator,
}

impl Scenario {
    /// Assemble a scenario from already-built parts
    pub fn new(parameters: Parameters, bodies: Vec<Body>) -> Self {
        let forces = ForceAccumulator::new(parameters.G).with_softening(parameters.eps2);
        Self {
            parameters,
            system: System::new(bodies),
            forces,
        }
    }

    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        if !p_cfg.dt.is_finite() || p_cfg.dt <= 0.0 {
            return Err(Error::InvalidParam(format!("dt must be finite and > 0, got {}", p_cfg.dt)));
        }
        if !p_cfg.eps2.is_finite() || p_cfg.eps2 < 0.0 {
            return Err(Error::InvalidParam(format!("eps2 must be finite and >= 0, got {}", p_cfg.eps2)));
        }
        if !cfg.engine.pace_ms.is_finite() || cfg.engine.pace_ms < 0.0 {
            return Err(Error::InvalidParam(format!("pace_ms must be finite and >= 0, got {}", cfg.engine.pace_ms)));
        }
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            eps2: p_cfg.eps2,
            pace_ms: cfg.engine.pace_ms,
        };

        let bodies = if cfg.bodies.is_empty() {
            let mut factory = RandomBodyFactory::new(body_ranges(cfg), cfg.engine.seed)?;
            factory.populate(cfg.engine.body_count)
        } else {
            cfg.bodies
                .iter()
                .enumerate()
                .map(|(i, bc)| body_from_config(i, bc))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self::new(parameters, bodies))
    }
}

pub fn body_ranges(cfg: &ScenarioConfig) -> BodyRanges {
    let s = &cfg.sampling;
    BodyRanges {
        mass: UniformRange::new(s.mass[0], s.mass[1]),
        radius: UniformRange::new(s.radius[0], s.radius[1]),
        position: UniformRange::new(s.position[0], s.position[1]),
        velocity: UniformRange::new(s.velocity[0], s.velocity[1]),
    }
}

// Map `BodyConfig` -> runtime `Body`, checking vector lengths
fn body_from_config(i: usize, bc: &BodyConfig) -> Result<Body> {
    let vec3 = |name: &str, v: &[f64]| -> Result<NVec3> {
        match v {
            [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
            _ => Err(Error::InvalidParam(format!(
                "body {i}: `{name}` needs 3 components, got {}",
                v.len()
            ))),
        }
    };

    if bc.radius < 0.0 {
        return Err(Error::InvalidParam(format!("body {i}: radius must be >= 0")));
    }

    Ok(Body {
        x: vec3("x", &bc.x)?,
        v: vec3("v", &bc.v)?,
        m: bc.m,
        radius: bc.radius,
    })
}
