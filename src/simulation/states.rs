//! Core state types for the N-body simulation.
//!
//! - `Body`   a point mass with a collision radius
//! - `System` the ordered body collection plus the tick counter
//!
//! Body indices are stable identities for the whole run: bodies are never
//! inserted or removed after population.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub radius: f64, // collision radius
}

impl Body {
    pub fn new(x: NVec3, v: NVec3, m: f64, radius: f64) -> Self {
        Self { x, v, m, radius }
    }

    /// Body at rest at `x`
    pub fn at_rest(x: NVec3, m: f64, radius: f64) -> Self {
        Self::new(x, NVec3::zeros(), m, radius)
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // creation order
    pub tick: u64, // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, tick: 0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
