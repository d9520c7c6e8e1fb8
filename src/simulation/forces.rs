//! Pairwise gravity and collision detection for the n-body engine
//!
//! One pass over every ordered pair (i, j), i != j, yields the net
//! acceleration of each body and flags overlapping pairs in the [`RunState`].

use crate::simulation::states::{Body, NVec3};
use crate::simulation::run_state::{Collision, RunState};

/// Direct O(n^2) Newtonian gravity with collision detection.
///
/// Each ordered pair is evaluated on its own; the symmetry of the force is
/// not exploited, so body i's acceleration is built only from the bodies it
/// sees.
#[allow(non_snake_case)]
pub struct ForceAccumulator {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, 0 keeps the bare 1/r^2 law
}

impl ForceAccumulator {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G, eps2: 0.0 }
    }

    pub fn with_softening(mut self, eps2: f64) -> Self {
        self.eps2 = eps2;
        self
    }

    /// Compute accelerations for all `bodies`, one per body, same order.
    pub fn accumulate(&self, bodies: &[Body], state: &mut RunState) -> Vec<NVec3> {
        let mut out = vec![NVec3::zeros(); bodies.len()];
        self.accumulate_into(bodies, state, &mut out);
        out
    }

    /// Same as [`accumulate`](Self::accumulate) but writes into `out`,
    /// which must have one slot per body.
    ///
    /// Colliding pairs contribute no gravity. The pass is never cut short,
    /// so every colliding ordered pair of this tick ends up in `state`.
    pub fn accumulate_into(&self, bodies: &[Body], state: &mut RunState, out: &mut [NVec3]) {
        state.begin_pass();

        for (i, bi) in bodies.iter().enumerate() {
            let mut acc = NVec3::zeros();

            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                if let Some(c) = collision(i, bi, j, bj) {
                    state.record_collision(c);
                    continue;
                }

                acc += self.pair_acceleration(bi, bj);
            }
            out[i] = acc;
        }
    }

    /// Acceleration of `on` due to `from`:
    /// a = G * m_from * d / |d|^3 with d pointing from `on` to `from`.
    ///
    /// Coincident bodies divide by zero unless `eps2 > 0`.
    pub fn pair_acceleration(&self, on: &Body, from: &Body) -> NVec3 {
        let d = from.x - on.x;

        // |d|^2 (+ softening)
        let r2 = d.dot(&d) + self.eps2;
        let r = r2.sqrt();

        let coef = self.G / (r2 * r);
        d * (coef * from.m)
    }
}

/// Strict overlap test: touching bodies (distance == radius sum) do not collide.
pub fn collides(a: &Body, b: &Body) -> bool {
    collision(0, a, 1, b).is_some()
}

fn collision(i: usize, bi: &Body, j: usize, bj: &Body) -> Option<Collision> {
    let distance = (bj.x - bi.x).norm();
    let radius_sum = bi.radius + bj.radius;
    if distance < radius_sum {
        Some(Collision { i, j, distance, radius_sum })
    } else {
        None
    }
}
