//! Fixed-step semi-implicit Euler integrator
//!
//! Velocity is kicked first, then positions drift with the updated velocity.

use super::states::{Body, NVec3, System};
use super::forces::ForceAccumulator;
use super::params::Parameters;
use super::run_state::RunState;

/// Apply one Euler step to `bodies` using precomputed accelerations.
/// `accels[i]` belongs to `bodies[i]`.
pub fn apply_euler(bodies: &mut [Body], accels: &[NVec3], dt: f64) {
    // v_n+1 = v_n + dt * a_n
    for (b, a) in bodies.iter_mut().zip(accels.iter()) {
        b.v += *a * dt;
    }

    // x_n+1 = x_n + dt * v_n+1
    for b in bodies.iter_mut() {
        b.x += b.v * dt;
    }
}

/// Advance the whole system by one tick: accumulate, then integrate.
/// The stop flag in `state` is raised if any pair collided during the pass,
/// the step itself is still applied.
pub fn euler_integrator(sys: &mut System, forces: &ForceAccumulator, params: &Parameters, state: &mut RunState) {
    let accels = forces.accumulate(&sys.bodies, state);
    apply_euler(&mut sys.bodies, &accels, params.dt);
    sys.tick += 1;
}
