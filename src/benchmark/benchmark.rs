use std::time::Instant;
use crate::simulation::states::{Body, NVec3, System};
use crate::simulation::params::Parameters;
use crate::simulation::forces::ForceAccumulator;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::run_state::RunState;

/// Timing of one body count
#[derive(Debug, Clone, Copy)]
pub struct BenchSample {
    pub n: usize,
    pub secs: f64,
}

// deterministic spread, no rand needed; radius 0 so nothing ever collides
fn bench_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0 + i_f * 1e-3,
                (i_f * 0.13).cos() * 5.0,
                (i_f * 0.07).sin() * 5.0,
            );
            Body::at_rest(x, 1.0, 0.0)
        })
        .collect()
}

/// Time one full pairwise force pass for each body count in `ns`
pub fn bench_accumulate(ns: &[usize]) -> Vec<BenchSample> {
    let forces = ForceAccumulator::new(0.1);
    let mut state = RunState::new();

    ns.iter()
        .map(|&n| {
            let bodies = bench_bodies(n);
            let mut out = vec![NVec3::zeros(); n];

            // Warm up
            forces.accumulate_into(&bodies, &mut state, &mut out);

            let t0 = Instant::now();
            forces.accumulate_into(&bodies, &mut state, &mut out);
            let secs = t0.elapsed().as_secs_f64();

            log::info!("N = {n:5}, direct = {secs:8.6} s");
            BenchSample { n, secs }
        })
        .collect()
}

/// Time `steps` Euler ticks for each body count in `ns`
pub fn bench_euler(ns: &[usize], steps: usize) -> Vec<BenchSample> {
    let params = Parameters {
        G: 0.1,
        dt: 1e-3,
        eps2: 0.0,
        pace_ms: 0.0,
    };
    let forces = ForceAccumulator::new(params.G);

    ns.iter()
        .map(|&n| {
            let mut sys = System::new(bench_bodies(n));
            let mut state = RunState::new();

            let t0 = Instant::now();
            for _ in 0..steps {
                euler_integrator(&mut sys, &forces, &params, &mut state);
            }
            let secs = t0.elapsed().as_secs_f64();

            log::info!("N = {n:5}, {steps} euler steps = {secs:8.6} s");
            BenchSample { n, secs }
        })
        .collect()
}
