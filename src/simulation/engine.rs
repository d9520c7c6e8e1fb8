//! Tick driver of the simulation
//!
//! `Simulation` owns the scenario and the run state and walks the
//! `Running -> Stopped` state machine. Each tick runs the force pass and the
//! Euler step, then hands the bodies to every [`TickObserver`] and to the
//! window. A collision or a close request stops the run for good.

use std::thread;
use std::time::Duration;

use crate::error::Result;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::run_state::{Phase, RunState, StopReason};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Body;
use crate::visualization::headless::Window;

/// Consumer of per-tick state (step log, telemetry, ...)
pub trait TickObserver {
    /// Called once per completed tick with the post-step bodies
    fn on_tick(&mut self, tick: u64, bodies: &[Body]) -> Result<()>;

    /// Called exactly once when the loop stops, `tick` is the number of ticks run
    fn on_stop(&mut self, tick: u64, reason: StopReason) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub reason: StopReason,
}

pub struct Simulation {
    pub scenario: Scenario,
    pub state: RunState,
    phase: Phase,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            state: RunState::new(),
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tick(&self) -> u64 {
        self.scenario.system.tick
    }

    pub fn bodies(&self) -> &[Body] {
        &self.scenario.system.bodies
    }

    /// One accumulate + integrate tick, no observers and no pacing.
    /// Returns `true` when the stop flag is set after the step.
    pub fn step(&mut self) -> bool {
        let Scenario {
            system,
            parameters,
            forces,
        } = &mut self.scenario;

        euler_integrator(system, forces, parameters, &mut self.state);
        self.state.should_stop()
    }

    /// Drive the loop until a collision or a close request.
    ///
    /// Observers are told about every tick and get one `on_stop` call,
    /// also when an observer fails; the first observer error is returned.
    /// Calling `run` again on a stopped simulation does nothing.
    pub fn run<W: Window>(
        &mut self,
        window: &mut W,
        observers: &mut [&mut dyn TickObserver],
    ) -> Result<RunSummary> {
        if let Phase::Stopped(reason) = self.phase {
            return Ok(RunSummary { ticks: self.tick(), reason });
        }

        let pace = self.pace();
        let mut failure = None;

        let reason = loop {
            if self.state.should_stop() {
                break StopReason::Collision;
            }
            if window.should_close() {
                break StopReason::CloseRequested;
            }
            window.poll_events();

            let tick = self.tick();
            let collided = self.step();

            if let Err(e) = notify_tick(observers, tick, self.bodies()) {
                failure = Some(e);
                break StopReason::ObserverFailed;
            }
            window.render(self.bodies());

            if !pace.is_zero() {
                thread::sleep(pace);
            }

            if collided {
                for c in self.state.collisions() {
                    log::debug!(
                        "bodies {} and {} overlap: distance {} < radius sum {}",
                        c.i, c.j, c.distance, c.radius_sum
                    );
                }
            }
        };

        self.phase = Phase::Stopped(reason);
        let ticks = self.tick();
        log::info!("simulation stopped after {ticks} ticks: {reason:?}");

        // every observer gets its stop call, the first error wins
        for observer in observers.iter_mut() {
            if let Err(e) = observer.on_stop(ticks, reason) {
                if failure.is_none() {
                    failure = Some(e);
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }
        Ok(RunSummary { ticks, reason })
    }

    // sleep of pace_ms per unit dt
    fn pace(&self) -> Duration {
        let p = &self.scenario.parameters;
        Duration::try_from_secs_f64(p.pace_ms * p.dt / 1000.0).unwrap_or(Duration::ZERO)
    }
}

fn notify_tick(observers: &mut [&mut dyn TickObserver], tick: u64, bodies: &[Body]) -> Result<()> {
    for observer in observers.iter_mut() {
        observer.on_tick(tick, bodies)?;
    }
    Ok(())
}
