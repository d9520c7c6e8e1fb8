//! Per-run mutable state shared between the loop and the force pass
//!
//! `RunState` carries the stop flag that the accumulator raises when two
//! bodies overlap. The flag is sticky: once set it is never cleared, so a
//! collision ends the run for good.

/// One colliding ordered pair observed during a force pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub i: usize, // body feeling the contact
    pub j: usize, // other body
    pub distance: f64, // center separation
    pub radius_sum: f64, // radius[i] + radius[j]
}

/// Why the loop left the running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Collision,
    CloseRequested,
    ObserverFailed, // an observer returned an error
}

/// Loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped(StopReason),
}

#[derive(Debug, Clone, Default)]
pub struct RunState {
    stop: bool,
    collisions: Vec<Collision>, // pairs from the latest pass only
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_stop(&self) -> bool {
        self.stop
    }

    /// Raise the stop flag. Idempotent.
    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    /// Forget the previous pass' collisions; the stop flag is untouched
    pub fn begin_pass(&mut self) {
        self.collisions.clear();
    }

    pub fn record_collision(&mut self, collision: Collision) {
        self.collisions.push(collision);
        self.request_stop();
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
