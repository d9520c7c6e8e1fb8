//! Windowing collaborator of the simulation loop
//!
//! The loop only needs three things from a window: whether the user asked to
//! close it, a chance to pump events once per tick, and a render call that
//! cannot influence the simulation.

use crate::simulation::states::Body;

pub trait Window {
    /// Polled at the start of every tick
    fn should_close(&self) -> bool;

    /// Called once per tick before the physics step
    fn poll_events(&mut self);

    /// Called once per tick after the observers
    fn render(&mut self, bodies: &[Body]);
}

/// Window without a display.
///
/// With `max_ticks = Some(n)` it requests close after `n` polls, which is how
/// bounded runs are expressed from the command line.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWindow {
    max_ticks: Option<u64>,
    polled: u64,
}

impl HeadlessWindow {
    pub fn new(max_ticks: Option<u64>) -> Self {
        Self { max_ticks, polled: 0 }
    }

    pub fn polled(&self) -> u64 {
        self.polled
    }
}

impl Window for HeadlessWindow {
    fn should_close(&self) -> bool {
        matches!(self.max_ticks, Some(n) if self.polled >= n)
    }

    fn poll_events(&mut self) {
        self.polled += 1;
    }

    fn render(&mut self, bodies: &[Body]) {
        log::trace!("render skipped for {} bodies", bodies.len());
    }
}
