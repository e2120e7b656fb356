//! Simulation observer trait for progress reporting and frame consumers.

use crowd_core::Tick;

use crate::{Simulation, StepReport};

/// Callbacks invoked by [`Simulation::run_ticks`] around every step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  A renderer typically implements
/// `on_snapshot` and reads `sim.agents()` to fill its instance buffers.
pub trait SimObserver {
    /// Called before the step for `tick` runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the step with its summary.
    fn on_tick_end(&mut self, _report: &StepReport) {}

    /// Called after every step with read-only access to the full state.
    fn on_snapshot(&mut self, _tick: Tick, _sim: &Simulation) {}

    /// Called once after the last step; `next_tick` is the timestamp the
    /// following step would use.
    fn on_sim_end(&mut self, _next_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
