//! Observer trait for progress reporting and data collection.

use ff_agent::Population;
use ff_core::Tick;

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] around
/// each tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress { every: u64, total: u64 }
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, tick: Tick, _population: &Population) {
///         let done = tick.0 + 1;
///         if done % self.every == 0 {
///             println!("completed {done}/{}", self.total);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any agent steps in `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has stepped in `tick`, before the clock
    /// advances past it.
    fn on_tick_end(&mut self, _tick: Tick, _population: &Population) {}

    /// Called once after the last tick of a `run_ticks` call.
    /// `final_tick` is the number of ticks completed so far.
    fn on_run_end(&mut self, _final_tick: Tick, _population: &Population) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
