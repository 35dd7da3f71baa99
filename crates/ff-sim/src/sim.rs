//! The `Sim` struct and its tick loop.

use ff_agent::Population;
use ff_behavior::{StepContext, StepOutcome, step_agent};
use ff_core::{AgentId, Bounds, ModelConfig, SimClock, SimRng, Tick};
use ff_spatial::{NeighborIndex, ScanIndex};
use tracing::debug;

use crate::stats::{self, StoreStatistics, SurveyResults};
use crate::{SimObserver, SimResult};

/// A running model.
///
/// `Sim<I>` owns the population, the neighbor index `I`, the run's RNG, and
/// the tick counter.  State is private so the population and the index can
/// only move together; read it through the accessors.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`create_model`][crate::create_model].
pub struct Sim<I: NeighborIndex = ScanIndex> {
    pub(crate) config:     ModelConfig,
    pub(crate) bounds:     Bounds,
    pub(crate) clock:      SimClock,
    pub(crate) population: Population,
    pub(crate) index:      I,
    pub(crate) rng:        SimRng,
    /// Agent step order, re-shuffled in place at the start of every tick.
    pub(crate) order:      Vec<AgentId>,
    pub(crate) seed:       u64,
}

impl<I: NeighborIndex> Sim<I> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one tick: shuffle the agent order, step every agent once in that
    /// order, then advance the clock.
    ///
    /// # Errors
    ///
    /// Only on a population / index bookkeeping fault; a model built by
    /// [`SimBuilder`][crate::SimBuilder] never hits one.
    pub fn advance_tick(&mut self) -> SimResult<()> {
        let now = self.clock.current_tick;

        // Explicit field borrows so the borrow checker sees disjoint access.
        let Self { bounds, population, index, rng, order, .. } = &mut *self;
        rng.shuffle(order.as_mut_slice());

        let mut ctx = StepContext::new(now, *bounds, population, index, rng);
        let mut moved = 0usize;
        let mut exposure = 0u64;
        let mut measurements = 0usize;
        for &agent in order.iter() {
            match step_agent(agent, &mut ctx)? {
                StepOutcome::Moved { from, to } => moved += usize::from(from != to),
                StepOutcome::Exposed { customers } => exposure += customers,
                StepOutcome::Measured(_) => measurements += 1,
            }
        }

        debug!(tick = now.0, moved, exposure, measurements, "tick complete");
        self.clock.advance();
        Ok(())
    }

    /// Run exactly `n` ticks, reporting to `observer` around each one.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.advance_tick()?;
            observer.on_tick_end(now, &self.population);
        }
        observer.on_run_end(self.clock.current_tick, &self.population);
        Ok(())
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Exposure, position and radius of every store, keyed by name.
    pub fn store_statistics(&self) -> StoreStatistics {
        stats::store_statistics(&self.population)
    }

    /// Latest measurement of every surveyor, keyed by name.
    pub fn survey_results(&self) -> SurveyResults {
        stats::survey_results(&self.population)
    }

    /// Stores by cumulative exposure, highest first; ties in creation order.
    pub fn exposure_ranking(&self) -> Vec<(String, u64)> {
        stats::exposure_ranking(&self.population)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The seed this run was started from, whether configured or drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn index(&self) -> &I {
        &self.index
    }
}
