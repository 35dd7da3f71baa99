//! Mutable tick state passed to every step.

use ff_agent::Population;
use ff_core::{Bounds, SimRng, Tick};
use ff_spatial::NeighborIndex;

/// Everything a step may touch, borrowed from the simulation for the length
/// of one tick.
///
/// The borrows are disjoint fields of the simulation, so the tick loop can
/// iterate its own agent order while handing this context to each step.
pub struct StepContext<'a, I: NeighborIndex> {
    /// Tick being executed (the clock advances after the full pass).
    pub tick: Tick,

    /// The plane every position is clamped into.
    pub bounds: Bounds,

    pub population: &'a mut Population,

    /// Kept in sync with `population` positions by `step_customer`.
    pub index: &'a mut I,

    /// The run's single RNG.
    pub rng: &'a mut SimRng,
}

impl<'a, I: NeighborIndex> StepContext<'a, I> {
    #[inline]
    pub fn new(
        tick:       Tick,
        bounds:     Bounds,
        population: &'a mut Population,
        index:      &'a mut I,
        rng:        &'a mut SimRng,
    ) -> Self {
        Self { tick, bounds, population, index, rng }
    }
}
