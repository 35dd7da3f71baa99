//! Fluent builder for constructing a [`Sim`].

use ff_core::{ModelConfig, SimClock, SimRng};
use ff_spatial::{NeighborIndex, ScanIndex};
use tracing::info;

use crate::placement::place_population;
use crate::{Sim, SimError, SimResult};

/// Build a model with the default [`ScanIndex`].
///
/// # Errors
///
/// `Build(InvalidConfiguration)` for a non-positive plane and
/// `Build(InvalidRadius)` for a non-positive store or survey radius.
pub fn create_model(config: ModelConfig) -> SimResult<Sim> {
    SimBuilder::new(config).build()
}

/// Fluent builder for [`Sim<I>`].
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                                 |
/// |-------------|-----------------------------------------|
/// | `.index(i)` | `ScanIndex` sized for the population    |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .index(RTreeIndex::new())
///     .build()?;
/// ```
pub struct SimBuilder<I: NeighborIndex = ScanIndex> {
    config: ModelConfig,
    index:  I,
}

impl SimBuilder<ScanIndex> {
    pub fn new(config: ModelConfig) -> Self {
        // An oversized count is reported by `build`; don't pre-allocate for it.
        let index = ScanIndex::with_capacity(config.agent_count().unwrap_or(0));
        Self { config, index }
    }
}

impl<I: NeighborIndex> SimBuilder<I> {
    /// Replace the neighbor index.  It must be empty; `build` registers
    /// every agent in it.
    pub fn index<J: NeighborIndex>(self, index: J) -> SimBuilder<J> {
        SimBuilder { config: self.config, index }
    }

    /// Validate the configuration, seed the RNG, place every agent, and
    /// return a ready-to-run [`Sim`].  Nothing is built on error.
    pub fn build(self) -> SimResult<Sim<I>> {
        let bounds = self.config.validate()?;

        let mut index = self.index;
        if !index.is_empty() {
            return Err(SimError::IndexNotEmpty(index.len()));
        }

        let seed = self.config.seed.unwrap_or_else(SimRng::fresh_seed);
        let mut rng = SimRng::new(seed);

        let population = place_population(&self.config, bounds, &mut rng)?;
        for agent in population.iter() {
            index.insert(agent.id(), agent.position())?;
        }
        let order = population.ids().collect();

        let counts = population.counts();
        info!(
            customers = counts.customers,
            stores = counts.stores,
            surveyors = counts.surveyors,
            width = bounds.width,
            height = bounds.height,
            seed,
            "model created"
        );

        Ok(Sim {
            config: self.config,
            bounds,
            clock: SimClock::new(),
            population,
            index,
            rng,
            order,
            seed,
        })
    }
}
