//! `ff-sim`: model construction and the tick loop for `footfall`.
//!
//! # Tick loop
//!
//! ```text
//! advance_tick():
//!   ① Shuffle: permute the agent order with the run's RNG.
//!   ② Step:    for each agent in that order, dispatch on its kind:
//!                 Mobile    → random walk, update population + index
//!                 Attractor → count customers in radius, mark visits
//!                 Surveyor  → measure flow / density / heat, append
//!   ③ Advance: bump the tick counter once every agent has stepped.
//! ```
//!
//! Steps see the effects of steps earlier in the same tick.  Results are
//! therefore order-dependent but reproducible: the order comes from the
//! seeded RNG.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ff_core::ModelConfig;
//! use ff_sim::{NoopObserver, create_model};
//!
//! let mut sim = create_model(ModelConfig { seed: Some(42), ..ModelConfig::default() })?;
//! sim.run_ticks(50, &mut NoopObserver)?;
//! for (name, stats) in sim.store_statistics() {
//!     println!("{name}: {}", stats.cumulative_exposure);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod placement;
pub mod sim;
pub mod stats;


pub use builder::{SimBuilder, create_model};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{StoreStatistics, StoreStats, SurveyResults};
