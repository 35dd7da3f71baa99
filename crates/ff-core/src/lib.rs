//! `ff-core`: foundational types for the `footfall` foot-traffic simulation.
//!
//! Every other `ff-*` crate depends on this one.  It has no `ff-*`
//! dependencies and only two external ones (`rand`, `thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                            |
//! | [`geo`]    | `Point`, `Bounds` (the bounded plane)                |
//! | [`time`]   | `Tick`, `SimClock`                                   |
//! | [`rng`]    | `SimRng` (the single seeded generator of a run)      |
//! | [`config`] | `ModelConfig` and its validation                     |
//! | [`error`]  | `FfError`, `FfResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types.       |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ModelConfig;
pub use error::{FfError, FfResult};
pub use geo::{Bounds, Point};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
