//! `ff-agent`: agent data model for the `footfall` simulation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`agent`]      | `Agent`, `AgentKind`, `Role`, `Customer`, `Store`, `Surveyor` |
//! | [`metrics`]    | `Measurement` and the flow → density / heat formulas      |
//! | [`population`] | `Population` (id-indexed storage), `PopulationCounts`      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.    |
//!
//! Agents form a closed set of three kinds.  Behavior is dispatched on the
//! [`AgentKind`] tag by `ff-behavior`; this crate only owns state and the
//! narrow mutation methods each kind allows.

pub mod agent;
pub mod metrics;
pub mod population;


pub use agent::{Agent, AgentKind, Customer, Role, Store, Surveyor};
pub use metrics::Measurement;
pub use population::{Population, PopulationCounts};
