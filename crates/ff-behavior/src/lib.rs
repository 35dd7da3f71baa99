//! `ff-behavior`: what each agent kind does when it steps.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`context`]  | `StepContext`, the mutable tick state handed to every step    |
//! | [`walk`]     | `random_walk`, `step_customer` (mobile agents)                |
//! | [`exposure`] | `record_exposure` (attractor agents)                          |
//! | [`survey`]   | `measure` (surveyor agents)                                   |
//! | [`dispatch`] | `step_agent`, `StepOutcome`, kind-tag dispatch                |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Side effects per kind
//!
//! | Kind      | Reads                     | Writes                                   |
//! |-----------|---------------------------|------------------------------------------|
//! | Mobile    | own position, RNG         | own position (population + index)        |
//! | Attractor | neighbors within radius   | own counters; visited set of customers   |
//! | Surveyor  | neighbors within radius   | own measurement history                  |
//!
//! The attractor → customer visit write is the only mutation that crosses
//! agent boundaries.  Everything runs on one thread, one agent at a time, so
//! no step ever observes another step half-done.

pub mod context;
pub mod dispatch;
pub mod error;
pub mod exposure;
pub mod survey;
pub mod walk;

#[cfg(test)]
mod tests;

pub use context::StepContext;
pub use dispatch::{StepOutcome, step_agent};
pub use error::{BehaviorError, BehaviorResult};
pub use exposure::record_exposure;
pub use survey::measure;
pub use walk::{random_walk, step_customer};
