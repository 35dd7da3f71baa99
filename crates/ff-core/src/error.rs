//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FfError` as one variant
//! through `#[from]`.

use thiserror::Error;

use crate::AgentId;

/// The base error type shared by every `ff-*` crate.
#[derive(Debug, Error, PartialEq)]
pub enum FfError {
    /// Rejected at model creation; no partial model is built.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An influence or measurement radius that is not a positive finite number.
    #[error("invalid radius {radius}: must be positive and finite")]
    InvalidRadius { radius: f64 },

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    /// A kind-specific operation was applied to an agent of another kind.
    #[error("agent {agent} is a {actual}, expected a {expected}")]
    WrongKind {
        agent:    AgentId,
        expected: &'static str,
        actual:   &'static str,
    },

    #[error("coordinate ({x}, {y}) is not finite")]
    NonFinitePosition { x: f64, y: f64 },
}

/// Shorthand result type for all `ff-*` crates.
pub type FfResult<T> = Result<T, FfError>;

/// Check that `radius` is usable as an agent radius (`> 0`, finite).
pub fn validate_radius(radius: f64) -> FfResult<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(FfError::InvalidRadius { radius })
    }
}
