//! Spatial-subsystem error type.

use thiserror::Error;

use ff_core::{AgentId, FfError};

/// Errors produced by `ff-spatial`.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    /// A neighbor query with a negative or NaN radius.
    #[error("invalid query radius {0}: must be a non-negative number")]
    InvalidQueryRadius(f64),

    #[error("agent {0} is already registered in the index")]
    AlreadyRegistered(AgentId),

    #[error("agent {0} not found in index")]
    AgentNotFound(AgentId),

    #[error(transparent)]
    Core(#[from] FfError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
