use thiserror::Error;

use ff_core::FfError;
use ff_spatial::SpatialError;

/// Errors raised while stepping an agent.  Under a consistent population and
/// index none of these occur; they signal a bookkeeping bug, not bad luck.
#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error(transparent)]
    Agent(#[from] FfError),

    #[error("spatial query failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
