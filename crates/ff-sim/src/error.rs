use ff_behavior::BehaviorError;
use ff_core::FfError;
use ff_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// Configuration or agent-creation failure; no model was built.
    #[error("model construction failed: {0}")]
    Build(#[from] FfError),

    #[error("the supplied index already holds {0} agents; it must start empty")]
    IndexNotEmpty(usize),

    #[error("spatial index error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent step failed: {0}")]
    Step(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
