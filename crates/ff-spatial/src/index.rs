//! The `NeighborIndex` trait: the spatial seam of the simulation.

use ff_core::{AgentId, Point};

use crate::{SpatialError, SpatialResult};

/// A registry of agent positions answering radius-bounded neighbor queries.
///
/// The index stores nothing but `(AgentId, Point)` pairs; agent state lives
/// in the population.  The simulation owns exactly one index and keeps it in
/// sync by calling [`relocate`](Self::relocate) whenever a mobile agent moves.
pub trait NeighborIndex {
    /// Register `agent` at `pos`.
    ///
    /// # Errors
    ///
    /// `AlreadyRegistered` if `agent` is present; `Core(NonFinitePosition)`
    /// for NaN / infinite coordinates.
    fn insert(&mut self, agent: AgentId, pos: Point) -> SpatialResult<()>;

    /// Move an already registered agent to `pos`.
    fn relocate(&mut self, agent: AgentId, pos: Point) -> SpatialResult<()>;

    /// Current registered position of `agent`, if any.
    fn position(&self, agent: AgentId) -> Option<Point>;

    /// Number of registered agents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every registered agent whose Euclidean distance to `origin` is at most
    /// `radius`, in ascending `AgentId` order.
    ///
    /// `exclude` names the querying agent so it never reports itself; other
    /// agents sharing its exact position are still returned.
    ///
    /// # Errors
    ///
    /// `InvalidQueryRadius` if `radius` is negative or NaN.  A malformed
    /// query is never answered with an empty result.
    fn neighbors_within(
        &self,
        origin:  Point,
        radius:  f64,
        exclude: Option<AgentId>,
    ) -> SpatialResult<Vec<AgentId>>;
}

/// Shared precondition check for [`NeighborIndex::neighbors_within`].
///
/// `+inf` is accepted and means "everyone".
pub(crate) fn check_query_radius(radius: f64) -> SpatialResult<()> {
    if radius.is_nan() || radius < 0.0 {
        return Err(SpatialError::InvalidQueryRadius(radius));
    }
    Ok(())
}
