//! Brute-force neighbor index.
//!
//! Positions sit in a flat `Vec` in insertion order with an `FxHashMap` from
//! `AgentId` to slot, so insert and relocate are O(1) and a query is one
//! linear pass.  At a few hundred agents this beats any tree on constant
//! factors.

use rustc_hash::FxHashMap;

use ff_core::{AgentId, Point};

use crate::index::check_query_radius;
use crate::{NeighborIndex, SpatialError, SpatialResult};

/// Linear-scan implementation of [`NeighborIndex`].
#[derive(Debug, Default, Clone)]
pub struct ScanIndex {
    entries: Vec<(AgentId, Point)>,
    slot:    FxHashMap<AgentId, usize>,
}

impl ScanIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected population size.
    pub fn with_capacity(n: usize) -> Self {
        let mut slot = FxHashMap::default();
        slot.reserve(n);
        Self { entries: Vec::with_capacity(n), slot }
    }
}

impl NeighborIndex for ScanIndex {
    fn insert(&mut self, agent: AgentId, pos: Point) -> SpatialResult<()> {
        let pos = pos.validated()?;
        if self.slot.contains_key(&agent) {
            return Err(SpatialError::AlreadyRegistered(agent));
        }
        self.slot.insert(agent, self.entries.len());
        self.entries.push((agent, pos));
        Ok(())
    }

    fn relocate(&mut self, agent: AgentId, pos: Point) -> SpatialResult<()> {
        let pos = pos.validated()?;
        let &i = self.slot.get(&agent).ok_or(SpatialError::AgentNotFound(agent))?;
        self.entries[i].1 = pos;
        Ok(())
    }

    fn position(&self, agent: AgentId) -> Option<Point> {
        self.slot.get(&agent).map(|&i| self.entries[i].1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn neighbors_within(
        &self,
        origin:  Point,
        radius:  f64,
        exclude: Option<AgentId>,
    ) -> SpatialResult<Vec<AgentId>> {
        check_query_radius(radius)?;
        let mut found: Vec<AgentId> = self
            .entries
            .iter()
            .filter(|&&(id, pos)| Some(id) != exclude && origin.within(pos, radius))
            .map(|&(id, _)| id)
            .collect();
        found.sort_unstable();
        Ok(found)
    }
}
