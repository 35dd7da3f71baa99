//! R-tree backed neighbor index.
//!
//! # Layout
//!
//! An `rstar::RTree` holds one [`AgentEntry`] per agent; a side map keeps the
//! current position of each id so a relocation can remove the stale entry by
//! value before inserting the new one.  Queries use
//! `locate_within_distance`, whose squared-radius test is inclusive, which
//! matches the closed-disc contract of [`NeighborIndex`].

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use ff_core::{AgentId, Point};

use crate::index::check_query_radius;
use crate::{NeighborIndex, SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point with its owner.
#[derive(Clone, Debug, PartialEq)]
struct AgentEntry {
    point: [f64; 2],
    id:    AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RTreeIndex ────────────────────────────────────────────────────────────────

/// R-tree implementation of [`NeighborIndex`].
#[derive(Default)]
pub struct RTreeIndex {
    tree:      RTree<AgentEntry>,
    positions: FxHashMap<AgentId, Point>,
}

impl RTreeIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NeighborIndex for RTreeIndex {
    fn insert(&mut self, agent: AgentId, pos: Point) -> SpatialResult<()> {
        let pos = pos.validated()?;
        if self.positions.contains_key(&agent) {
            return Err(SpatialError::AlreadyRegistered(agent));
        }
        self.positions.insert(agent, pos);
        self.tree.insert(AgentEntry { point: [pos.x, pos.y], id: agent });
        Ok(())
    }

    fn relocate(&mut self, agent: AgentId, pos: Point) -> SpatialResult<()> {
        let pos = pos.validated()?;
        let old = self
            .positions
            .get_mut(&agent)
            .ok_or(SpatialError::AgentNotFound(agent))?;
        if *old == pos {
            return Ok(());
        }
        let stale = AgentEntry { point: [old.x, old.y], id: agent };
        *old = pos;
        self.tree.remove(&stale);
        self.tree.insert(AgentEntry { point: [pos.x, pos.y], id: agent });
        Ok(())
    }

    fn position(&self, agent: AgentId) -> Option<Point> {
        self.positions.get(&agent).copied()
    }

    fn len(&self) -> usize {
        self.positions.len()
    }

    fn neighbors_within(
        &self,
        origin:  Point,
        radius:  f64,
        exclude: Option<AgentId>,
    ) -> SpatialResult<Vec<AgentId>> {
        check_query_radius(radius)?;
        let mut found: Vec<AgentId> = self
            .tree
            .locate_within_distance([origin.x, origin.y], radius * radius)
            .map(|e| e.id)
            .filter(|&id| Some(id) != exclude)
            .collect();
        found.sort_unstable();
        Ok(found)
    }
}
