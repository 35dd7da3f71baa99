//! Unit tests for ff-spatial.
//!
//! Every contract test runs against both index implementations.

#[cfg(test)]
mod helpers {
    use ff_core::{AgentId, Point};

    use crate::NeighborIndex;

    /// Agents on the x axis at 0, 3 and 5.
    pub fn line<I: NeighborIndex>(mut index: I) -> I {
        index.insert(AgentId(0), Point::new(0.0, 0.0)).unwrap();
        index.insert(AgentId(1), Point::new(3.0, 0.0)).unwrap();
        index.insert(AgentId(2), Point::new(5.0, 0.0)).unwrap();
        index
    }
}

#[cfg(test)]
mod contract {
    use ff_core::{AgentId, FfError, Point};

    use super::helpers::line;
    use crate::{NeighborIndex, RTreeIndex, ScanIndex, SpatialError};

    fn radius_four_includes_three_excludes_five<I: NeighborIndex>(index: I) {
        let index = line(index);
        let found = index
            .neighbors_within(Point::new(0.0, 0.0), 4.0, Some(AgentId(0)))
            .unwrap();
        assert_eq!(found, vec![AgentId(1)]);
    }

    fn origin_included_when_not_excluded<I: NeighborIndex>(index: I) {
        let index = line(index);
        let found = index.neighbors_within(Point::new(0.0, 0.0), 4.0, None).unwrap();
        assert_eq!(found, vec![AgentId(0), AgentId(1)]);
    }

    fn boundary_distance_is_inside<I: NeighborIndex>(index: I) {
        let index = line(index);
        let found = index
            .neighbors_within(Point::new(0.0, 0.0), 5.0, Some(AgentId(0)))
            .unwrap();
        assert_eq!(found, vec![AgentId(1), AgentId(2)]);
    }

    fn co_located_agents_are_neighbors<I: NeighborIndex>(mut index: I) {
        index.insert(AgentId(4), Point::new(1.0, 1.0)).unwrap();
        index.insert(AgentId(9), Point::new(1.0, 1.0)).unwrap();
        let found = index
            .neighbors_within(Point::new(1.0, 1.0), 0.0, Some(AgentId(4)))
            .unwrap();
        assert_eq!(found, vec![AgentId(9)]);
    }

    fn negative_radius_rejected<I: NeighborIndex>(index: I) {
        let index = line(index);
        let err = index
            .neighbors_within(Point::new(0.0, 0.0), -1.0, None)
            .unwrap_err();
        assert_eq!(err, SpatialError::InvalidQueryRadius(-1.0));
        assert!(index.neighbors_within(Point::new(0.0, 0.0), f64::NAN, None).is_err());
    }

    fn relocate_moves_agent<I: NeighborIndex>(index: I) {
        let mut index = line(index);
        index.relocate(AgentId(2), Point::new(1.0, 0.0)).unwrap();
        assert_eq!(index.position(AgentId(2)), Some(Point::new(1.0, 0.0)));
        let found = index
            .neighbors_within(Point::new(0.0, 0.0), 2.0, Some(AgentId(0)))
            .unwrap();
        assert_eq!(found, vec![AgentId(2)]);
        assert_eq!(index.len(), 3);
    }

    fn registration_errors<I: NeighborIndex>(index: I) {
        let mut index = line(index);
        assert_eq!(
            index.insert(AgentId(1), Point::new(9.0, 9.0)),
            Err(SpatialError::AlreadyRegistered(AgentId(1)))
        );
        assert_eq!(
            index.relocate(AgentId(77), Point::new(1.0, 1.0)),
            Err(SpatialError::AgentNotFound(AgentId(77)))
        );
        assert!(matches!(
            index.insert(AgentId(5), Point::new(f64::NAN, 0.0)),
            Err(SpatialError::Core(FfError::NonFinitePosition { .. }))
        ));
    }

    macro_rules! both_indexes {
        ($($name:ident),* $(,)?) => {
            mod scan {
                use super::*;
                $( #[test] fn $name() { super::$name(ScanIndex::new()); } )*
            }
            mod rtree {
                use super::*;
                $( #[test] fn $name() { super::$name(RTreeIndex::new()); } )*
            }
        };
    }

    both_indexes!(
        radius_four_includes_three_excludes_five,
        origin_included_when_not_excluded,
        boundary_distance_is_inside,
        co_located_agents_are_neighbors,
        negative_radius_rejected,
        relocate_moves_agent,
        registration_errors,
    );
}

// ── Cross-checks ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod equivalence {
    use ff_core::{AgentId, Point, SimRng};

    use crate::{NeighborIndex, RTreeIndex, ScanIndex};

    fn scatter(n: u32, seed: u64) -> Vec<(AgentId, Point)> {
        let mut rng = SimRng::new(seed);
        (0..n)
            .map(|i| (AgentId(i), Point::new(rng.uniform(0.0, 20.0), rng.uniform(0.0, 20.0))))
            .collect()
    }

    fn tree_of(agents: &[(AgentId, Point)]) -> RTreeIndex {
        let mut tree = RTreeIndex::new();
        for &(id, p) in agents {
            tree.insert(id, p).unwrap();
        }
        tree
    }

    #[test]
    fn scan_and_rtree_agree() {
        let agents = scatter(200, 3);
        let mut scan = ScanIndex::with_capacity(agents.len());
        for &(id, p) in &agents {
            scan.insert(id, p).unwrap();
        }
        let tree = tree_of(&agents);

        for &(id, p) in agents.iter().take(25) {
            for radius in [0.0, 1.5, 4.0, 6.0, 30.0] {
                assert_eq!(
                    scan.neighbors_within(p, radius, Some(id)).unwrap(),
                    tree.neighbors_within(p, radius, Some(id)).unwrap(),
                    "mismatch for {id} at radius {radius}"
                );
            }
        }
    }

    #[test]
    fn agree_after_relocations() {
        let agents = scatter(60, 11);
        let mut scan = ScanIndex::new();
        let mut tree = RTreeIndex::new();
        for &(id, p) in &agents {
            scan.insert(id, p).unwrap();
            tree.insert(id, p).unwrap();
        }
        let mut rng = SimRng::new(5);
        for &(id, p) in &agents {
            let moved = Point::new(p.x + rng.uniform(-1.0, 1.0), p.y + rng.uniform(-1.0, 1.0));
            scan.relocate(id, moved).unwrap();
            tree.relocate(id, moved).unwrap();
        }
        assert_eq!(tree.len(), agents.len());
        let centre = Point::new(10.0, 10.0);
        assert_eq!(
            scan.neighbors_within(centre, 5.0, None).unwrap(),
            tree.neighbors_within(centre, 5.0, None).unwrap()
        );
    }

    #[test]
    fn infinite_radius_returns_everyone_else() {
        let agents = scatter(10, 1);
        let tree = tree_of(&agents);
        let found = tree
            .neighbors_within(Point::new(0.0, 0.0), f64::INFINITY, Some(AgentId(0)))
            .unwrap();
        assert_eq!(found, (1..10).map(AgentId).collect::<Vec<_>>());
    }

}
