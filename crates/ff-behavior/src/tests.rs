//! Unit tests for ff-behavior.

use ff_agent::Population;
use ff_core::{AgentId, Bounds, Point, SimRng, Tick};
use ff_spatial::{NeighborIndex, ScanIndex};

use crate::StepContext;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plane() -> Bounds {
    Bounds::new(10.0, 10.0).unwrap()
}

/// Register every agent of `pop` in a fresh index.
fn index_of(pop: &Population) -> ScanIndex {
    let mut index = ScanIndex::new();
    for agent in pop.iter() {
        index.insert(agent.id(), agent.position()).unwrap();
    }
    index
}

// ── Random walk ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod walk_tests {
    use super::*;
    use ff_core::FfError;
    use ff_spatial::SpatialError;

    use crate::{BehaviorError, random_walk, step_customer};

    #[test]
    fn moves_at_most_one_unit_per_axis() {
        let mut rng = SimRng::new(9);
        let start = Point::new(5.0, 5.0);
        for _ in 0..500 {
            let p = random_walk(start, plane(), &mut rng);
            let (dx, dy) = (p.x - start.x, p.y - start.y);
            assert!([-1.0, 0.0, 1.0].contains(&dx), "dx = {dx}");
            assert!([-1.0, 0.0, 1.0].contains(&dy), "dy = {dy}");
        }
    }

    #[test]
    fn all_nine_moves_occur() {
        let mut rng = SimRng::new(2);
        let start = Point::new(5.0, 5.0);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..1_000 {
            let p = random_walk(start, plane(), &mut rng);
            seen.insert(((p.x - start.x) as i32, (p.y - start.y) as i32));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn corners_stay_in_bounds() {
        let mut rng = SimRng::new(4);
        for corner in [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
        ] {
            let mut p = corner;
            for _ in 0..200 {
                p = random_walk(p, plane(), &mut rng);
                assert!(plane().contains(p), "{p} escaped the plane");
            }
        }
    }

    #[test]
    fn step_customer_updates_population_and_index() {
        let mut pop = Population::new();
        let id = pop.add_customer("customer_0", Point::new(0.0, 0.0)).unwrap();
        let mut index = index_of(&pop);
        let mut rng = SimRng::new(1);
        let mut ctx = StepContext::new(Tick(0), plane(), &mut pop, &mut index, &mut rng);

        let (from, to) = step_customer(id, &mut ctx).unwrap();
        assert_eq!(from, Point::new(0.0, 0.0));
        assert_eq!(ctx.population.get(id).unwrap().position(), to);
        assert_eq!(ctx.index.position(id), Some(to));
    }

    #[test]
    fn rejected_move_leaves_index_and_population_in_step() {
        let mut pop = Population::new();
        let store = pop.add_store("Store 1", Point::new(5.0, 5.0), 4.0).unwrap();
        let mut index = index_of(&pop);
        let mut rng = SimRng::new(3);
        let mut ctx = StepContext::new(Tick(0), plane(), &mut pop, &mut index, &mut rng);

        for _ in 0..20 {
            let err = step_customer(store, &mut ctx).unwrap_err();
            assert!(matches!(err, BehaviorError::Agent(FfError::WrongKind { .. })));
            assert_eq!(ctx.index.position(store), Some(Point::new(5.0, 5.0)));
            assert_eq!(ctx.population.get(store).unwrap().position(), Point::new(5.0, 5.0));
        }
    }

    #[test]
    fn unindexed_customer_is_not_moved() {
        let mut pop = Population::new();
        let id = pop.add_customer("customer_0", Point::new(2.0, 2.0)).unwrap();
        let mut index = ScanIndex::new();
        let mut rng = SimRng::new(1);
        let mut ctx = StepContext::new(Tick(0), plane(), &mut pop, &mut index, &mut rng);

        let err = step_customer(id, &mut ctx).unwrap_err();
        assert_eq!(err, BehaviorError::Spatial(SpatialError::AgentNotFound(id)));
        assert_eq!(ctx.population.get(id).unwrap().position(), Point::new(2.0, 2.0));
    }
}

// ── Exposure ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod exposure_tests {
    use super::*;
    use crate::record_exposure;

    /// Store at (5,5) r=4; customers at distance 1, 4 (edge) and 5 (out);
    /// a second store and a surveyor in range that must not be counted.
    fn scene() -> (Population, AgentId) {
        let mut pop = Population::new();
        pop.add_customer("customer_0", Point::new(6.0, 5.0)).unwrap();
        pop.add_customer("customer_1", Point::new(5.0, 9.0)).unwrap();
        pop.add_customer("customer_2", Point::new(0.0, 5.0)).unwrap();
        let store = pop.add_store("Store 1", Point::new(5.0, 5.0), 4.0).unwrap();
        pop.add_store("Store 2", Point::new(6.0, 6.0), 4.0).unwrap();
        pop.add_surveyor("Survey 1", Point::new(4.0, 4.0), 6.0).unwrap();
        (pop, store)
    }

    #[test]
    fn counts_only_customers_in_radius() {
        let (mut pop, store) = scene();
        let index = index_of(&pop);
        assert_eq!(record_exposure(store, &mut pop, &index).unwrap(), 2);

        let s = pop.store(store).unwrap();
        assert_eq!(s.per_tick_exposure(), &[2]);
        assert_eq!(s.cumulative_exposure(), 2);
    }

    #[test]
    fn marks_visits_on_customers_in_range() {
        let (mut pop, store) = scene();
        let index = index_of(&pop);
        record_exposure(store, &mut pop, &index).unwrap();

        let visited = |pop: &Population, i: u32| {
            pop.get(AgentId(i)).unwrap().as_customer().unwrap().has_visited(store)
        };
        assert!(visited(&pop, 0));
        assert!(visited(&pop, 1));
        assert!(!visited(&pop, 2));
    }

    #[test]
    fn re_entry_keeps_single_visit() {
        let (mut pop, store) = scene();
        let index = index_of(&pop);
        for _ in 0..5 {
            record_exposure(store, &mut pop, &index).unwrap();
        }
        let c = pop.get(AgentId(0)).unwrap().as_customer().unwrap();
        assert_eq!(c.visited().iter().filter(|&&s| s == store).count(), 1);

        let s = pop.store(store).unwrap();
        assert_eq!(s.per_tick_exposure(), &[2, 2, 2, 2, 2]);
        assert_eq!(s.cumulative_exposure(), 10);
    }

    #[test]
    fn rejects_non_store() {
        let (mut pop, _) = scene();
        let index = index_of(&pop);
        assert!(record_exposure(AgentId(0), &mut pop, &index).is_err());
    }
}

// ── Survey ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod survey_tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::{measure, record_exposure};

    /// Surveyor at (10,10) r=6 with `customers` customers on top of it and
    /// `stores` stores one unit away.
    fn crowd(customers: usize, stores: usize) -> (Population, AgentId) {
        let mut pop = Population::new();
        for i in 0..customers {
            pop.add_customer(format!("customer_{i}"), Point::new(10.0, 10.0)).unwrap();
        }
        for i in 0..stores {
            pop.add_store(format!("Store {}", i + 1), Point::new(11.0, 10.0), 4.0).unwrap();
        }
        // Out of range of the surveyor.
        pop.add_customer("far", Point::new(19.0, 19.0)).unwrap();
        let surveyor = pop.add_surveyor("Survey 1", Point::new(10.0, 10.0), 6.0).unwrap();
        (pop, surveyor)
    }

    #[test]
    fn heat_falls_back_to_flow() {
        let (mut pop, surveyor) = crowd(12, 0);
        let index = index_of(&pop);
        let m = measure(surveyor, &mut pop, &index).unwrap();
        assert_eq!(m.customer_flow, 12);
        assert_eq!(m.store_count, 0);
        assert_eq!(m.business_heat, 12.0);
        assert!((m.customer_density - 12.0 / (PI * 36.0)).abs() < 1e-12);
    }

    #[test]
    fn heat_divides_by_store_count() {
        let (mut pop, surveyor) = crowd(12, 3);
        let index = index_of(&pop);
        let m = measure(surveyor, &mut pop, &index).unwrap();
        assert_eq!(m.store_count, 3);
        assert_eq!(m.business_heat, 4.0);
    }

    #[test]
    fn total_exposure_sums_store_counters() {
        let (mut pop, surveyor) = crowd(2, 2);
        let index = index_of(&pop);
        let stores: Vec<AgentId> = pop.stores().map(|(a, _)| a.id()).collect();
        for &s in &stores {
            record_exposure(s, &mut pop, &index).unwrap(); // 2 each
        }
        record_exposure(stores[0], &mut pop, &index).unwrap(); // +2

        let m = measure(surveyor, &mut pop, &index).unwrap();
        assert_eq!(m.total_exposure, 6);
    }

    #[test]
    fn history_grows_one_per_measure() {
        let (mut pop, surveyor) = crowd(1, 1);
        let index = index_of(&pop);
        let first = measure(surveyor, &mut pop, &index).unwrap();
        measure(surveyor, &mut pop, &index).unwrap();
        let s = pop.surveyor(surveyor).unwrap();
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0], first);
    }

    #[test]
    fn no_store_state_is_written() {
        let (mut pop, surveyor) = crowd(3, 1);
        let index = index_of(&pop);
        measure(surveyor, &mut pop, &index).unwrap();
        let (_, store) = pop.stores().next().unwrap();
        assert!(store.per_tick_exposure().is_empty());
        assert!(pop.customers().all(|c| c.as_customer().unwrap().visited().is_empty()));
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;
    use crate::{StepOutcome, step_agent};

    #[test]
    fn each_kind_takes_its_own_path() {
        let mut pop = Population::new();
        let c = pop.add_customer("customer_0", Point::new(5.0, 5.0)).unwrap();
        let s = pop.add_store("Store 1", Point::new(5.0, 5.0), 4.0).unwrap();
        let v = pop.add_surveyor("Survey 1", Point::new(5.0, 5.0), 6.0).unwrap();
        let mut index = index_of(&pop);
        let mut rng = SimRng::new(3);
        let mut ctx = StepContext::new(Tick(0), plane(), &mut pop, &mut index, &mut rng);

        assert!(matches!(step_agent(c, &mut ctx).unwrap(), StepOutcome::Moved { .. }));
        assert_eq!(step_agent(s, &mut ctx).unwrap(), StepOutcome::Exposed { customers: 1 });
        match step_agent(v, &mut ctx).unwrap() {
            StepOutcome::Measured(m) => {
                assert_eq!(m.customer_flow, 1);
                assert_eq!(m.store_count, 1);
                assert_eq!(m.total_exposure, 1);
            }
            other => panic!("wrong outcome: {other:?}"),
        }
    }

    #[test]
    fn unknown_agent_is_an_error() {
        let mut pop = Population::new();
        let mut index = ScanIndex::new();
        let mut rng = SimRng::new(0);
        let mut ctx = StepContext::new(Tick(0), plane(), &mut pop, &mut index, &mut rng);
        assert!(step_agent(AgentId(0), &mut ctx).is_err());
    }
}
