//! Attractor exposure counting.

use ff_agent::{AgentKind, Population};
use ff_core::AgentId;
use ff_spatial::NeighborIndex;
use tracing::trace;

use crate::BehaviorResult;

/// Count the customers within `store`'s radius, append the count to its
/// per-tick log, and mark the store in each such customer's visit set.
///
/// Returns the count recorded this tick.
pub fn record_exposure<I: NeighborIndex>(
    store:      AgentId,
    population: &mut Population,
    index:      &I,
) -> BehaviorResult<u64> {
    let origin = population.get(store)?.position();
    let radius = population.store(store)?.radius();

    let mut customers = Vec::new();
    for id in index.neighbors_within(origin, radius, Some(store))? {
        if population.kind(id)? == AgentKind::Mobile {
            customers.push(id);
        }
    }

    let count = customers.len() as u64;
    population.store_mut(store)?.record_tick(count);

    for customer in customers {
        if population.record_visit(customer, store)? {
            trace!(%customer, %store, "first visit");
        }
    }
    Ok(count)
}
