//! Surveyor measurement.

use ff_agent::{AgentKind, Measurement, Population};
use ff_core::AgentId;
use ff_spatial::NeighborIndex;

use crate::BehaviorResult;

/// Take one reading around `surveyor`, append it to the surveyor's history,
/// and return it.
///
/// Tallies customers and stores in range and sums the stores' cumulative
/// exposure as it stands at this instant, so stores that already stepped
/// this tick contribute their updated totals.  Nothing but the surveyor's
/// own history is written.
pub fn measure<I: NeighborIndex>(
    surveyor:   AgentId,
    population: &mut Population,
    index:      &I,
) -> BehaviorResult<Measurement> {
    let origin = population.get(surveyor)?.position();
    let radius = population.surveyor(surveyor)?.radius();

    let mut customer_flow = 0u64;
    let mut store_count = 0u64;
    let mut total_exposure = 0u64;
    for id in index.neighbors_within(origin, radius, Some(surveyor))? {
        match population.kind(id)? {
            AgentKind::Mobile => customer_flow += 1,
            AgentKind::Attractor => {
                store_count += 1;
                total_exposure += population.store(id)?.cumulative_exposure();
            }
            AgentKind::Surveyor => {}
        }
    }

    let measurement = Measurement::aggregate(customer_flow, store_count, total_exposure, radius);
    population.surveyor_mut(surveyor)?.record(measurement);
    Ok(measurement)
}
