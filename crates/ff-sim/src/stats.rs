//! Read-only statistics views handed to reporting layers.

use std::collections::BTreeMap;

use ff_agent::{Measurement, Population};
use ff_core::Point;

/// Exposure summary of one store.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreStats {
    pub cumulative_exposure: u64,
    pub position:            Point,
    pub radius:              f64,
}

/// Store name → summary.
pub type StoreStatistics = BTreeMap<String, StoreStats>;

/// Surveyor name → latest measurement (`None` before the first tick).
pub type SurveyResults = BTreeMap<String, Option<Measurement>>;

pub fn store_statistics(population: &Population) -> StoreStatistics {
    population
        .stores()
        .map(|(agent, store)| {
            let stats = StoreStats {
                cumulative_exposure: store.cumulative_exposure(),
                position:            agent.position(),
                radius:              store.radius(),
            };
            (agent.name().to_owned(), stats)
        })
        .collect()
}

pub fn survey_results(population: &Population) -> SurveyResults {
    population
        .surveyors()
        .map(|(agent, surveyor)| (agent.name().to_owned(), surveyor.latest().copied()))
        .collect()
}

/// Stores ordered by cumulative exposure, highest first; ties keep creation
/// order, so `Store 2` ranks ahead of `Store 10`.
pub fn exposure_ranking(population: &Population) -> Vec<(String, u64)> {
    let mut ranking: Vec<(String, u64)> = population
        .stores()
        .map(|(agent, store)| (agent.name().to_owned(), store.cumulative_exposure()))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking
}
