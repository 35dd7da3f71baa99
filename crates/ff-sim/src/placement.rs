//! Initial agent placement.
//!
//! # Layout
//!
//! ```text
//! customers  uniform over the whole plane
//! stores     slots (w/2 - 3, h/2), (w/2, h/2), (w/2 + 3, h/2)
//! surveyors  slots (w/4, h/4), (3w/4, 3h/4)
//! overflow   stores / surveyors past their slots: uniform over the
//!            central half [w/4, 3w/4] × [h/4, 3h/4]
//! ```
//!
//! Slots are clamped into the plane, so a plane narrower than 6 units pulls
//! the outer store slots onto its edges instead of off the map.
//!
//! RNG draws happen in creation order (customers, then overflow stores, then
//! overflow surveyors; `x` before `y`), which ids also follow.

use ff_agent::Population;
use ff_core::{Bounds, FfResult, ModelConfig, Point, SimRng};

/// Horizontal spacing between neighboring store slots.
pub const STORE_SLOT_SPACING: f64 = 3.0;

/// Fixed store positions along the horizontal midline.
pub fn store_slots(bounds: Bounds) -> [Point; 3] {
    let c = bounds.center();
    [
        Point::new(c.x - STORE_SLOT_SPACING, c.y),
        Point::new(c.x, c.y),
        Point::new(c.x + STORE_SLOT_SPACING, c.y),
    ]
    .map(|p| bounds.clamp(p))
}

/// Fixed surveyor positions at the upper-left and lower-right quartile points.
pub fn surveyor_slots(bounds: Bounds) -> [Point; 2] {
    let (w, h) = (bounds.width, bounds.height);
    [Point::new(w * 0.25, h * 0.25), Point::new(w * 0.75, h * 0.75)]
}

fn anywhere(bounds: Bounds, rng: &mut SimRng) -> Point {
    let x = rng.uniform(0.0, bounds.width);
    let y = rng.uniform(0.0, bounds.height);
    Point::new(x, y)
}

fn central_half(bounds: Bounds, rng: &mut SimRng) -> Point {
    let (w, h) = (bounds.width, bounds.height);
    let x = rng.uniform(w * 0.25, w * 0.75);
    let y = rng.uniform(h * 0.25, h * 0.75);
    Point::new(x, y)
}

/// Create and place every agent named by `config`.
///
/// Names: `customer_{i}` (0-based), `Store {n}` and `Survey {n}` (1-based).
pub fn place_population(
    config: &ModelConfig,
    bounds: Bounds,
    rng:    &mut SimRng,
) -> FfResult<Population> {
    let mut population = Population::with_capacity(config.agent_count()?);

    for i in 0..config.customer_count {
        population.add_customer(format!("customer_{i}"), anywhere(bounds, rng))?;
    }

    let slots = store_slots(bounds);
    for i in 0..config.store_count {
        let pos = match slots.get(i) {
            Some(&slot) => slot,
            None => central_half(bounds, rng),
        };
        population.add_store(format!("Store {}", i + 1), pos, config.store_radius)?;
    }

    let slots = surveyor_slots(bounds);
    for i in 0..config.surveyor_count {
        let pos = match slots.get(i) {
            Some(&slot) => slot,
            None => central_half(bounds, rng),
        };
        population.add_surveyor(format!("Survey {}", i + 1), pos, config.survey_radius)?;
    }

    Ok(population)
}
