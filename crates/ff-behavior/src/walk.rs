//! Mobile-agent random walk.

use ff_core::{AgentId, Bounds, Point, SimRng};
use ff_spatial::NeighborIndex;

use crate::{BehaviorResult, StepContext};

/// One lattice step: `dx` and `dy` drawn independently and uniformly from
/// `{-1, 0, 1}`, the result clamped into `bounds`.
///
/// `x` is drawn before `y`, which fixes the RNG consumption order for
/// reproducible runs.
pub fn random_walk(position: Point, bounds: Bounds, rng: &mut SimRng) -> Point {
    let dx = rng.gen_range(-1i32..=1);
    let dy = rng.gen_range(-1i32..=1);
    bounds.clamp(Point::new(position.x + f64::from(dx), position.y + f64::from(dy)))
}

/// Step a customer: walk, then commit the new position to the index and the
/// population.  Returns `(from, to)`.
///
/// On error both still hold `from`: the index move is undone if the
/// population rejects the new position.
pub fn step_customer<I: NeighborIndex>(
    agent: AgentId,
    ctx:   &mut StepContext<'_, I>,
) -> BehaviorResult<(Point, Point)> {
    let from = ctx.population.get(agent)?.position();
    let to = random_walk(from, ctx.bounds, ctx.rng);
    ctx.index.relocate(agent, to)?;
    if let Err(e) = ctx.population.relocate_customer(agent, to) {
        ctx.index.relocate(agent, from)?;
        return Err(e.into());
    }
    Ok((from, to))
}
