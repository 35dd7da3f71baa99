//! Kind-tag dispatch.

use ff_agent::{AgentKind, Measurement};
use ff_core::{AgentId, Point};
use ff_spatial::NeighborIndex;
use tracing::trace;

use crate::{BehaviorResult, StepContext, measure, record_exposure, step_customer};

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// A customer walked from one point to another (possibly the same one).
    Moved { from: Point, to: Point },
    /// A store counted `customers` in range this tick.
    Exposed { customers: u64 },
    /// A surveyor appended this reading.
    Measured(Measurement),
}

/// Run `agent`'s step for the current tick.
pub fn step_agent<I: NeighborIndex>(
    agent: AgentId,
    ctx:   &mut StepContext<'_, I>,
) -> BehaviorResult<StepOutcome> {
    let kind = ctx.population.kind(agent)?;
    trace!(tick = ctx.tick.0, %agent, %kind, "step");
    match kind {
        AgentKind::Mobile => {
            let (from, to) = step_customer(agent, ctx)?;
            Ok(StepOutcome::Moved { from, to })
        }
        AgentKind::Attractor => {
            let customers = record_exposure(agent, ctx.population, &*ctx.index)?;
            Ok(StepOutcome::Exposed { customers })
        }
        AgentKind::Surveyor => {
            let m = measure(agent, ctx.population, &*ctx.index)?;
            Ok(StepOutcome::Measured(m))
        }
    }
}
