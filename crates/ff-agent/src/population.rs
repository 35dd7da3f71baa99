//! Population storage.
//!
//! # Layout
//!
//! Agents live in one `Vec<Agent>` where `agents[i].id() == AgentId(i)`.
//! Ids are handed out by the `add_*` methods in creation order, so lookup by
//! id is a bounds-checked index.
//!
//! # Mutation rules
//!
//! Every write goes through a kind-checked method:
//!
//! - a customer moves only via [`Population::relocate_customer`];
//! - store counters change only via [`Population::store_mut`];
//! - surveyor history grows only via [`Population::surveyor_mut`];
//! - [`Population::record_visit`] is the one write that crosses agent
//!   boundaries: a store marks itself in a customer's visit set.  It cannot
//!   target a store or a surveyor.

use ff_core::{AgentId, FfError, FfResult, Point};

use crate::{Agent, AgentKind, Role, Store, Surveyor};

/// Number of agents per kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationCounts {
    pub customers: usize,
    pub stores:    usize,
    pub surveyors: usize,
}

/// Every agent of a model, indexed by `AgentId`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { agents: Vec::with_capacity(n) }
    }

    // ── Construction ──────────────────────────────────────────────────────

    fn next_id(&self) -> FfResult<AgentId> {
        AgentId::try_from(self.agents.len()).map_err(|_| {
            FfError::InvalidConfiguration("population exceeds u32::MAX agents".into())
        })
    }

    pub fn add_customer(&mut self, name: impl Into<String>, position: Point) -> FfResult<AgentId> {
        let id = self.next_id()?;
        self.agents.push(Agent::customer(id, name, position)?);
        Ok(id)
    }

    /// # Errors
    ///
    /// `InvalidRadius` unless `radius` is positive and finite; nothing is
    /// added on error.
    pub fn add_store(
        &mut self,
        name:     impl Into<String>,
        position: Point,
        radius:   f64,
    ) -> FfResult<AgentId> {
        let id = self.next_id()?;
        self.agents.push(Agent::store(id, name, position, radius)?);
        Ok(id)
    }

    /// # Errors
    ///
    /// `InvalidRadius` unless `radius` is positive and finite; nothing is
    /// added on error.
    pub fn add_surveyor(
        &mut self,
        name:     impl Into<String>,
        position: Point,
        radius:   f64,
    ) -> FfResult<AgentId> {
        let id = self.next_id()?;
        self.agents.push(Agent::surveyor(id, name, position, radius)?);
        Ok(id)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> FfResult<&Agent> {
        self.agents.get(id.index()).ok_or(FfError::AgentNotFound(id))
    }

    #[inline]
    pub fn kind(&self, id: AgentId) -> FfResult<AgentKind> {
        self.get(id).map(Agent::kind)
    }

    /// All agents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Stores with their header, in id order.
    pub fn stores(&self) -> impl Iterator<Item = (&Agent, &Store)> + '_ {
        self.agents.iter().filter_map(|a| a.as_store().map(|s| (a, s)))
    }

    /// Surveyors with their header, in id order.
    pub fn surveyors(&self) -> impl Iterator<Item = (&Agent, &Surveyor)> + '_ {
        self.agents.iter().filter_map(|a| a.as_surveyor().map(|s| (a, s)))
    }

    /// Customers in id order.
    pub fn customers(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(|a| a.kind() == AgentKind::Mobile)
    }

    /// Store state of `id`.
    ///
    /// # Errors
    ///
    /// `AgentNotFound`, or `WrongKind` if `id` is not an attractor.
    pub fn store(&self, id: AgentId) -> FfResult<&Store> {
        let agent = self.get(id)?;
        agent
            .as_store()
            .ok_or_else(|| wrong_kind(id, AgentKind::Attractor, agent.kind()))
    }

    /// Surveyor state of `id`.
    ///
    /// # Errors
    ///
    /// `AgentNotFound`, or `WrongKind` if `id` is not a surveyor.
    pub fn surveyor(&self, id: AgentId) -> FfResult<&Surveyor> {
        let agent = self.get(id)?;
        agent
            .as_surveyor()
            .ok_or_else(|| wrong_kind(id, AgentKind::Surveyor, agent.kind()))
    }

    pub fn counts(&self) -> PopulationCounts {
        let mut counts = PopulationCounts::default();
        for agent in &self.agents {
            match agent.kind() {
                AgentKind::Mobile    => counts.customers += 1,
                AgentKind::Attractor => counts.stores += 1,
                AgentKind::Surveyor  => counts.surveyors += 1,
            }
        }
        counts
    }

    // ── Kind-checked mutation ─────────────────────────────────────────────

    fn get_mut(&mut self, id: AgentId) -> FfResult<&mut Agent> {
        self.agents.get_mut(id.index()).ok_or(FfError::AgentNotFound(id))
    }

    /// Move a customer.  The caller is responsible for clamping `position`
    /// into the plane.
    pub fn relocate_customer(&mut self, id: AgentId, position: Point) -> FfResult<()> {
        let position = position.validated()?;
        let agent = self.get_mut(id)?;
        expect_kind(agent, AgentKind::Mobile)?;
        agent.set_position(position);
        Ok(())
    }

    /// Mark `store` in `customer`'s visit set.
    ///
    /// Returns `true` if this was the customer's first visit to `store`.
    ///
    /// # Errors
    ///
    /// `WrongKind` unless `customer` is mobile and `store` is an attractor.
    pub fn record_visit(&mut self, customer: AgentId, store: AgentId) -> FfResult<bool> {
        expect_kind(self.get(store)?, AgentKind::Attractor)?;
        let agent = self.get_mut(customer)?;
        let kind = agent.kind();
        match agent.role_mut() {
            Role::Mobile(c) => Ok(c.visit(store)),
            _ => Err(wrong_kind(customer, AgentKind::Mobile, kind)),
        }
    }

    pub fn store_mut(&mut self, id: AgentId) -> FfResult<&mut Store> {
        let agent = self.get_mut(id)?;
        let kind = agent.kind();
        match agent.role_mut() {
            Role::Attractor(s) => Ok(s),
            _ => Err(wrong_kind(id, AgentKind::Attractor, kind)),
        }
    }

    pub fn surveyor_mut(&mut self, id: AgentId) -> FfResult<&mut Surveyor> {
        let agent = self.get_mut(id)?;
        let kind = agent.kind();
        match agent.role_mut() {
            Role::Surveyor(s) => Ok(s),
            _ => Err(wrong_kind(id, AgentKind::Surveyor, kind)),
        }
    }
}

fn wrong_kind(agent: AgentId, expected: AgentKind, actual: AgentKind) -> FfError {
    FfError::WrongKind { agent, expected: expected.as_str(), actual: actual.as_str() }
}

fn expect_kind(agent: &Agent, expected: AgentKind) -> FfResult<()> {
    if agent.kind() == expected {
        Ok(())
    } else {
        Err(wrong_kind(agent.id(), expected, agent.kind()))
    }
}
