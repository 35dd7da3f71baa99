//! Agent variants.
//!
//! An [`Agent`] is the shared header (id, name, position) plus a [`Role`]
//! carrying the kind-specific state.  Positions of stores and surveyors are
//! fixed at creation; only a customer's position ever changes, and only
//! through [`Population::relocate_customer`](crate::Population::relocate_customer).

use std::collections::BTreeSet;
use std::fmt;

use ff_core::error::validate_radius;
use ff_core::{AgentId, FfResult, Point};

use crate::Measurement;

// ── AgentKind ─────────────────────────────────────────────────────────────────

/// Discriminator of the three agent variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    /// A customer performing a random walk.
    Mobile,
    /// A store counting nearby customers.
    Attractor,
    /// A survey point aggregating regional metrics.
    Surveyor,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Mobile    => "mobile",
            AgentKind::Attractor => "attractor",
            AgentKind::Surveyor  => "surveyor",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Per-kind state ────────────────────────────────────────────────────────────

/// State of a mobile agent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    visited: BTreeSet<AgentId>,
}

impl Customer {
    /// Ids of every store whose radius this customer has entered.
    pub fn visited(&self) -> &BTreeSet<AgentId> {
        &self.visited
    }

    pub fn has_visited(&self, store: AgentId) -> bool {
        self.visited.contains(&store)
    }

    /// Record a visit.  Returns `true` the first time `store` is seen;
    /// re-entry is a no-op.
    pub(crate) fn visit(&mut self, store: AgentId) -> bool {
        self.visited.insert(store)
    }
}

/// State of an attractor agent.
///
/// `cumulative_exposure` always equals the sum of `per_tick_exposure`; both
/// only change through [`Store::record_tick`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Store {
    radius:              f64,
    cumulative_exposure: u64,
    per_tick_exposure:   Vec<u64>,
}

impl Store {
    fn new(radius: f64) -> Self {
        Self { radius, cumulative_exposure: 0, per_tick_exposure: Vec::new() }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn cumulative_exposure(&self) -> u64 {
        self.cumulative_exposure
    }

    /// One entry per tick this store has stepped.
    pub fn per_tick_exposure(&self) -> &[u64] {
        &self.per_tick_exposure
    }

    /// Append this tick's customer count and fold it into the running total.
    pub fn record_tick(&mut self, customers: u64) {
        self.per_tick_exposure.push(customers);
        self.cumulative_exposure += customers;
    }
}

/// State of a surveyor agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surveyor {
    radius:  f64,
    history: Vec<Measurement>,
}

impl Surveyor {
    fn new(radius: f64) -> Self {
        Self { radius, history: Vec::new() }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Every measurement taken, oldest first.
    pub fn history(&self) -> &[Measurement] {
        &self.history
    }

    /// Most recent measurement, `None` before the first tick.
    pub fn latest(&self) -> Option<&Measurement> {
        self.history.last()
    }

    pub fn record(&mut self, measurement: Measurement) {
        self.history.push(measurement);
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Kind-specific half of an [`Agent`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Mobile(Customer),
    Attractor(Store),
    Surveyor(Surveyor),
}

/// One member of the population.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id:       AgentId,
    name:     String,
    position: Point,
    role:     Role,
}

impl Agent {
    pub fn customer(id: AgentId, name: impl Into<String>, position: Point) -> FfResult<Self> {
        Ok(Self {
            id,
            name: name.into(),
            position: position.validated()?,
            role: Role::Mobile(Customer::default()),
        })
    }

    /// # Errors
    ///
    /// `InvalidRadius` unless `radius` is positive and finite.
    pub fn store(
        id:       AgentId,
        name:     impl Into<String>,
        position: Point,
        radius:   f64,
    ) -> FfResult<Self> {
        let radius = validate_radius(radius)?;
        Ok(Self {
            id,
            name: name.into(),
            position: position.validated()?,
            role: Role::Attractor(Store::new(radius)),
        })
    }

    /// # Errors
    ///
    /// `InvalidRadius` unless `radius` is positive and finite.
    pub fn surveyor(
        id:       AgentId,
        name:     impl Into<String>,
        position: Point,
        radius:   f64,
    ) -> FfResult<Self> {
        let radius = validate_radius(radius)?;
        Ok(Self {
            id,
            name: name.into(),
            position: position.validated()?,
            role: Role::Surveyor(Surveyor::new(radius)),
        })
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn kind(&self) -> AgentKind {
        match self.role {
            Role::Mobile(_)    => AgentKind::Mobile,
            Role::Attractor(_) => AgentKind::Attractor,
            Role::Surveyor(_)  => AgentKind::Surveyor,
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Influence / measurement radius.  `None` for customers.
    pub fn radius(&self) -> Option<f64> {
        match &self.role {
            Role::Mobile(_)    => None,
            Role::Attractor(s) => Some(s.radius),
            Role::Surveyor(s)  => Some(s.radius),
        }
    }

    pub fn as_customer(&self) -> Option<&Customer> {
        match &self.role {
            Role::Mobile(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_store(&self) -> Option<&Store> {
        match &self.role {
            Role::Attractor(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_surveyor(&self) -> Option<&Surveyor> {
        match &self.role {
            Role::Surveyor(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
