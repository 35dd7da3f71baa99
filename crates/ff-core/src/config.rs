//! Model configuration.
//!
//! Typically built in code by the driver or loaded from JSON (with the
//! `serde` feature) and handed to the model builder.  Counts are unsigned,
//! so a negative population is unrepresentable rather than a runtime error.

use crate::error::validate_radius;
use crate::{Bounds, FfError, FfResult};

/// Influence radius of a store when the configuration does not override it.
pub const DEFAULT_STORE_RADIUS: f64 = 4.0;

/// Measurement radius of a surveyor when the configuration does not override it.
pub const DEFAULT_SURVEY_RADIUS: f64 = 6.0;

/// Everything needed to construct a model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Number of mobile (customer) agents.
    pub customer_count: usize,

    /// Number of attractor (store) agents.
    pub store_count: usize,

    /// Number of surveyor agents.
    pub surveyor_count: usize,

    /// Plane width.  Must be positive and finite.
    pub width: f64,

    /// Plane height.  Must be positive and finite.
    pub height: f64,

    /// Master RNG seed.  `None` draws one at build time; the drawn value is
    /// reported by the model so the run can be reproduced.
    pub seed: Option<u64>,

    /// Influence radius given to every store.
    pub store_radius: f64,

    /// Measurement radius given to every surveyor.
    pub survey_radius: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            customer_count: 50,
            store_count:    3,
            surveyor_count: 2,
            width:          20.0,
            height:         20.0,
            seed:           None,
            store_radius:   DEFAULT_STORE_RADIUS,
            survey_radius:  DEFAULT_SURVEY_RADIUS,
        }
    }
}

impl ModelConfig {
    /// Check every field and return the plane the model will run on.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` for a width/height outside
    ///   `(0, MAX_EXTENT]`, or more agents than `AgentId` can number.
    /// - `InvalidRadius` for a non-positive or non-finite store/survey radius.
    pub fn validate(&self) -> FfResult<Bounds> {
        let bounds = Bounds::new(self.width, self.height)?;
        self.agent_count()?;
        validate_radius(self.store_radius)?;
        validate_radius(self.survey_radius)?;
        Ok(bounds)
    }

    /// Total number of agents the model will hold.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the total overflows or exceeds the
    /// `u32` id space.
    pub fn agent_count(&self) -> FfResult<usize> {
        self.customer_count
            .checked_add(self.store_count)
            .and_then(|n| n.checked_add(self.surveyor_count))
            .filter(|&n| n <= u32::MAX as usize)
            .ok_or_else(|| {
                FfError::InvalidConfiguration(format!(
                    "{} customers + {} stores + {} surveyors exceeds {} agents",
                    self.customer_count,
                    self.store_count,
                    self.surveyor_count,
                    u32::MAX
                ))
            })
    }
}
