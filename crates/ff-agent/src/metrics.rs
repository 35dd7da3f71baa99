//! Regional metrics aggregation.
//!
//! A surveyor's neighbor snapshot is reduced to three counts (customer flow,
//! nearby stores, and their summed cumulative exposure) and then to two
//! derived rates:
//!
//! ```text
//! customer_density = customer_flow / (π · radius²)
//! business_heat    = customer_flow / store_count    if store_count > 0
//!                  = customer_flow                  otherwise
//! ```
//!
//! The heat fallback treats "no store nearby" as raw flow, not as zero.

use std::f64::consts::PI;

/// One surveyor reading.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Customers within the surveyor's radius.
    pub customer_flow: u64,
    /// Stores within the surveyor's radius.
    pub store_count: u64,
    /// Customers per unit area of the measurement disc.
    pub customer_density: f64,
    /// Sum of the cumulative exposure of every store in range.
    pub total_exposure: u64,
    /// Customers per nearby store, or raw flow when no store is in range.
    pub business_heat: f64,
}

impl Measurement {
    /// Derive a full measurement from the raw neighbor counts.
    pub fn aggregate(customer_flow: u64, store_count: u64, total_exposure: u64, radius: f64) -> Self {
        Self {
            customer_flow,
            store_count,
            customer_density: customer_density(customer_flow, radius),
            total_exposure,
            business_heat: business_heat(customer_flow, store_count),
        }
    }
}

/// Area of the closed disc of `radius`.
#[inline]
pub fn disc_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Customers per unit area.  Returns `0.0` when the area is not a positive
/// finite number; radii are validated at creation so this only guards
/// externally built values.
pub fn customer_density(customer_flow: u64, radius: f64) -> f64 {
    let area = disc_area(radius);
    if area.is_finite() && area > 0.0 {
        customer_flow as f64 / area
    } else {
        0.0
    }
}

/// Customers per nearby store, falling back to raw flow with no store in range.
pub fn business_heat(customer_flow: u64, store_count: u64) -> f64 {
    if store_count > 0 {
        customer_flow as f64 / store_count as f64
    } else {
        customer_flow as f64
    }
}
