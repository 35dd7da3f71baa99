//! Planar coordinates and the bounded simulation plane.
//!
//! The plane is an abstract `[0, width] × [0, height]` rectangle, not a
//! geographic projection, so distances are plain Euclidean and stored as
//! `f64`.

use std::fmt;

use crate::{FfError, FfResult};

/// A position on the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Radius tests compare against `r * r` so
    /// the hot path never takes a square root.
    #[inline]
    pub fn distance_2(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_2(other).sqrt()
    }

    /// `true` if `other` lies inside the closed disc of `radius` around `self`.
    #[inline]
    pub fn within(self, other: Point, radius: f64) -> bool {
        self.distance_2(other) <= radius * radius
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Reject NaN / infinite coordinates.
    pub fn validated(self) -> FfResult<Point> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(FfError::NonFinitePosition { x: self.x, y: self.y })
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Largest accepted plane extent.  Keeps every derived coordinate (slots,
/// quartiles, a walk step past the edge) and every sampling span finite.
pub const MAX_EXTENT: f64 = f64::MAX / 4.0;

/// The closed rectangle `[0, width] × [0, height]` every agent lives in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width:  f64,
    pub height: f64,
}

impl Bounds {
    /// Build a plane, rejecting non-positive, non-finite, or oversized
    /// extents (above [`MAX_EXTENT`]).
    pub fn new(width: f64, height: f64) -> FfResult<Self> {
        Ok(Self { width: check_extent("width", width)?, height: check_extent("height", height)? })
    }

    /// Clamp each coordinate independently into the plane.
    #[inline]
    pub fn clamp(self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0.0, self.width),
            y: p.y.clamp(0.0, self.height),
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

fn check_extent(axis: &str, value: f64) -> FfResult<f64> {
    if value > 0.0 && value <= MAX_EXTENT {
        Ok(value)
    } else {
        Err(FfError::InvalidConfiguration(format!(
            "{axis} must be in (0, {MAX_EXTENT:e}], got {value}"
        )))
    }
}
