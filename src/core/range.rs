//! Price ranges and display domains
//!
//! `PriceRange` is the active band of a liquidity position and is strictly
//! positive. `PriceDomain` is a sampling window for curves and may start at
//! zero.

use serde::Serialize;

use super::error::{ensure_finite, ensure_positive, HedgeError, HedgeResult};

/// Active price band of a concentrated-liquidity position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    lower: f64,
    upper: f64,
}

impl PriceRange {
    /// Validate and build a range. `lower < upper`, both positive.
    pub fn new(lower: f64, upper: f64) -> HedgeResult<Self> {
        ensure_positive("range lower bound", lower)?;
        ensure_positive("range upper bound", upper)?;
        if lower >= upper {
            return Err(HedgeError::validation(
                "price range",
                format!("lower bound {} must be strictly below upper bound {}", lower, upper),
            ));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Geometric mean of the bounds: K = sqrt(lower * upper)
    pub fn geometric_mean(&self) -> f64 {
        (self.lower * self.upper).sqrt()
    }

    /// Range ratio: r = sqrt(upper / lower), always > 1
    pub fn ratio(&self) -> f64 {
        (self.upper / self.lower).sqrt()
    }

    /// Inclusive membership test
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower && price <= self.upper
    }

    /// Strict interior test
    pub fn strictly_contains(&self, price: f64) -> bool {
        price > self.lower && price < self.upper
    }
}

/// Sampling window for a value curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceDomain {
    low: f64,
    high: f64,
}

impl PriceDomain {
    pub fn new(low: f64, high: f64) -> HedgeResult<Self> {
        ensure_finite("domain low", low)?;
        ensure_finite("domain high", high)?;
        if low < 0.0 || low >= high {
            return Err(HedgeError::InvalidDomain { low, high });
        }
        Ok(Self { low, high })
    }

    /// Smallest domain covering both inputs
    pub fn union(&self, other: &PriceDomain) -> HedgeResult<Self> {
        Self::new(self.low.min(other.low), self.high.max(other.high))
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}
