//! Sampled value curves

use ndarray::Array1;
use serde::Serialize;

use super::error::{HedgeError, HedgeResult};
use super::range::PriceDomain;

/// Minimum number of samples for a curve with both endpoints
pub const MIN_SAMPLES: usize = 2;

/// One sample of a value curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub price: f64,
    pub value: f64,
}

/// Ordered (price, value) samples, ascending in price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCurve {
    /// Display label (e.g. "LP Value")
    pub label: String,
    pub points: Vec<CurvePoint>,
}

impl ValueCurve {
    /// Evaluate `f` at every grid price
    pub fn sample(label: impl Into<String>, grid: &[f64], f: impl Fn(f64) -> f64) -> Self {
        let points = grid
            .iter()
            .map(|&price| CurvePoint {
                price,
                value: f(price),
            })
            .collect();

        Self {
            label: label.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Sample with the lowest value
    pub fn min_point(&self) -> Option<CurvePoint> {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| a.value.total_cmp(&b.value))
    }

    /// Sample with the highest value
    pub fn max_point(&self) -> Option<CurvePoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.value.total_cmp(&b.value))
    }
}

/// Evenly spaced prices over `domain`, both endpoints included
pub fn price_grid(domain: &PriceDomain, sample_count: usize) -> HedgeResult<Vec<f64>> {
    if sample_count < MIN_SAMPLES {
        return Err(HedgeError::validation(
            "sample count",
            format!("need at least {} samples, got {}", MIN_SAMPLES, sample_count),
        ));
    }

    let mut grid = Array1::linspace(domain.low(), domain.high(), sample_count).to_vec();
    // pin the last sample so rounding in the step never leaves the domain
    if let Some(last) = grid.last_mut() {
        *last = domain.high();
    }
    Ok(grid)
}
