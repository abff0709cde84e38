//! Concentrated Liquidity Position Model
//!
//! Values a Uniswap-V3-style position in quote terms. The range
//! `[lower, upper]` is reparametrized as a geometric mean `K` and a ratio
//! `r` so that `lower = K/r` and `upper = K·r`. One unit of liquidity is
//! then worth:
//!
//! - `S` below the range (all in the priced token)
//! - `K` above the range (all in the quote token)
//! - `(2·sqrt(S·K·r) - S - K) / (r - 1)` inside, boundaries included
//!
//! A scaling factor `alpha` pins the curve to a known value `V0` at the
//! reference price `S0`.

use serde::Serialize;

use crate::core::{
    ensure_finite, ensure_non_negative, ensure_positive, HedgeError, HedgeResult, PriceDomain,
    PriceRange, Warning,
};

/// Value of one unit of liquidity at price `s`
pub fn unit_value(s: f64, k: f64, r: f64) -> f64 {
    if s < k / r {
        s
    } else if s > k * r {
        k
    } else {
        (2.0 * (s * k * r).sqrt() - s - k) / (r - 1.0)
    }
}

/// d(unit_value)/dS
pub fn unit_delta(s: f64, k: f64, r: f64) -> f64 {
    if s < k / r {
        1.0
    } else if s > k * r {
        0.0
    } else {
        ((k * r / s).sqrt() - 1.0) / (r - 1.0)
    }
}

/// Reference-value form of a liquidity position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiquidityPosition {
    /// Price at which the position value is known (S0)
    pub reference_price: f64,
    pub range: PriceRange,
    /// Position value at the reference price (V0)
    pub reference_value: f64,
}

impl LiquidityPosition {
    pub fn new(reference_price: f64, range: PriceRange, reference_value: f64) -> HedgeResult<Self> {
        ensure_positive("reference price", reference_price)?;
        ensure_positive("reference value", reference_value)?;
        Ok(Self {
            reference_price,
            range,
            reference_value,
        })
    }

    /// Build from raw bounds, validating the range first
    pub fn from_bounds(
        reference_price: f64,
        lower: f64,
        upper: f64,
        reference_value: f64,
    ) -> HedgeResult<Self> {
        let range = PriceRange::new(lower, upper)?;
        Self::new(reference_price, range, reference_value)
    }

    /// Out-of-range reference price is allowed but flagged
    pub fn warnings(&self) -> Vec<Warning> {
        if self.range.strictly_contains(self.reference_price) {
            Vec::new()
        } else {
            vec![Warning::ReferenceOutsideRange {
                reference_price: self.reference_price,
                lower: self.range.lower(),
                upper: self.range.upper(),
            }]
        }
    }

    /// Display window: at least [0.5·lower, 1.5·upper], widened to cover
    /// [0.5·S0, 1.5·S0]
    pub fn default_domain(&self) -> HedgeResult<PriceDomain> {
        let low = (0.5 * self.range.lower()).min(0.5 * self.reference_price);
        let high = (1.5 * self.range.upper()).max(1.5 * self.reference_price);
        PriceDomain::new(low, high)
    }
}

/// Derived quantities shown next to the curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiquidityDiagnostics {
    /// Geometric mean of the range
    pub k: f64,
    /// Range ratio
    pub r: f64,
    /// Scaling factor applied to the unit value
    pub alpha: f64,
    /// Equivalent Uniswap liquidity L
    pub liquidity: f64,
}

/// Callable value curve of a liquidity position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiquidityModel {
    range: PriceRange,
    k: f64,
    r: f64,
    alpha: f64,
}

impl LiquidityModel {
    /// Scale the unit curve so that value(S0) == V0
    pub fn from_position(position: &LiquidityPosition) -> HedgeResult<Self> {
        let range = position.range;
        let k = range.geometric_mean();
        let r = range.ratio();

        let u0 = unit_value(position.reference_price, k, r);
        let alpha = position.reference_value / u0;
        // u0 can round to zero on ultra-narrow ranges; a tiny S0 overflows alpha
        if u0 == 0.0 || !u0.is_finite() || !alpha.is_finite() {
            return Err(HedgeError::DegenerateReference {
                reference_price: position.reference_price,
            });
        }

        tracing::debug!(k, r, alpha, "liquidity model scaled to reference value");

        Ok(Self { range, k, r, alpha })
    }

    /// Model for a known Uniswap liquidity `L`: alpha = L·(r - 1)/sqrt(upper)
    pub fn from_liquidity(liquidity: f64, range: PriceRange) -> HedgeResult<Self> {
        ensure_non_negative("liquidity", liquidity)?;
        let k = range.geometric_mean();
        let r = range.ratio();
        let alpha = liquidity * (r - 1.0) / range.upper().sqrt();

        Ok(Self { range, k, r, alpha })
    }

    /// Position value at price `s`
    pub fn value(&self, s: f64) -> f64 {
        self.alpha * unit_value(s, self.k, self.r)
    }

    /// dV/dS at price `s`
    pub fn delta(&self, s: f64) -> f64 {
        self.alpha * unit_delta(s, self.k, self.r)
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Uniswap liquidity equivalent to this scaling
    pub fn liquidity(&self) -> f64 {
        self.alpha * self.range.upper().sqrt() / (self.r - 1.0)
    }

    pub fn diagnostics(&self) -> LiquidityDiagnostics {
        LiquidityDiagnostics {
            k: self.k,
            r: self.r,
            alpha: self.alpha,
            liquidity: self.liquidity(),
        }
    }
}

/// Value of `position` at price `s`
pub fn scaled_value(s: f64, position: &LiquidityPosition) -> HedgeResult<f64> {
    ensure_finite("price", s)?;
    Ok(LiquidityModel::from_position(position)?.value(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> LiquidityPosition {
        LiquidityPosition::from_bounds(100.0, 80.0, 120.0, 10_000.0).unwrap()
    }

    #[test]
    fn test_scenario_a_diagnostics() {
        let model = LiquidityModel::from_position(&scenario_a()).unwrap();
        let diag = model.diagnostics();

        assert!((diag.k - 97.9796).abs() < 1e-4);
        assert!((diag.r - 1.224745).abs() < 1e-6);
        assert!((unit_value(100.0, diag.k, diag.r) - 93.93).abs() < 0.01);
        assert!((diag.alpha - 106.46).abs() < 0.01);
    }

    #[test]
    fn test_scenario_a_below_range() {
        let model = LiquidityModel::from_position(&scenario_a()).unwrap();
        let v = model.value(70.0);
        assert!((v - model.alpha() * 70.0).abs() < 1e-9);
        assert!((v - 7452.0).abs() < 1.0);
    }

    #[test]
    fn test_reference_value_recovered() {
        let position = scenario_a();
        let v0 = scaled_value(100.0, &position).unwrap();
        assert!((v0 - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_continuity() {
        let range = PriceRange::new(80.0, 120.0).unwrap();
        let (k, r) = (range.geometric_mean(), range.ratio());

        assert!((unit_value(k / r, k, r) - k / r).abs() < 1e-9);
        assert!((unit_value(k * r, k, r) - k).abs() < 1e-9);
    }

    #[test]
    fn test_above_range_is_flat() {
        let model = LiquidityModel::from_position(&scenario_a()).unwrap();
        let cap = model.value(120.0);
        assert!((model.value(150.0) - cap).abs() < 1e-9);
        assert!((model.value(1_000.0) - cap).abs() < 1e-9);
        assert_eq!(model.delta(150.0), 0.0);
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let model = LiquidityModel::from_position(&scenario_a()).unwrap();
        let h = 1e-5;
        for &s in &[85.0, 100.0, 115.0] {
            let fd = (model.value(s + h) - model.value(s - h)) / (2.0 * h);
            assert!((model.delta(s) - fd).abs() < 1e-4, "s = {}", s);
        }
        assert!((model.delta(60.0) - model.alpha()).abs() < 1e-12);
    }

    #[test]
    fn test_liquidity_round_trip() {
        let model = LiquidityModel::from_position(&scenario_a()).unwrap();
        let rebuilt = LiquidityModel::from_liquidity(model.liquidity(), model.range()).unwrap();
        assert!((rebuilt.alpha() - model.alpha()).abs() < 1e-9);
    }

    #[test]
    fn test_default_domain() {
        let inside = scenario_a().default_domain().unwrap();
        assert!((inside.low() - 40.0).abs() < 1e-12);
        assert!((inside.high() - 180.0).abs() < 1e-12);

        let far_above = LiquidityPosition::from_bounds(200.0, 80.0, 120.0, 10_000.0).unwrap();
        let widened = far_above.default_domain().unwrap();
        assert!((widened.low() - 40.0).abs() < 1e-12);
        assert!((widened.high() - 300.0).abs() < 1e-12);

        let far_below = LiquidityPosition::from_bounds(20.0, 80.0, 120.0, 10_000.0).unwrap();
        assert!((far_below.default_domain().unwrap().low() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_reference_warns() {
        assert!(scenario_a().warnings().is_empty());

        let outside = LiquidityPosition::from_bounds(130.0, 80.0, 120.0, 5_000.0).unwrap();
        let warnings = outside.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], Warning::ReferenceOutsideRange { .. }));

        // still computable: above range the value is flat at V0
        let model = LiquidityModel::from_position(&outside).unwrap();
        assert!((model.value(125.0) - 5_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_unit_value_at_reference_rejected() {
        // upper two ULPs above lower: the in-range formula rounds to zero
        let s0 = f64::from_bits(1.0f64.to_bits() + 1);
        let upper = f64::from_bits(1.0f64.to_bits() + 2);
        let position = LiquidityPosition::from_bounds(s0, 1.0, upper, 1.0).unwrap();
        assert!(matches!(
            LiquidityModel::from_position(&position),
            Err(HedgeError::DegenerateReference { .. })
        ));
        assert!(matches!(
            scaled_value(1.0, &position),
            Err(HedgeError::DegenerateReference { .. })
        ));
    }

    #[test]
    fn test_overflowing_alpha_rejected() {
        let position = LiquidityPosition::from_bounds(1e-310, 80.0, 120.0, 1e10).unwrap();
        let err = LiquidityModel::from_position(&position).unwrap_err();
        assert!(matches!(
            err,
            HedgeError::DegenerateReference { reference_price } if reference_price == 1e-310
        ));
    }

    #[test]
    fn test_invalid_position_inputs() {
        assert!(LiquidityPosition::from_bounds(100.0, 100.0, 100.0, 10_000.0).is_err());
        assert!(LiquidityPosition::from_bounds(0.0, 80.0, 120.0, 10_000.0).is_err());
        assert!(LiquidityPosition::from_bounds(100.0, 80.0, 120.0, 0.0).is_err());
        assert!(LiquidityModel::from_liquidity(-1.0, PriceRange::new(1.0, 2.0).unwrap()).is_err());
    }
}
