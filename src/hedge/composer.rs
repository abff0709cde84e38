//! HedgeComposer - combines a liquidity position with a put
//!
//! Merges the two native display domains, samples one shared grid and
//! evaluates both legs pointwise. The combined curve is the exact pointwise
//! sum; there are no interaction terms.

use serde::Serialize;

use crate::core::{
    price_grid, CurvePoint, HedgeResult, OptionContract, PayoffMode, PriceDomain, ValueCurve,
    Warning,
};
use crate::models::{
    option_default_domain, LiquidityDiagnostics, LiquidityModel, LiquidityPosition,
    OptionDiagnostics, OptionPricing,
};

use super::config::CompositionConfig;

/// Aligned position / option / combined curves plus diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HedgeCurves {
    pub position: ValueCurve,
    pub option: ValueCurve,
    pub combined: ValueCurve,
    /// Merged domain the grid was drawn from
    pub domain: PriceDomain,
    pub mode: PayoffMode,
    pub liquidity: LiquidityDiagnostics,
    pub option_diagnostics: OptionDiagnostics,
    pub warnings: Vec<Warning>,
}

impl HedgeCurves {
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Worst combined sample
    pub fn min_combined(&self) -> Option<CurvePoint> {
        self.combined.min_point()
    }

    /// Best combined sample
    pub fn max_combined(&self) -> Option<CurvePoint> {
        self.combined.max_point()
    }
}

/// Builds hedge curves from independently configured legs
#[derive(Debug, Clone, Default)]
pub struct HedgeComposer {
    config: CompositionConfig,
}

impl HedgeComposer {
    /// Create a composer with default configuration
    pub fn new() -> Self {
        Self {
            config: CompositionConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: CompositionConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &CompositionConfig {
        &self.config
    }

    /// Position domain: override or the position's default window
    fn position_domain(&self, position: &LiquidityPosition) -> HedgeResult<PriceDomain> {
        match self.config.position_domain {
            Some((low, high)) => PriceDomain::new(low, high),
            None => position.default_domain(),
        }
    }

    /// Option domain: override or [0, 2·strike]
    fn option_domain(&self, contract: &OptionContract) -> HedgeResult<PriceDomain> {
        match self.config.option_domain {
            Some((low, high)) => PriceDomain::new(low, high),
            None => option_default_domain(contract),
        }
    }

    /// Combined curve using the configured mode and sample count
    pub fn compose(
        &self,
        position: &LiquidityPosition,
        contract: &OptionContract,
    ) -> HedgeResult<HedgeCurves> {
        self.combined_curve(position, contract, self.config.mode, self.config.sample_count)
    }

    /// Sample position, option and combined value on one grid
    ///
    /// Every input is validated before the first sample is taken, so an
    /// error never leaves a partial curve behind.
    pub fn combined_curve(
        &self,
        position: &LiquidityPosition,
        contract: &OptionContract,
        mode: PayoffMode,
        sample_count: usize,
    ) -> HedgeResult<HedgeCurves> {
        let model = LiquidityModel::from_position(position)?;
        let pricing = OptionPricing::new(contract, mode)?;

        let domain_a = self.position_domain(position)?;
        let domain_b = self.option_domain(contract)?;
        let domain = domain_a.union(&domain_b)?;
        let grid = price_grid(&domain, sample_count)?;

        tracing::debug!(
            low = domain.low(),
            high = domain.high(),
            samples = sample_count,
            mode = mode.label(),
            "composing hedge curves"
        );

        let warnings: Vec<Warning> = position.warnings().into_iter().map(Warning::logged).collect();

        let position_curve = ValueCurve::sample("LP Value", &grid, |s| model.value(s));
        let option_curve = ValueCurve::sample(
            format!("Put Value ({})", mode.label()),
            &grid,
            |s| pricing.value(s),
        );
        let combined_points = position_curve
            .points
            .iter()
            .zip(&option_curve.points)
            .map(|(lp, put)| CurvePoint {
                price: lp.price,
                value: lp.value + put.value,
            })
            .collect();
        let combined = ValueCurve {
            label: "LP + Put Combined".to_string(),
            points: combined_points,
        };

        Ok(HedgeCurves {
            position: position_curve,
            option: option_curve,
            combined,
            domain,
            mode,
            liquidity: model.diagnostics(),
            option_diagnostics: pricing.diagnostics(),
            warnings,
        })
    }

    /// Net delta of the hedged book at `price`
    pub fn net_delta(
        &self,
        price: f64,
        position: &LiquidityPosition,
        contract: &OptionContract,
        mode: PayoffMode,
    ) -> HedgeResult<f64> {
        let model = LiquidityModel::from_position(position)?;
        let pricing = OptionPricing::new(contract, mode)?;
        Ok(model.delta(price) + pricing.delta(price))
    }
}

/// Convenience function with default composer settings
pub fn combined_curve(
    position: &LiquidityPosition,
    contract: &OptionContract,
    mode: PayoffMode,
    sample_count: usize,
) -> HedgeResult<HedgeCurves> {
    HedgeComposer::new().combined_curve(position, contract, mode, sample_count)
}
