//! Impermanent Loss
//!
//! Compares the liquidity position against simply holding the tokens it
//! held at the reference price.

use crate::core::{price_grid, HedgeResult, PriceDomain, ValueCurve};

use super::deposit::{token_amounts, TokenAmounts};
use super::liquidity::LiquidityModel;

/// Value of holding `amounts` untouched at price `p`
pub fn hodl_value(p: f64, amounts: &TokenAmounts) -> f64 {
    amounts.value_at(p)
}

/// LP value relative to holding, minus one. Zero at the reference price,
/// negative elsewhere.
pub fn impermanent_loss(p: f64, model: &LiquidityModel, reference_price: f64) -> f64 {
    let held = token_amounts(reference_price, model.liquidity(), &model.range());
    let hodl = hodl_value(p, &held);
    if hodl <= 0.0 {
        return 0.0;
    }
    model.value(p) / hodl - 1.0
}

/// Impermanent loss sampled over `domain`
///
/// A zero lower bound is replaced by the first positive grid step, since
/// holding value vanishes at a zero price.
pub fn impermanent_loss_curve(
    model: &LiquidityModel,
    reference_price: f64,
    domain: &PriceDomain,
    sample_count: usize,
) -> HedgeResult<ValueCurve> {
    let domain = if domain.low() > 0.0 {
        *domain
    } else {
        PriceDomain::new(domain.high() / (sample_count.max(1) as f64 * 10.0), domain.high())?
    };
    let grid = price_grid(&domain, sample_count)?;

    Ok(ValueCurve::sample("Impermanent Loss", &grid, |p| {
        impermanent_loss(p, model, reference_price)
    }))
}
