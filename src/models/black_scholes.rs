//! Black-Scholes Put Model
//!
//! Provides:
//! - European put pricing with the risk-free rate fixed at zero
//! - Put delta and the remaining first/second order Greeks
//! - Annualization of an N-day implied volatility
//!
//! With a zero rate the forward equals spot, so the degenerate cases
//! (expiry reached, zero vol, zero spot) all collapse to intrinsic value.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

use crate::core::{Greeks, HedgeError, HedgeResult};

/// Below this many years the option is treated as expired
pub const EXPIRY_EPSILON: f64 = 1e-10;

/// Calendar days per year used for vol annualization and theta
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Put intrinsic value: max(K - S, 0)
pub fn intrinsic(spot: f64, strike: f64) -> f64 {
    (strike - spot).max(0.0)
}

/// Black-Scholes d1 parameter (zero rate)
pub fn d1(spot: f64, strike: f64, time: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + 0.5 * vol * vol * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter (zero rate)
pub fn d2(spot: f64, strike: f64, time: f64, vol: f64) -> f64 {
    d1(spot, strike, time, vol) - vol * time.sqrt()
}

/// Whether closed-form d1/d2 are undefined and intrinsic applies
fn is_degenerate(spot: f64, time: f64, vol: f64) -> bool {
    time <= EXPIRY_EPSILON || vol <= 0.0 || spot <= 0.0
}

/// Black-Scholes European put price
pub fn put_price(spot: f64, strike: f64, time: f64, vol: f64) -> f64 {
    if is_degenerate(spot, time, vol) {
        return intrinsic(spot, strike);
    }

    let d1 = d1(spot, strike, time, vol);
    let d2 = d1 - vol * time.sqrt();

    strike * norm_cdf(-d2) - spot * norm_cdf(-d1)
}

/// Black-Scholes put delta: N(d1) - 1
pub fn put_delta(spot: f64, strike: f64, time: f64, vol: f64) -> f64 {
    if is_degenerate(spot, time, vol) {
        return if spot < strike { -1.0 } else { 0.0 };
    }

    norm_cdf(d1(spot, strike, time, vol)) - 1.0
}

/// Put Greeks per unit of underlying
pub fn put_greeks(spot: f64, strike: f64, time: f64, vol: f64) -> Greeks {
    if is_degenerate(spot, time, vol) {
        return Greeks::new(put_delta(spot, strike, time, vol), 0.0, 0.0, 0.0);
    }

    let d1 = d1(spot, strike, time, vol);
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta = norm_cdf(d1) - 1.0;
    let gamma = pdf_d1 / (spot * vol * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t / 100.0;
    // zero rate: put and call theta coincide
    let theta = -spot * pdf_d1 * vol / (2.0 * sqrt_t) / DAYS_PER_YEAR;

    Greeks::new(delta, gamma, theta, vega)
}

/// Rescale a vol quoted over `horizon_days` to one year (square-root-of-time)
pub fn annualize_vol(vol_at_horizon: f64, horizon_days: f64) -> HedgeResult<f64> {
    if !horizon_days.is_finite() || horizon_days <= 0.0 {
        return Err(HedgeError::InvalidHorizon { horizon_days });
    }
    Ok(vol_at_horizon / (horizon_days / DAYS_PER_YEAR).sqrt())
}
