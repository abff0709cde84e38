//! Put Option Payoff Model
//!
//! Two marks for a put position, never mixed within one evaluation:
//! - expiry payoff from intrinsic value
//! - theoretical PNL from the zero-rate Black-Scholes price

use serde::Serialize;

use crate::core::{HedgeResult, OptionContract, PayoffMode, PriceDomain, Side};

use super::black_scholes::{annualize_vol, intrinsic, put_delta, put_price};

/// Signed position PNL given a per-contract option value
fn position_pnl(option_value: f64, contract: &OptionContract) -> f64 {
    match contract.side {
        Side::Buy => (option_value - contract.premium) * contract.quantity,
        Side::Sell => (contract.premium - option_value) * contract.quantity,
    }
}

/// PNL of the put position at expiry
pub fn payoff_at_expiry(s: f64, contract: &OptionContract) -> f64 {
    position_pnl(intrinsic(s, contract.strike), contract)
}

/// PNL of the put position marked at the Black-Scholes price
pub fn theoretical_pnl(s: f64, contract: &OptionContract) -> HedgeResult<f64> {
    let pricing = OptionPricing::new(contract, PayoffMode::Theoretical)?;
    Ok(pricing.value(s))
}

impl OptionContract {
    /// Position PNL at `s` under `mode`
    ///
    /// Builds the pricing once per call; sample whole curves through
    /// [`OptionPricing`] instead.
    pub fn value(&self, s: f64, mode: PayoffMode) -> HedgeResult<f64> {
        Ok(OptionPricing::new(self, mode)?.value(s))
    }
}

/// Native display domain of a put: [0, 2·strike]
pub fn option_default_domain(contract: &OptionContract) -> HedgeResult<PriceDomain> {
    PriceDomain::new(0.0, 2.0 * contract.strike)
}

/// Derived option quantities shown next to the curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionDiagnostics {
    pub time_to_expiry: f64,
    pub sigma_annual: f64,
}

/// A contract bound to one payoff mode, with vol annualized up front
#[derive(Debug, Clone, PartialEq)]
pub struct OptionPricing<'a> {
    contract: &'a OptionContract,
    mode: PayoffMode,
    time: f64,
    sigma: f64,
}

impl<'a> OptionPricing<'a> {
    /// Fails with `InvalidHorizon` in theoretical mode if the vol horizon is
    /// not positive
    pub fn new(contract: &'a OptionContract, mode: PayoffMode) -> HedgeResult<Self> {
        let (time, sigma) = match mode {
            PayoffMode::Expiry => (0.0, 0.0),
            PayoffMode::Theoretical => (
                contract.time_to_expiry(),
                annualize_vol(contract.iv_at_horizon, contract.iv_horizon_days)?,
            ),
        };

        Ok(Self {
            contract,
            mode,
            time,
            sigma,
        })
    }

    pub fn mode(&self) -> PayoffMode {
        self.mode
    }

    /// Position PNL at underlying price `s`
    pub fn value(&self, s: f64) -> f64 {
        match self.mode {
            PayoffMode::Expiry => payoff_at_expiry(s, self.contract),
            PayoffMode::Theoretical => {
                let price = put_price(s, self.contract.strike, self.time, self.sigma);
                position_pnl(price, self.contract)
            }
        }
    }

    /// Position delta at `s` (quantity and side applied)
    pub fn delta(&self, s: f64) -> f64 {
        let unit = put_delta(s, self.contract.strike, self.time, self.sigma);
        unit * self.contract.quantity * self.contract.side.sign()
    }

    pub fn diagnostics(&self) -> OptionDiagnostics {
        OptionDiagnostics {
            time_to_expiry: self.time,
            sigma_annual: self.sigma,
        }
    }
}
