//! Put option contract definitions
//!
//! A European put with the terms a hedging desk quotes: strike, premium,
//! quantity, side, maturity and an implied vol measured over an N-day
//! horizon.

use serde::{Deserialize, Serialize};

use super::error::{ensure_non_negative, ensure_positive, HedgeError, HedgeResult};

/// Default implied-vol measurement horizon (days)
pub const DEFAULT_IV_HORIZON_DAYS: f64 = 180.0;

/// Trading side of the option position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// +1 for a long put, -1 for a written put
    pub fn sign(&self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

/// Which price the option leg is marked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffMode {
    /// Intrinsic value at expiry
    #[default]
    Expiry,
    /// Black-Scholes value before expiry
    Theoretical,
}

impl PayoffMode {
    pub fn label(&self) -> &'static str {
        match self {
            PayoffMode::Expiry => "Expiry Payoff",
            PayoffMode::Theoretical => "Theoretical (Black-Scholes)",
        }
    }
}

/// European put contract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionContract {
    /// Strike price
    pub strike: f64,
    /// Premium per contract, paid when buying and received when selling
    pub premium: f64,
    /// Number of contracts (>= 1)
    pub quantity: f64,
    pub side: Side,
    /// Months until expiry
    pub maturity_months: f64,
    /// Horizon the implied vol is quoted over (days)
    pub iv_horizon_days: f64,
    /// Implied vol over that horizon (not annualized)
    pub iv_at_horizon: f64,
}

impl OptionContract {
    /// Validated put contract
    pub fn new(
        strike: f64,
        premium: f64,
        quantity: f64,
        side: Side,
        maturity_months: f64,
        iv_horizon_days: f64,
        iv_at_horizon: f64,
    ) -> HedgeResult<Self> {
        ensure_positive("strike", strike)?;
        ensure_non_negative("premium", premium)?;
        ensure_positive("quantity", quantity)?;
        if quantity < 1.0 {
            return Err(HedgeError::validation(
                "quantity",
                format!("must be at least 1 contract, got {}", quantity),
            ));
        }
        ensure_non_negative("maturity months", maturity_months)?;
        ensure_non_negative("implied volatility", iv_at_horizon)?;
        if !iv_horizon_days.is_finite() {
            return Err(HedgeError::InvalidHorizon {
                horizon_days: iv_horizon_days,
            });
        }

        Ok(Self {
            strike,
            premium,
            quantity,
            side,
            maturity_months,
            iv_horizon_days,
            iv_at_horizon,
        })
    }

    /// Contract valued only at expiry: no maturity, no vol
    pub fn at_expiry(strike: f64, premium: f64, quantity: f64, side: Side) -> HedgeResult<Self> {
        Self::new(strike, premium, quantity, side, 0.0, DEFAULT_IV_HORIZON_DAYS, 0.0)
    }

    /// Time to expiry in years
    pub fn time_to_expiry(&self) -> f64 {
        self.maturity_months / 12.0
    }

    /// Is this put in the money?
    pub fn is_itm(&self, spot: f64) -> bool {
        spot < self.strike
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_sign() {
        assert_eq!(Side::Buy.sign(), 1.0);
        assert_eq!(Side::Sell.sign(), -1.0);
    }

    #[test]
    fn test_time_to_expiry() {
        let opt = OptionContract::new(100.0, 5.0, 1.0, Side::Buy, 6.0, 180.0, 0.5).unwrap();
        assert!((opt.time_to_expiry() - 0.5).abs() < 1e-12);
        assert!(opt.is_itm(90.0));
        assert!(!opt.is_itm(110.0));
    }

    #[test]
    fn test_contract_validation() {
        assert!(OptionContract::at_expiry(0.0, 5.0, 1.0, Side::Buy).is_err());
        assert!(OptionContract::at_expiry(100.0, -1.0, 1.0, Side::Buy).is_err());
        assert!(OptionContract::at_expiry(100.0, 5.0, 0.5, Side::Buy).is_err());
        assert!(OptionContract::new(100.0, 5.0, 1.0, Side::Buy, 6.0, 180.0, -0.1).is_err());
        assert!(OptionContract::new(100.0, 5.0, 1.0, Side::Buy, -1.0, 180.0, 0.5).is_err());
    }

    #[test]
    fn test_quantity_error_names_parameter() {
        let err = OptionContract::at_expiry(100.0, 5.0, 0.0, Side::Sell).unwrap_err();
        assert_eq!(err.parameter(), Some("quantity"));
    }
}
