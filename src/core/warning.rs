//! Non-fatal conditions reported alongside valuation results

use std::fmt;

use serde::Serialize;

/// A condition that leaves the result computable but ill-conditioned
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Reference price of a reference-value position lies outside its range
    ReferenceOutsideRange {
        reference_price: f64,
        lower: f64,
        upper: f64,
    },
    /// Deposit price is not strictly inside the range; liquidity uses the
    /// saturated boundary formula
    DepositPriceOutsideRange { price: f64, lower: f64, upper: f64 },
}

impl Warning {
    /// Emit through tracing and hand back for the caller's result
    pub(crate) fn logged(self) -> Self {
        tracing::warn!("{}", self);
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ReferenceOutsideRange {
                reference_price,
                lower,
                upper,
            } => write!(
                f,
                "reference price {} is outside the liquidity range [{}, {}]; values are approximate",
                reference_price, lower, upper
            ),
            Warning::DepositPriceOutsideRange { price, lower, upper } => write!(
                f,
                "deposit price {} is not strictly inside ({}, {}); liquidity saturated at the boundary",
                price, lower, upper
            ),
        }
    }
}
