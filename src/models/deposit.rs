//! Deposit-Based Liquidity
//!
//! Derives Uniswap liquidity `L` from the token amounts deposited at a
//! reference price, and values the position from the token amounts it holds
//! at any price. Token A is the priced token, token B the quote token, so
//! value is always `amount_a · P + amount_b`.
//!
//! The reference-value form in [`super::liquidity`] is canonical; a
//! `DepositPosition` converts into it at the boundary.

use serde::Serialize;

use crate::core::{
    ensure_non_negative, ensure_positive, HedgeError, HedgeResult, PriceRange, Warning,
};

use super::liquidity::LiquidityPosition;

/// Denominators below this magnitude give a zero liquidity bound
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Token holdings of a position at some price
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TokenAmounts {
    /// Priced token (A)
    pub token_a: f64,
    /// Quote token (B)
    pub token_b: f64,
}

impl TokenAmounts {
    /// Quote-denominated value at price `p`
    pub fn value_at(&self, p: f64) -> f64 {
        self.token_a * p + self.token_b
    }
}

/// Liquidity derived from deposits, with any conditioning warnings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositLiquidity {
    pub liquidity: f64,
    pub warnings: Vec<Warning>,
}

/// Bound of 0 instead of infinity when the denominator vanishes
fn bounded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < DENOMINATOR_EPSILON {
        0.0
    } else {
        numerator / denominator
    }
}

/// Liquidity bound imposed by the token A deposit at sqrt price `sp`
fn token_a_bound(x_deposit: f64, sp: f64, sqrt_upper: f64) -> f64 {
    bounded_ratio(x_deposit * sp * sqrt_upper, sqrt_upper - sp)
}

/// Liquidity bound imposed by the token B deposit at sqrt price `sp`
fn token_b_bound(y_deposit: f64, sp: f64, sqrt_lower: f64) -> f64 {
    bounded_ratio(y_deposit, sp - sqrt_lower)
}

/// Liquidity supported by depositing `x_deposit` of token A and
/// `y_deposit` of token B at price `p0`.
///
/// Inside the range this is `min(Lx, Ly)`. Outside, only one token can be
/// deposited and the bound is evaluated at the violated boundary; the
/// result is flagged with a warning.
pub fn liquidity(
    x_deposit: f64,
    y_deposit: f64,
    p0: f64,
    range: &PriceRange,
) -> HedgeResult<DepositLiquidity> {
    ensure_non_negative("token A deposit", x_deposit)?;
    ensure_non_negative("token B deposit", y_deposit)?;
    ensure_positive("deposit price", p0)?;

    let sqrt_lower = range.lower().sqrt();
    let sqrt_upper = range.upper().sqrt();
    let sqrt_p0 = p0.sqrt();

    let mut warnings = Vec::new();
    if !range.strictly_contains(p0) {
        warnings.push(
            Warning::DepositPriceOutsideRange {
                price: p0,
                lower: range.lower(),
                upper: range.upper(),
            }
            .logged(),
        );
    }

    let liquidity = if p0 <= range.lower() {
        token_a_bound(x_deposit, sqrt_lower, sqrt_upper)
    } else if p0 >= range.upper() {
        token_b_bound(y_deposit, sqrt_upper, sqrt_lower)
    } else {
        let lx = token_a_bound(x_deposit, sqrt_p0, sqrt_upper);
        let ly = token_b_bound(y_deposit, sqrt_p0, sqrt_lower);
        lx.min(ly)
    };

    tracing::debug!(liquidity, p0, "liquidity derived from deposits");

    Ok(DepositLiquidity {
        liquidity: liquidity.max(0.0),
        warnings,
    })
}

/// Token amounts held by liquidity `l` at price `p`
pub fn token_amounts(p: f64, l: f64, range: &PriceRange) -> TokenAmounts {
    let sqrt_lower = range.lower().sqrt();
    let sqrt_upper = range.upper().sqrt();
    let sp = p.max(0.0).sqrt().clamp(sqrt_lower, sqrt_upper);

    TokenAmounts {
        token_a: l * (1.0 / sp - 1.0 / sqrt_upper),
        token_b: l * (sp - sqrt_lower),
    }
}

/// Quote-denominated value of liquidity `l` at price `p`
///
/// - `p <= lower`: all token A, `L·(√u - √l)/(√l·√u)` units worth `P` each
/// - `p >= upper`: all token B, `L·(√u - √l)`
/// - otherwise `A·P + B` with `A = L·(√u - √P)/(√P·√u)`, `B = L·(√P - √l)`
pub fn value_at(p: f64, l: f64, range: &PriceRange) -> f64 {
    token_amounts(p, l, range).value_at(p)
}

/// Deposit form of a liquidity position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepositPosition {
    pub token_a_deposit: f64,
    pub token_b_deposit: f64,
    /// Price at which the deposit is made (P0)
    pub reference_price: f64,
    pub range: PriceRange,
}

impl DepositPosition {
    pub fn new(
        token_a_deposit: f64,
        token_b_deposit: f64,
        reference_price: f64,
        range: PriceRange,
    ) -> HedgeResult<Self> {
        ensure_non_negative("token A deposit", token_a_deposit)?;
        ensure_non_negative("token B deposit", token_b_deposit)?;
        ensure_positive("reference price", reference_price)?;
        Ok(Self {
            token_a_deposit,
            token_b_deposit,
            reference_price,
            range,
        })
    }

    pub fn liquidity(&self) -> HedgeResult<DepositLiquidity> {
        liquidity(
            self.token_a_deposit,
            self.token_b_deposit,
            self.reference_price,
            &self.range,
        )
    }

    /// Canonical reference-value form: S0 = P0, V0 = value_at(P0, L)
    pub fn to_liquidity_position(&self) -> HedgeResult<(LiquidityPosition, Vec<Warning>)> {
        let derived = self.liquidity()?;
        let reference_value = value_at(self.reference_price, derived.liquidity, &self.range);
        if !(reference_value > 0.0) {
            return Err(HedgeError::validation(
                "deposits",
                format!(
                    "deposits of {} token A and {} token B at price {} provide no liquidity in [{}, {}]",
                    self.token_a_deposit,
                    self.token_b_deposit,
                    self.reference_price,
                    self.range.lower(),
                    self.range.upper()
                ),
            ));
        }

        let position = LiquidityPosition::new(self.reference_price, self.range, reference_value)?;
        Ok((position, derived.warnings))
    }
}
