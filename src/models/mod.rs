//! Valuation Models
//!
//! Implements:
//! - Concentrated liquidity position value (reference-value scaling)
//! - Deposit-based liquidity derivation
//! - Black-Scholes put (zero rate) and put payoff marks
//! - Impermanent loss against holding

pub mod black_scholes;
pub mod deposit;
pub mod impermanent_loss;
pub mod liquidity;
pub mod payoff;

pub use black_scholes::*;
pub use deposit::*;
pub use impermanent_loss::*;
pub use liquidity::*;
pub use payoff::*;
