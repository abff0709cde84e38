//! Core data types for LP hedge valuation
//!
//! Defines fundamental types:
//! - PriceRange / PriceDomain: liquidity band and sampling window
//! - OptionContract: put terms, side, payoff mode
//! - Greeks: option sensitivities
//! - ValueCurve: sampled (price, value) output
//! - Warning / HedgeError: non-fatal and fatal conditions

pub mod curve;
pub mod error;
pub mod greeks;
pub mod option;
pub mod range;
pub mod warning;

pub use curve::*;
pub use error::*;
pub use greeks::*;
pub use option::*;
pub use range::*;
pub use warning::*;
