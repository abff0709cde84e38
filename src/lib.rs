//! # LP Hedge - Concentrated Liquidity + Put Valuation
//!
//! Values a concentrated-liquidity (Uniswap-V3-style) position, the PNL of a
//! put option, and their sum as a hedge.
//!
//! ## Overview
//!
//! - **Liquidity position**: piecewise closed-form value over a price range,
//!   scaled to a known value at a reference price
//! - **Deposits**: liquidity derived from token amounts, converted to the
//!   reference-value form
//! - **Put option**: expiry payoff, or a zero-rate Black-Scholes mark with an
//!   N-day implied vol annualized by the square-root-of-time rule
//! - **Hedge composer**: both legs sampled on one grid, summed pointwise
//!
//! ## Usage
//!
//! ```rust
//! use lp_hedge::prelude::*;
//!
//! let position = LiquidityPosition::from_bounds(100.0, 80.0, 120.0, 10_000.0).unwrap();
//! let put = OptionContract::new(100.0, 5.0, 50.0, Side::Buy, 6.0, 180.0, 0.5).unwrap();
//!
//! let curves = combined_curve(&position, &put, PayoffMode::Theoretical, 300).unwrap();
//! assert_eq!(curves.combined.len(), 300);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Aggregate several ranges or assets
//! - Accrue trading fees
//! - Price American or path-dependent options
//! - Fetch market data or persist positions

pub mod core;
pub mod hedge;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        price_grid, CurvePoint, Greeks, HedgeError, HedgeResult, OptionContract, PayoffMode,
        PriceDomain, PriceRange, Side, ValueCurve, Warning,
    };

    // Liquidity position
    pub use crate::models::{
        scaled_value, unit_value, LiquidityDiagnostics, LiquidityModel, LiquidityPosition,
    };

    // Deposits
    pub use crate::models::deposit::{
        liquidity as deposit_liquidity, token_amounts, value_at, DepositLiquidity,
        DepositPosition, TokenAmounts,
    };

    // Black-Scholes
    pub use crate::models::black_scholes::{
        annualize_vol, intrinsic, norm_cdf, put_delta as bs_put_delta, put_greeks,
        put_price as bs_put_price,
    };

    // Payoff
    pub use crate::models::{payoff_at_expiry, theoretical_pnl, OptionDiagnostics, OptionPricing};

    // Impermanent loss
    pub use crate::models::impermanent_loss::{hodl_value, impermanent_loss, impermanent_loss_curve};

    // Composition
    pub use crate::hedge::{
        combined_curve, CompositionConfig, HedgeComposer, HedgeConfig, HedgeCurves,
        OptionConfig, PositionConfig,
    };
}

// Re-export main types at crate root
pub use crate::core::{HedgeError, HedgeResult};
pub use crate::hedge::{HedgeComposer, HedgeConfig};
pub use crate::models::{LiquidityModel, LiquidityPosition};
