//! Hedge Composition
//!
//! Combines a concentrated-liquidity position with a put into one payoff
//! curve. Each leg keeps its own parameters and native price window; the
//! composer merges the windows and samples both on a shared grid.

mod composer;
mod config;

pub use composer::*;
pub use config::*;
