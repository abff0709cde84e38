//! Configuration for hedge composition
//!
//! Raw, serde-friendly parameters as a collaborator collects them. The
//! `build_*` methods turn them into validated model inputs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{
    HedgeError, HedgeResult, OptionContract, PayoffMode, PriceRange, Side, Warning,
    DEFAULT_IV_HORIZON_DAYS,
};
use crate::models::{DepositPosition, LiquidityPosition};

use super::composer::HedgeComposer;

/// Full parameter set for one hedge evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HedgeConfig {
    /// Liquidity leg
    pub position: PositionConfig,
    /// Option leg
    pub option: OptionConfig,
    /// Sampling and payoff mode
    pub composition: CompositionConfig,
}

impl HedgeConfig {
    /// Defaults marked at expiry
    pub fn expiry() -> Self {
        Self::default()
    }

    /// Defaults marked at the Black-Scholes price
    pub fn theoretical() -> Self {
        Self {
            composition: CompositionConfig {
                mode: PayoffMode::Theoretical,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> HedgeResult<Self> {
        serde_json::from_str(json).map_err(|e| HedgeError::serialization(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> HedgeResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!("Loaded hedge config from {:?}", path);
        Ok(config)
    }

    pub fn to_json_string(&self) -> HedgeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HedgeError::serialization(e.to_string()))
    }

    /// Validated position in reference-value form, plus conversion warnings
    pub fn build_position(&self) -> HedgeResult<(LiquidityPosition, Vec<Warning>)> {
        self.position.build()
    }

    pub fn build_contract(&self) -> HedgeResult<OptionContract> {
        self.option.build()
    }

    pub fn composer(&self) -> HedgeComposer {
        HedgeComposer::with_config(self.composition.clone())
    }
}

/// Liquidity leg in either parametrization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositionConfig {
    /// Value V0 known at price S0
    ReferenceValue {
        reference_price: f64,
        lower: f64,
        upper: f64,
        reference_value: f64,
    },
    /// Token amounts deposited at price P0
    Deposits {
        token_a: f64,
        token_b: f64,
        reference_price: f64,
        lower: f64,
        upper: f64,
    },
}

impl Default for PositionConfig {
    fn default() -> Self {
        PositionConfig::ReferenceValue {
            reference_price: 100.0,
            lower: 80.0,
            upper: 120.0,
            reference_value: 10_000.0,
        }
    }
}

impl PositionConfig {
    /// Deposits are converted into the reference-value form here
    pub fn build(&self) -> HedgeResult<(LiquidityPosition, Vec<Warning>)> {
        match *self {
            PositionConfig::ReferenceValue {
                reference_price,
                lower,
                upper,
                reference_value,
            } => {
                let position =
                    LiquidityPosition::from_bounds(reference_price, lower, upper, reference_value)?;
                Ok((position, Vec::new()))
            }
            PositionConfig::Deposits {
                token_a,
                token_b,
                reference_price,
                lower,
                upper,
            } => {
                let range = PriceRange::new(lower, upper)?;
                DepositPosition::new(token_a, token_b, reference_price, range)?
                    .to_liquidity_position()
            }
        }
    }
}

/// Put contract terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionConfig {
    pub strike: f64,
    pub premium: f64,
    pub quantity: f64,
    pub side: Side,
    pub maturity_months: f64,
    /// Horizon the implied vol is quoted over (days)
    /// Default: 180
    pub iv_horizon_days: f64,
    pub iv_at_horizon: f64,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            strike: 100.0,
            premium: 5.0,
            quantity: 1.0,
            side: Side::Buy,
            maturity_months: 6.0,
            iv_horizon_days: DEFAULT_IV_HORIZON_DAYS,
            iv_at_horizon: 0.5,
        }
    }
}

impl OptionConfig {
    pub fn build(&self) -> HedgeResult<OptionContract> {
        OptionContract::new(
            self.strike,
            self.premium,
            self.quantity,
            self.side,
            self.maturity_months,
            self.iv_horizon_days,
            self.iv_at_horizon,
        )
    }
}

/// Sampling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// Number of grid prices, endpoints included
    /// Default: 300
    pub sample_count: usize,

    /// Expiry payoff or Black-Scholes mark for the option leg
    /// Default: Expiry
    pub mode: PayoffMode,

    /// Replaces the position's default display window. A window outside
    /// `0 <= low < high` fails with `InvalidDomain`
    pub position_domain: Option<(f64, f64)>,

    /// Replaces the option's [0, 2·strike] window
    pub option_domain: Option<(f64, f64)>,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            sample_count: 300,
            mode: PayoffMode::Expiry,
            position_domain: None,
            option_domain: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_build() {
        let config = HedgeConfig::default();
        let (position, warnings) = config.build_position().unwrap();
        assert!(warnings.is_empty());
        assert_eq!(position.reference_value, 10_000.0);

        let contract = config.build_contract().unwrap();
        assert_eq!(contract.strike, 100.0);
        assert_eq!(contract.side, Side::Buy);
        assert_eq!(config.composer().config().sample_count, 300);
    }

    #[test]
    fn test_presets() {
        assert_eq!(HedgeConfig::expiry().composition.mode, PayoffMode::Expiry);
        assert_eq!(HedgeConfig::theoretical().composition.mode, PayoffMode::Theoretical);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let json = r#"{
            "option": { "strike": 90.0, "side": "Sell" },
            "composition": { "mode": "theoretical", "sample_count": 50 }
        }"#;
        let config = HedgeConfig::from_json_str(json).unwrap();

        assert_eq!(config.option.strike, 90.0);
        assert_eq!(config.option.side, Side::Sell);
        assert_eq!(config.option.premium, 5.0);
        assert_eq!(config.composition.mode, PayoffMode::Theoretical);
        assert_eq!(config.composition.sample_count, 50);
        assert_eq!(config.position, PositionConfig::default());
    }

    #[test]
    fn test_deposit_position_from_json() {
        let json = r#"{
            "position": {
                "kind": "deposits",
                "token_a": 30.0,
                "token_b": 4000.0,
                "reference_price": 104.0,
                "lower": 80.0,
                "upper": 120.0
            }
        }"#;
        let config = HedgeConfig::from_json_str(json).unwrap();
        let (position, warnings) = config.build_position().unwrap();
        assert!(warnings.is_empty());
        assert_eq!(position.reference_price, 104.0);
        assert!(position.reference_value > 0.0);
    }

    #[test]
    fn test_invalid_range_in_config() {
        let config = HedgeConfig {
            position: PositionConfig::ReferenceValue {
                reference_price: 100.0,
                lower: 120.0,
                upper: 120.0,
                reference_value: 10_000.0,
            },
            ..Default::default()
        };
        let err = config.build_position().unwrap_err();
        assert_eq!(err.parameter(), Some("price range"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            HedgeConfig::from_json_str("{ not json"),
            Err(HedgeError::Serialization(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hedge.json");

        let original = HedgeConfig::theoretical();
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(original.to_json_string().unwrap().as_bytes())
            .unwrap();

        let loaded = HedgeConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            HedgeConfig::from_json_file(dir.path().join("absent.json")),
            Err(HedgeError::IO(_))
        ));
    }
}
