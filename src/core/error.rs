//! Error types for LP hedge valuation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HedgeError {
    #[error("Invalid {parameter}: {reason}")]
    Validation {
        parameter: &'static str,
        reason: String,
    },

    #[error(
        "Degenerate reference: unit value at reference price {reference_price} cannot be scaled"
    )]
    DegenerateReference { reference_price: f64 },

    #[error("Invalid volatility horizon: {horizon_days} days (must be positive)")]
    InvalidHorizon { horizon_days: f64 },

    #[error("Invalid price domain [{low}, {high}]: need 0 <= low < high")]
    InvalidDomain { low: f64, high: f64 },

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type HedgeResult<T> = Result<T, HedgeError>;

impl HedgeError {
    pub fn validation(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            parameter,
            reason: reason.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Name of the offending parameter, if this is a validation failure
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::Validation { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

/// Reject NaN and infinities before any arithmetic sees them
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> HedgeResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HedgeError::validation(parameter, format!("must be finite, got {}", value)))
    }
}

pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> HedgeResult<f64> {
    ensure_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(HedgeError::validation(parameter, format!("must be positive, got {}", value)))
    }
}

pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> HedgeResult<f64> {
    ensure_finite(parameter, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(HedgeError::validation(parameter, format!("must not be negative, got {}", value)))
    }
}
