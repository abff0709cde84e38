//! Option Greeks
//!
//! First and second order sensitivities of a put under the zero-rate model.

use serde::Serialize;

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: dV/dt (time decay, per calendar day)
    pub theta: f64,
    /// Vega: dV/dσ (per 1 vol point)
    pub vega: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
        }
    }

    /// Scale Greeks by a factor (quantity times side)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
        }
    }

    /// Add two Greeks (for a combined book)
    pub fn add(&self, other: &Greeks) -> Self {
        Self {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            theta: self.theta + other.theta,
            vega: self.vega + other.vega,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_short_position() {
        let g = Greeks::new(-0.4, 0.02, -0.05, 0.3).scale(-2.0);
        assert_eq!(g, Greeks::new(0.8, -0.04, 0.1, -0.6));
    }

    #[test]
    fn test_add() {
        let a = Greeks::new(-0.5, 0.01, -0.02, 0.2);
        let b = Greeks::new(0.75, 0.0, 0.0, 0.0);
        let sum = a.add(&b);
        assert!((sum.delta - 0.25).abs() < 1e-12);
        assert_eq!(sum.gamma, 0.01);
    }
}
