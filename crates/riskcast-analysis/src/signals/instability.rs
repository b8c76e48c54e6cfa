//! Instability index: how erratic a risk's score trajectory is.
//!
//! ```text
//! velocity   = min(1, |momentum| / 10)
//! volatility = min(1, sigma(deltas) / 15)
//! flips      = sign changes / (non-zero deltas - 1)
//! spread     = min(1, |final_aggressive - final_conservative| / 30)
//!
//! raw   = 30*velocity + 30*volatility + 20*flips + 20*spread
//! index = clamp(raw * (1.15 - 0.3 * confidence), 0, 100)
//! ```

use riskcast_core::constants::{clamp01_or, finite_or_zero};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

const VELOCITY_SCALE: f64 = 10.0;
const VOLATILITY_SCALE: f64 = 15.0;
const SPREAD_SCALE: f64 = 30.0;

const VELOCITY_WEIGHT: f64 = 30.0;
const VOLATILITY_WEIGHT: f64 = 30.0;
const FLIP_WEIGHT: f64 = 20.0;
const SPREAD_WEIGHT: f64 = 20.0;

/// Inputs to the instability index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstabilityInputs {
    /// Average score change per cycle.
    pub momentum: f64,
    /// Cycle-to-cycle score changes, oldest first.
    pub deltas: Vec<f64>,
    /// Absolute gap between aggressive and conservative final projections.
    pub scenario_spread: f64,
    /// Forecast confidence, 0-100.
    pub confidence: u8,
}

impl InstabilityInputs {
    /// Derive deltas from a time-ordered score series.
    pub fn from_scores(scores: &[f64], momentum: f64, scenario_spread: f64, confidence: u8) -> Self {
        Self {
            momentum,
            deltas: scores.windows(2).map(|w| w[1] - w[0]).collect(),
            scenario_spread,
            confidence,
        }
    }
}

/// Normalized components, each 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstabilityComponents {
    pub velocity: f64,
    pub volatility: f64,
    pub momentum_instability: f64,
    pub scenario_spread: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InstabilityResult {
    /// 0-100.
    pub index: f64,
    pub components: InstabilityComponents,
}

pub fn compute_instability(inputs: &InstabilityInputs) -> InstabilityResult {
    let velocity = clamp01_or(finite_or_zero(inputs.momentum).abs() / VELOCITY_SCALE, 0.0);

    let sigma = if inputs.deltas.is_empty() {
        0.0
    } else {
        finite_or_zero(inputs.deltas.iter().population_std_dev())
    };
    let volatility = clamp01_or(sigma / VOLATILITY_SCALE, 0.0);

    let momentum_instability = sign_flip_ratio(&inputs.deltas);
    let scenario_spread = clamp01_or(finite_or_zero(inputs.scenario_spread).abs() / SPREAD_SCALE, 0.0);
    let confidence = clamp01_or(f64::from(inputs.confidence) / 100.0, 0.0);

    let raw = VELOCITY_WEIGHT * velocity
        + VOLATILITY_WEIGHT * volatility
        + FLIP_WEIGHT * momentum_instability
        + SPREAD_WEIGHT * scenario_spread;
    let index = (raw * (1.15 - 0.3 * confidence)).clamp(0.0, 100.0);

    InstabilityResult {
        index,
        components: InstabilityComponents {
            velocity,
            volatility,
            momentum_instability,
            scenario_spread,
            confidence,
        },
    }
}

/// Fraction of consecutive non-zero deltas that reverse direction.
fn sign_flip_ratio(deltas: &[f64]) -> f64 {
    let signs: Vec<bool> = deltas
        .iter()
        .filter(|d| d.is_finite() && **d != 0.0)
        .map(|d| *d > 0.0)
        .collect();
    if signs.len() < 2 {
        return 0.0;
    }
    let flips = signs.windows(2).filter(|w| w[0] != w[1]).count();
    flips as f64 / (signs.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_history_is_zero() {
        let inputs = InstabilityInputs::from_scores(&[50.0, 50.0, 50.0], 0.0, 0.0, 80);
        assert_eq!(compute_instability(&inputs).index, 0.0);
    }

    #[test]
    fn flip_flop_outscores_steady_climb() {
        let steady = InstabilityInputs::from_scores(&[20.0, 25.0, 30.0, 35.0], 5.0, 10.0, 88);
        let erratic = InstabilityInputs::from_scores(&[20.0, 45.0, 15.0, 40.0], 6.7, 10.0, 40);
        assert!(compute_instability(&erratic).index > compute_instability(&steady).index);
    }

    #[test]
    fn confidence_dampens_index() {
        let low = InstabilityInputs::from_scores(&[20.0, 40.0, 25.0], 2.5, 12.0, 10);
        let high = InstabilityInputs { confidence: 95, ..low.clone() };
        assert!(compute_instability(&high).index < compute_instability(&low).index);
    }

    #[test]
    fn sign_flips_ignore_zero_deltas() {
        assert_eq!(sign_flip_ratio(&[1.0, 0.0, -1.0, 1.0]), 1.0);
        assert_eq!(sign_flip_ratio(&[1.0, 2.0, 0.0]), 0.0);
        assert_eq!(sign_flip_ratio(&[]), 0.0);
    }

    #[test]
    fn index_is_bounded() {
        let inputs = InstabilityInputs {
            momentum: 1e9,
            deltas: vec![100.0, -100.0, 100.0, -100.0],
            scenario_spread: f64::INFINITY,
            confidence: 0,
        };
        let r = compute_instability(&inputs);
        assert!((0.0..=100.0).contains(&r.index));
    }
}
