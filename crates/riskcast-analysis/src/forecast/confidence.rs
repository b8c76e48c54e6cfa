//! Forecast confidence: how far a risk's history can be trusted to
//! extrapolate, scored 0-100 from depth, directional stability, and
//! volatility of the trailing window.

use std::fmt;

use riskcast_core::config::{defaults, ConfidenceConfig};
use riskcast_core::types::RiskSnapshot;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

const DEPTH_WEIGHT: f64 = 0.35;
const STABILITY_WEIGHT: f64 = 0.40;
const VOLATILITY_WEIGHT: f64 = 0.25;

/// Each point of delta standard deviation costs this many penalty points.
const VOLATILITY_SCALE: f64 = 10.0;

/// Coarse classification of a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    /// score < 40
    Low,
    /// 40 <= score < 70
    Medium,
    /// score >= 70
    High,
}

impl ConfidenceBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::High
        } else if score >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Component scores behind a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBreakdown {
    pub points_used: usize,
    pub depth: f64,
    pub stability: f64,
    pub volatility_penalty: f64,
}

/// Confidence in a risk's forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastConfidence {
    pub score: u8,
    pub band: ConfidenceBand,
    /// Absent when history was too short to score.
    pub breakdown: Option<ConfidenceBreakdown>,
    pub insufficient: bool,
}

impl ForecastConfidence {
    /// Confidence as a 0.0-1.0 fraction.
    pub fn fraction(&self) -> f64 {
        f64::from(self.score) / 100.0
    }
}

/// Scores forecast confidence over a trailing window of snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastConfidenceScorer {
    window: usize,
    insufficient_score: u8,
}

impl ForecastConfidenceScorer {
    pub fn new(window: usize, insufficient_score: u8) -> Self {
        Self {
            window: window.max(2),
            insufficient_score: insufficient_score.min(100),
        }
    }

    pub fn from_config(config: &ConfidenceConfig) -> Self {
        Self::new(
            config.effective_window(),
            config.effective_insufficient_score(),
        )
    }

    /// Trailing snapshots considered.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Score time-ordered snapshots (oldest first).
    pub fn score(&self, history: &[RiskSnapshot]) -> ForecastConfidence {
        let scores: Vec<f64> = history.iter().map(RiskSnapshot::score).collect();
        self.score_values(&scores)
    }

    /// Score a time-ordered series of composite scores.
    pub fn score_values(&self, scores: &[f64]) -> ForecastConfidence {
        if scores.len() < 2 {
            return ForecastConfidence {
                score: self.insufficient_score,
                band: ConfidenceBand::from_score(self.insufficient_score),
                breakdown: None,
                insufficient: true,
            };
        }

        let window = &scores[scores.len().saturating_sub(self.window)..];
        let deltas: Vec<f64> = window.windows(2).map(|w| w[1] - w[0]).collect();

        let depth = depth_score(window.len());
        let stability = stability_score(&deltas);
        let volatility_penalty = volatility_penalty(&deltas);

        let raw = DEPTH_WEIGHT * depth
            + STABILITY_WEIGHT * stability
            + VOLATILITY_WEIGHT * (100.0 - volatility_penalty);
        let score = raw.clamp(0.0, 100.0).round() as u8;

        ForecastConfidence {
            score,
            band: ConfidenceBand::from_score(score),
            breakdown: Some(ConfidenceBreakdown {
                points_used: window.len(),
                depth,
                stability,
                volatility_penalty,
            }),
            insufficient: false,
        }
    }
}

impl Default for ForecastConfidenceScorer {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_CONFIDENCE_WINDOW,
            defaults::DEFAULT_INSUFFICIENT_HISTORY_SCORE,
        )
    }
}

/// Score a risk's history with the default window.
pub fn compute_forecast_confidence(history: &[RiskSnapshot]) -> ForecastConfidence {
    ForecastConfidenceScorer::default().score(history)
}

/// Depth lookup by points in the window. Windows wider than six score as six.
fn depth_score(points: usize) -> f64 {
    match points {
        0 | 1 => 0.0,
        2 => 40.0,
        3 => 55.0,
        4 => 70.0,
        5 => 80.0,
        _ => 90.0,
    }
}

/// Share of deltas moving in the majority direction, 0-100.
/// Zero deltas form their own class.
fn stability_score(deltas: &[f64]) -> f64 {
    if deltas.is_empty() {
        return 100.0;
    }
    let rising = deltas.iter().filter(|d| **d > 0.0).count();
    let falling = deltas.iter().filter(|d| **d < 0.0).count();
    let flat = deltas.len() - rising - falling;
    let majority = rising.max(falling).max(flat);
    100.0 * majority as f64 / deltas.len() as f64
}

fn volatility_penalty(deltas: &[f64]) -> f64 {
    let sigma = deltas.iter().population_std_dev();
    if sigma.is_finite() {
        (sigma * VOLATILITY_SCALE).min(100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(values: &[f64]) -> ForecastConfidence {
        ForecastConfidenceScorer::default().score_values(values)
    }

    #[test]
    fn short_history_is_insufficient() {
        for values in [&[][..], &[55.0][..]] {
            let c = score(values);
            assert_eq!(c.score, 15);
            assert_eq!(c.band, ConfidenceBand::Low);
            assert!(c.insufficient);
            assert!(c.breakdown.is_none());
        }
    }

    #[test]
    fn steady_climb_scores_high() {
        let c = score(&[20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(c.score, 93);
        assert_eq!(c.band, ConfidenceBand::High);
    }

    #[test]
    fn window_is_capped_at_six() {
        let c = score(&[0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
        assert_eq!(c.breakdown.map(|b| b.points_used), Some(6));
    }

    #[test]
    fn zero_deltas_are_their_own_class() {
        assert_eq!(stability_score(&[1.0, 0.0, 0.0, -1.0]), 50.0);
        assert_eq!(stability_score(&[0.0, 0.0]), 100.0);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(ConfidenceBand::from_score(39), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_score(40), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_score(69), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_score(70), ConfidenceBand::High);
    }
}
