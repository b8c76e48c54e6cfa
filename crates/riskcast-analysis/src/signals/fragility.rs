//! Structural fragility: persistent instability that is getting worse and
//! poorly understood.

use std::fmt;

use riskcast_core::constants::{clamp_score, finite_or_zero};
use serde::{Deserialize, Serialize};

const TREND_CAP: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragilityLabel {
    /// score < 35
    Stable,
    /// 35 <= score < 60
    Watch,
    /// score >= 60
    StructurallyFragile,
}

impl FragilityLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 60.0 {
            Self::StructurallyFragile
        } else if score >= 35.0 {
            Self::Watch
        } else {
            Self::Stable
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Watch => "watch",
            Self::StructurallyFragile => "structurally_fragile",
        }
    }
}

impl fmt::Display for FragilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragilityResult {
    /// 0-100.
    pub score: f64,
    pub label: FragilityLabel,
    /// Change in instability since the previous cycle; 0 without a prior.
    pub trend: f64,
}

/// Fragility from current and prior instability plus forecast confidence.
///
/// ```text
/// score = 0.6*I + 0.25*(50 + clamp(trend, -50, 50)) + 0.15*(100 - C)
/// ```
pub fn compute_fragility(current: f64, prior: Option<f64>, confidence: u8) -> FragilityResult {
    let current = clamp_score(current);
    let trend = prior
        .map(|p| current - clamp_score(p))
        .map(finite_or_zero)
        .unwrap_or(0.0);
    let confidence = f64::from(confidence.min(100));

    let score = clamp_score(
        0.6 * current
            + 0.25 * (TREND_CAP + trend.clamp(-TREND_CAP, TREND_CAP))
            + 0.15 * (100.0 - confidence),
    );

    FragilityResult {
        score,
        label: FragilityLabel::from_score(score),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calm_well_understood_risk_is_stable() {
        let r = compute_fragility(0.0, Some(0.0), 100);
        assert_eq!(r.score, 12.5);
        assert_eq!(r.label, FragilityLabel::Stable);
    }

    #[test]
    fn worsening_instability_is_fragile() {
        let r = compute_fragility(80.0, Some(40.0), 30);
        assert_eq!(r.trend, 40.0);
        assert_eq!(r.label, FragilityLabel::StructurallyFragile);
    }

    #[test]
    fn missing_prior_has_no_trend() {
        let r = compute_fragility(50.0, None, 50);
        assert_eq!(r.trend, 0.0);
        assert_eq!(r.label, FragilityLabel::Watch);
    }
}
