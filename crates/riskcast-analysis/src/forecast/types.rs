//! Forecast types: projected points, per-risk forecasts, projection output.

use std::collections::BTreeMap;
use std::fmt;

use riskcast_core::types::Scenario;
use serde::{Deserialize, Serialize};

use super::confidence::ConfidenceBand;
use super::pressure::PortfolioForwardPressure;
use crate::signals::{EarlyWarningReason, FragilityResult, InstabilityResult};

/// Direction of a risk's recent score trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentumDirection {
    /// Score is climbing toward the critical band.
    Rising,
    /// Score is easing.
    Falling,
    Stable,
}

impl MomentumDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for MomentumDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One projected review cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// 1-based cycle offset from now.
    pub step: u32,
    pub projected_score: f64,
    pub projected_delta_from_now: f64,
    /// Confidence in this point (0.0-1.0), decaying with distance.
    pub confidence: f64,
}

/// Forward projection of one risk under one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskForecast {
    pub risk_id: String,
    pub horizon: u32,
    pub current_score: f64,
    /// Average score change per cycle the projection started from.
    pub momentum: f64,
    pub direction: MomentumDirection,
    pub points: Vec<ForecastPoint>,
    /// First step whose projected score is critical.
    pub time_to_critical: Option<u32>,
    /// Current score or any projected step is critical.
    pub crosses_critical_within_window: bool,
    /// Currently below the critical band and projected to enter it.
    pub projected_critical: bool,
}

impl RiskForecast {
    /// Projected score at the end of the horizon, or the current score
    /// when the horizon is empty.
    pub fn final_score(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.projected_score)
            .unwrap_or(self.current_score)
    }
}

/// Time-to-critical under each projection profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScenarioTtc {
    pub conservative: Option<u32>,
    pub neutral: Option<u32>,
    pub aggressive: Option<u32>,
}

impl ScenarioTtc {
    pub fn get(&self, scenario: Scenario) -> Option<u32> {
        match scenario {
            Scenario::Conservative => self.conservative,
            Scenario::Neutral => self.neutral,
            Scenario::Aggressive => self.aggressive,
        }
    }
}

/// Baseline and mitigated forecasts for one risk, enriched with
/// confidence and governance signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMitigationForecast {
    pub risk_id: String,
    pub baseline: RiskForecast,
    pub mitigated: RiskForecast,
    /// The mitigated forecast still reaches the critical band.
    pub mitigation_insufficient: bool,
    pub time_to_critical_baseline: Option<u32>,
    pub time_to_critical_mitigated: Option<u32>,
    /// Forecast confidence (0-100).
    pub forecast_confidence: u8,
    pub confidence_band: ConfidenceBand,
    pub scenario_ttc: ScenarioTtc,
    pub instability: InstabilityResult,
    pub fragility: FragilityResult,
    pub early_warning: bool,
    pub early_warning_reasons: Vec<EarlyWarningReason>,
    pub projection_profile_used: Scenario,
}

/// Output of a portfolio projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardProjection {
    /// Forecasts keyed by risk id.
    pub forecasts: BTreeMap<String, RiskMitigationForecast>,
    pub forward_pressure: PortfolioForwardPressure,
}
