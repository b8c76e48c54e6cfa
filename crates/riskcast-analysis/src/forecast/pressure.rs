//! Portfolio forward pressure: what share of the portfolio is heading into
//! the critical band, raw and discounted by forecast confidence.

use std::fmt;

use riskcast_core::constants::clamp01_or;
use riskcast_core::types::Scenario;
use serde::{Deserialize, Serialize};

use super::types::RiskMitigationForecast;

/// Weight given to a risk whose forecast confidence is unknown.
const UNKNOWN_CONFIDENCE_WEIGHT: f64 = 0.5;

/// Severity of portfolio forward pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureClass {
    /// Under 10% projected critical.
    Low,
    /// 10% to 20%.
    Moderate,
    /// Above 20% up to 35%.
    High,
    /// Above 35%.
    Severe,
}

impl PressureClass {
    /// Classify a projected-critical fraction (0.0-1.0).
    pub fn from_fraction(pct: f64) -> Self {
        if !(pct >= 0.10) {
            Self::Low
        } else if pct <= 0.20 {
            Self::Moderate
        } else if pct <= 0.35 {
            Self::High
        } else {
            Self::Severe
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for PressureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The per-risk facts pressure is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressureInput {
    pub projected_critical: bool,
    pub mitigation_insufficient: bool,
    /// Forecast confidence 0-100; `None` when unknown.
    pub forecast_confidence: Option<u8>,
}

impl From<&RiskMitigationForecast> for PressureInput {
    fn from(forecast: &RiskMitigationForecast) -> Self {
        Self {
            projected_critical: forecast.baseline.projected_critical,
            mitigation_insufficient: forecast.mitigation_insufficient,
            forecast_confidence: Some(forecast.forecast_confidence),
        }
    }
}

/// Confidence-weighted variant of the pressure figures.
///
/// Mirrors [`PortfolioForwardPressure`]; the counts are sums of per-risk
/// confidence weights rather than whole risks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedForwardPressure {
    pub total_risks: usize,
    pub projected_critical_count: f64,
    pub mitigation_insufficient_count: f64,
    pub pct_projected_critical: f64,
    pub pct_mitigation_insufficient: f64,
    pub pressure_class: PressureClass,
}

/// Portfolio-level forward pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioForwardPressure {
    pub total_risks: usize,
    pub projected_critical_count: usize,
    pub mitigation_insufficient_count: usize,
    /// Fraction of risks projected critical (0.0-1.0).
    pub pct_projected_critical: f64,
    /// Fraction of risks whose mitigation is insufficient (0.0-1.0).
    pub pct_mitigation_insufficient: f64,
    pub pressure_class: PressureClass,
    pub profile: Scenario,
    /// Absent for an empty portfolio.
    pub confidence_weighted: Option<WeightedForwardPressure>,
}

/// Aggregate pressure over per-risk inputs. An omitted profile is neutral.
pub fn compute_portfolio_forward_pressure(
    inputs: &[PressureInput],
    profile: Option<Scenario>,
) -> PortfolioForwardPressure {
    let total_risks = inputs.len();
    let projected_critical_count = inputs.iter().filter(|i| i.projected_critical).count();
    let mitigation_insufficient_count =
        inputs.iter().filter(|i| i.mitigation_insufficient).count();

    let pct_projected_critical = fraction(projected_critical_count as f64, total_risks);
    let pct_mitigation_insufficient = fraction(mitigation_insufficient_count as f64, total_risks);

    let confidence_weighted = (total_risks > 0).then(|| {
        let mut projected_critical_count = 0.0;
        let mut mitigation_insufficient_count = 0.0;
        for input in inputs {
            let weight = confidence_weight(input.forecast_confidence);
            if input.projected_critical {
                projected_critical_count += weight;
            }
            if input.mitigation_insufficient {
                mitigation_insufficient_count += weight;
            }
        }
        let pct = fraction(projected_critical_count, total_risks);
        WeightedForwardPressure {
            total_risks,
            projected_critical_count,
            mitigation_insufficient_count,
            pct_projected_critical: pct,
            pct_mitigation_insufficient: fraction(mitigation_insufficient_count, total_risks),
            pressure_class: PressureClass::from_fraction(pct),
        }
    });

    PortfolioForwardPressure {
        total_risks,
        projected_critical_count,
        mitigation_insufficient_count,
        pct_projected_critical,
        pct_mitigation_insufficient,
        pressure_class: PressureClass::from_fraction(pct_projected_critical),
        profile: profile.unwrap_or_default(),
        confidence_weighted,
    }
}

fn confidence_weight(confidence: Option<u8>) -> f64 {
    match confidence {
        Some(c) => clamp01_or(f64::from(c) / 100.0, UNKNOWN_CONFIDENCE_WEIGHT),
        None => UNKNOWN_CONFIDENCE_WEIGHT,
    }
}

fn fraction(count: f64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count / total as f64).clamp(0.0, 1.0)
    }
}
