//! Exposure engine types: adjusted parameters, curves, portfolio results.

use std::collections::BTreeMap;

use riskcast_core::types::Scenario;
use serde::{Deserialize, Serialize};

/// Risk parameters after scenario multipliers have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedParams {
    pub probability: f64,
    pub base_cost_impact: f64,
    pub escalation_persistence: f64,
    pub sensitivity: f64,
}

/// Month-specific multipliers contributed by a mitigation plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationAdjustment {
    pub prob_multiplier: f64,
    pub impact_multiplier: f64,
}

impl MitigationAdjustment {
    /// No mitigation benefit.
    pub const NEUTRAL: Self = Self {
        prob_multiplier: 1.0,
        impact_multiplier: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.prob_multiplier == 1.0 && self.impact_multiplier == 1.0
    }
}

/// Monthly exposure series for a single risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskExposureCurve {
    pub risk_id: String,
    pub category: String,
    pub scenario: Scenario,
    pub monthly_exposure: Vec<f64>,
    pub total: f64,
}

/// Options for portfolio aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioExposureOptions {
    /// Number of top drivers to report.
    pub top_n: usize,
    /// Collect sanitation warnings in the result.
    pub include_debug: bool,
}

impl Default for PortfolioExposureOptions {
    fn default() -> Self {
        Self {
            top_n: riskcast_core::config::defaults::DEFAULT_TOP_DRIVERS,
            include_debug: false,
        }
    }
}

/// A risk ranked by its contribution to portfolio exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureDriver {
    pub risk_id: String,
    pub category: String,
    pub total: f64,
    /// Fraction of portfolio total (0.0-1.0).
    pub share: f64,
}

/// What the concentration shares were computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcentrationBasis {
    Category,
    Risk,
}

/// How concentrated exposure is among a few categories or risks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concentration {
    /// Sum of the three largest shares (0.0-1.0).
    pub top3_share: f64,
    /// Herfindahl-Hirschman index: sum of squared shares (0.0-1.0).
    pub hhi: f64,
    pub basis: ConcentrationBasis,
}

/// A non-fatal problem found while sanitizing a risk record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitationWarning {
    pub risk_id: String,
    pub field: String,
    pub message: String,
}

/// Portfolio exposure for one scenario and horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioExposure {
    pub scenario: Scenario,
    pub horizon_months: usize,
    pub monthly_total: Vec<f64>,
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
    pub top_drivers: Vec<ExposureDriver>,
    pub concentration: Concentration,
    /// Per-risk curves, in input order.
    pub curves: Vec<RiskExposureCurve>,
    /// Sanitation warnings; only populated when debug output is requested.
    pub diagnostics: Vec<SanitationWarning>,
}
