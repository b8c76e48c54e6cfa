//! The risk record and its nested profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::snapshot::ScoreSnapshot;

/// Lifecycle state of a mitigation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MitigationStatus {
    #[default]
    None,
    Planned,
    Active,
    Completed,
}

impl MitigationStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether the mitigation is delivering benefit right now.
    pub fn is_in_effect(&self) -> bool {
        matches!(self, Self::Active | Self::Completed)
    }
}

impl fmt::Display for MitigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mitigation plan attached to a risk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MitigationProfile {
    pub status: MitigationStatus,
    /// How well the mitigation works once in effect (0.0-1.0).
    pub effectiveness: f64,
    /// How sure the owner is about `effectiveness` (0.0-1.0).
    pub confidence: f64,
    /// Fraction of the impact the mitigation can remove (0.0-1.0).
    pub reduces: f64,
    /// Months before the benefit starts to apply.
    pub lag_months: u32,
}

/// Named temporal shapes for spreading exposure over a horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeProfileKind {
    /// Heavier in early months.
    Front,
    /// Peaks mid-horizon.
    Mid,
    /// Heavier in late months.
    Back,
}

impl TimeProfileKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Mid => "mid",
            Self::Back => "back",
        }
    }
}

/// A risk's time profile: a named shape or caller-supplied raw weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeProfile {
    Named(TimeProfileKind),
    Custom(Vec<f64>),
}

/// Three-point estimate (min, most likely, max) for an impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRange {
    pub min: f64,
    pub most_likely: f64,
    pub max: f64,
}

impl ImpactRange {
    pub fn new(min: f64, most_likely: f64, max: f64) -> Self {
        Self {
            min,
            most_likely,
            max,
        }
    }

    /// Default spread around a single-point impact: 0.5x / 1x / 2x.
    pub fn around(base: f64) -> Self {
        let base = if base.is_finite() { base.max(0.0) } else { 0.0 };
        Self::new(base * 0.5, base, base * 2.0)
    }

    /// Non-negative, finite, and ordered so that min <= most_likely <= max.
    pub fn sanitized(&self) -> Self {
        let fix = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let mut points = [fix(self.min), fix(self.most_likely), fix(self.max)];
        points.sort_by(|a, b| a.total_cmp(b));
        Self::new(points[0], points[1], points[2])
    }

    /// Multiply every point by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.most_likely * factor, self.max * factor)
    }
}

/// An identified project risk.
///
/// All numeric fields are trusted only after sanitizing; engines clamp and
/// default rather than reject malformed records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub category: String,
    /// Likelihood of the risk materializing (0.0-1.0).
    pub probability: f64,
    /// Expected cost if the risk materializes.
    pub base_cost_impact: f64,
    pub schedule_impact_days: f64,
    /// Gates scenario effects: 0.0 makes the risk scenario-invariant.
    pub sensitivity: f64,
    pub escalation_persistence: f64,
    pub time_profile: Option<TimeProfile>,
    pub mitigation: Option<MitigationProfile>,
    /// Append-only, time-ordered score history (oldest first).
    pub score_history: Vec<ScoreSnapshot>,
    /// Explicit cost estimate for simulation; derived from
    /// `base_cost_impact` when absent.
    pub cost_range: Option<ImpactRange>,
    /// Explicit schedule estimate for simulation; derived from
    /// `schedule_impact_days` when absent.
    pub schedule_range: Option<ImpactRange>,
}

impl Risk {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        probability: f64,
        base_cost_impact: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            probability,
            base_cost_impact,
            ..Default::default()
        }
    }

    /// The cost estimate used by simulation.
    pub fn effective_cost_range(&self) -> ImpactRange {
        self.cost_range
            .unwrap_or_else(|| ImpactRange::around(self.base_cost_impact))
            .sanitized()
    }

    /// The schedule estimate used by simulation.
    pub fn effective_schedule_range(&self) -> ImpactRange {
        self.schedule_range
            .unwrap_or_else(|| ImpactRange::around(self.schedule_impact_days))
            .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_cost_range_brackets_base() {
        let risk = Risk::new("r1", "supply", 0.4, 100_000.0);
        let range = risk.effective_cost_range();
        assert_eq!(range.min, 50_000.0);
        assert_eq!(range.most_likely, 100_000.0);
        assert_eq!(range.max, 200_000.0);
    }

    #[test]
    fn sanitized_range_is_ordered_and_finite() {
        let range = ImpactRange::new(f64::NAN, 300.0, -5.0).sanitized();
        assert_eq!(range.min, 0.0);
        assert_eq!(range.most_likely, 0.0);
        assert_eq!(range.max, 300.0);
    }

    #[test]
    fn time_profile_accepts_names_and_arrays() {
        let named: TimeProfile = serde_json::from_str("\"back\"").unwrap();
        assert_eq!(named, TimeProfile::Named(TimeProfileKind::Back));

        let custom: TimeProfile = serde_json::from_str("[1.0, 2.0, 0.5]").unwrap();
        assert_eq!(custom, TimeProfile::Custom(vec![1.0, 2.0, 0.5]));
    }

    #[test]
    fn risk_deserializes_with_missing_fields() {
        let risk: Risk = serde_json::from_str(r#"{"id":"r9","probability":0.2}"#).unwrap();
        assert_eq!(risk.id, "r9");
        assert!(risk.mitigation.is_none());
        assert!(risk.score_history.is_empty());
    }
}
