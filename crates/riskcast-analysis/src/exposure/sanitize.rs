//! Risk record sanitizing. Never fails; every fix is reported as a warning.

use riskcast_core::types::{MitigationProfile, Risk};

use super::types::SanitationWarning;

struct Sanitizer {
    risk_id: String,
    warnings: Vec<SanitationWarning>,
}

impl Sanitizer {
    fn warn(&mut self, field: &str, message: String) {
        self.warnings.push(SanitationWarning {
            risk_id: self.risk_id.clone(),
            field: field.to_string(),
            message,
        });
    }

    fn unit(&mut self, field: &str, value: f64) -> f64 {
        if !value.is_finite() {
            self.warn(field, format!("non-finite value {value} replaced with 0"));
            0.0
        } else if !(0.0..=1.0).contains(&value) {
            let clamped = value.clamp(0.0, 1.0);
            self.warn(field, format!("value {value} clamped to {clamped}"));
            clamped
        } else {
            value
        }
    }

    fn non_negative(&mut self, field: &str, value: f64) -> f64 {
        if !value.is_finite() {
            self.warn(field, format!("non-finite value {value} replaced with 0"));
            0.0
        } else if value < 0.0 {
            self.warn(field, format!("negative value {value} replaced with 0"));
            0.0
        } else {
            value
        }
    }

    fn mitigation(&mut self, profile: &MitigationProfile) -> MitigationProfile {
        MitigationProfile {
            status: profile.status,
            effectiveness: self.unit("mitigation.effectiveness", profile.effectiveness),
            confidence: self.unit("mitigation.confidence", profile.confidence),
            reduces: self.unit("mitigation.reduces", profile.reduces),
            lag_months: profile.lag_months,
        }
    }
}

/// Return a cleaned copy of `risk` plus the fixes applied.
///
/// `index` is the risk's position in its portfolio and names risks that
/// arrive without an id (`risk-{index}`).
pub fn sanitize_risk(risk: &Risk, index: usize) -> (Risk, Vec<SanitationWarning>) {
    let trimmed = risk.id.trim();
    let id = if trimmed.is_empty() {
        format!("risk-{index}")
    } else {
        trimmed.to_string()
    };

    let mut s = Sanitizer {
        risk_id: id.clone(),
        warnings: Vec::new(),
    };
    if trimmed.is_empty() {
        s.warn("id", format!("missing id replaced with {id}"));
    }

    let cleaned = Risk {
        id,
        category: risk.category.trim().to_string(),
        probability: s.unit("probability", risk.probability),
        base_cost_impact: s.non_negative("baseCostImpact", risk.base_cost_impact),
        schedule_impact_days: s.non_negative("scheduleImpactDays", risk.schedule_impact_days),
        sensitivity: s.unit("sensitivity", risk.sensitivity),
        escalation_persistence: s.unit("escalationPersistence", risk.escalation_persistence),
        time_profile: risk.time_profile.clone(),
        mitigation: risk.mitigation.as_ref().map(|m| s.mitigation(m)),
        score_history: risk.score_history.clone(),
        cost_range: risk.cost_range.map(|r| r.sanitized()),
        schedule_range: risk.schedule_range.map(|r| r.sanitized()),
    };

    (cleaned, s.warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_risk_has_no_warnings() {
        let risk = Risk::new("r1", "ops", 0.3, 1_000.0);
        let (cleaned, warnings) = sanitize_risk(&risk, 0);
        assert!(warnings.is_empty());
        assert_eq!(cleaned, risk);
    }

    #[test]
    fn missing_id_is_named_by_position() {
        let risk = Risk::new("  ", "ops", 0.3, 1_000.0);
        let (cleaned, warnings) = sanitize_risk(&risk, 4);
        assert_eq!(cleaned.id, "risk-4");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "id");
    }

    #[test]
    fn out_of_range_fields_are_clamped_and_reported() {
        let risk = Risk {
            sensitivity: f64::NAN,
            ..Risk::new("r2", "ops", 1.7, -50.0)
        };
        let (cleaned, warnings) = sanitize_risk(&risk, 0);
        assert_eq!(cleaned.probability, 1.0);
        assert_eq!(cleaned.base_cost_impact, 0.0);
        assert_eq!(cleaned.sensitivity, 0.0);
        let fields: Vec<&str> = warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["probability", "baseCostImpact", "sensitivity"]);
    }
}
