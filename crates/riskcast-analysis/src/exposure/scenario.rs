//! Scenario engine: sensitivity-gated multipliers per named scenario.

use riskcast_core::constants::clamp01_or;
use riskcast_core::types::{Risk, Scenario};

use super::types::AdjustedParams;

/// Raw multipliers for one scenario, before sensitivity gating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioMultipliers {
    pub probability: f64,
    pub impact: f64,
    pub persistence: f64,
    pub sensitivity: f64,
}

impl ScenarioMultipliers {
    /// The fixed multiplier table.
    ///
    /// Conservative is below 1 on every field, neutral is exactly 1,
    /// aggressive is above 1.
    pub fn for_scenario(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Conservative => Self {
                probability: 0.85,
                impact: 0.90,
                persistence: 0.85,
                sensitivity: 0.90,
            },
            Scenario::Neutral => Self {
                probability: 1.0,
                impact: 1.0,
                persistence: 1.0,
                sensitivity: 1.0,
            },
            Scenario::Aggressive => Self {
                probability: 1.20,
                impact: 1.15,
                persistence: 1.20,
                sensitivity: 1.10,
            },
        }
    }
}

/// Scale a multiplier's deviation from 1 by the risk's sensitivity:
/// `1 + (m - 1) * clamp(s, 0, 1)`.
///
/// Sensitivity 0 always yields exactly 1.
pub fn effective_multiplier(multiplier: f64, sensitivity: f64) -> f64 {
    1.0 + (multiplier - 1.0) * clamp01_or(sensitivity, 0.0)
}

/// Apply a scenario to a risk. Never mutates the risk; every output is
/// clamped back into its valid domain.
pub fn apply_scenario(risk: &Risk, scenario: Scenario) -> AdjustedParams {
    let m = ScenarioMultipliers::for_scenario(scenario);
    let sensitivity = clamp01_or(risk.sensitivity, 0.0);

    let probability = clamp01_or(risk.probability, 0.0);
    let impact = if risk.base_cost_impact.is_finite() {
        risk.base_cost_impact.max(0.0)
    } else {
        0.0
    };
    let persistence = clamp01_or(risk.escalation_persistence, 0.0);

    let adjusted_impact = impact * effective_multiplier(m.impact, sensitivity);

    AdjustedParams {
        probability: clamp01_or(probability * effective_multiplier(m.probability, sensitivity), 0.0),
        base_cost_impact: if adjusted_impact.is_finite() {
            adjusted_impact.max(0.0)
        } else {
            0.0
        },
        escalation_persistence: clamp01_or(
            persistence * effective_multiplier(m.persistence, sensitivity),
            0.0,
        ),
        sensitivity: clamp01_or(sensitivity * effective_multiplier(m.sensitivity, sensitivity), 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(sensitivity: f64) -> Risk {
        Risk {
            sensitivity,
            escalation_persistence: 0.5,
            ..Risk::new("r1", "ops", 0.5, 1_000.0)
        }
    }

    #[test]
    fn neutral_is_identity() {
        let r = risk(0.8);
        let adjusted = apply_scenario(&r, Scenario::Neutral);
        assert_eq!(adjusted.probability, 0.5);
        assert_eq!(adjusted.base_cost_impact, 1_000.0);
        assert_eq!(adjusted.escalation_persistence, 0.5);
        assert_eq!(adjusted.sensitivity, 0.8);
    }

    #[test]
    fn zero_sensitivity_collapses_scenarios() {
        let r = risk(0.0);
        let c = apply_scenario(&r, Scenario::Conservative);
        let n = apply_scenario(&r, Scenario::Neutral);
        let a = apply_scenario(&r, Scenario::Aggressive);
        assert_eq!(c, n);
        assert_eq!(n, a);
    }

    #[test]
    fn full_sensitivity_orders_scenarios() {
        let r = risk(1.0);
        let c = apply_scenario(&r, Scenario::Conservative);
        let n = apply_scenario(&r, Scenario::Neutral);
        let a = apply_scenario(&r, Scenario::Aggressive);
        assert!(c.probability < n.probability && n.probability < a.probability);
        assert!(c.base_cost_impact < n.base_cost_impact && n.base_cost_impact < a.base_cost_impact);
    }

    #[test]
    fn aggressive_probability_stays_in_range() {
        let r = Risk {
            sensitivity: 1.0,
            ..Risk::new("r2", "ops", 0.95, 10.0)
        };
        assert_eq!(apply_scenario(&r, Scenario::Aggressive).probability, 1.0);
    }

    #[test]
    fn malformed_inputs_are_clamped() {
        let r = Risk {
            sensitivity: f64::NAN,
            escalation_persistence: 4.0,
            ..Risk::new("r3", "ops", -0.3, f64::INFINITY)
        };
        let adjusted = apply_scenario(&r, Scenario::Aggressive);
        assert_eq!(adjusted.probability, 0.0);
        assert_eq!(adjusted.base_cost_impact, 0.0);
        assert_eq!(adjusted.escalation_persistence, 1.0);
        assert_eq!(adjusted.sensitivity, 0.0);
    }
}
