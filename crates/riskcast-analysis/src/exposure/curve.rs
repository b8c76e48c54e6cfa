//! Per-risk exposure curve.

use riskcast_core::constants::finite_or_zero;
use riskcast_core::types::{Risk, Scenario};

use super::mitigation::compute_mitigation_adjustment;
use super::scenario::apply_scenario;
use super::time_weights::build_time_weights;
use super::types::RiskExposureCurve;

/// Monthly exposure for one risk under a scenario.
///
/// ```text
/// exposure[m] = adjProbability × adjImpact × weight[m]
///             × mitigationProb[m] × mitigationImpact[m]
/// ```
///
/// Non-finite terms contribute 0; `total` is the sum of the series.
pub fn compute_risk_exposure_curve(
    risk: &Risk,
    scenario: Scenario,
    horizon_months: usize,
) -> RiskExposureCurve {
    let adjusted = apply_scenario(risk, scenario);
    let weights = build_time_weights(risk, horizon_months);
    let base = finite_or_zero(adjusted.probability * adjusted.base_cost_impact);

    let monthly_exposure: Vec<f64> = weights
        .iter()
        .enumerate()
        .map(|(month, weight)| {
            let mitigation = compute_mitigation_adjustment(risk, month);
            finite_or_zero(
                base * weight * mitigation.prob_multiplier * mitigation.impact_multiplier,
            )
        })
        .collect();

    let total = finite_or_zero(monthly_exposure.iter().sum());

    RiskExposureCurve {
        risk_id: risk.id.clone(),
        category: risk.category.clone(),
        scenario,
        monthly_exposure,
        total,
    }
}
