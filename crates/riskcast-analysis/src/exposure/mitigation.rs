//! Mitigation adjuster: month-indexed probability/impact multipliers.

use riskcast_core::constants::clamp01_or;
use riskcast_core::types::Risk;

use super::types::MitigationAdjustment;

/// Multipliers a risk's mitigation contributes in `month_index`.
///
/// Returns exactly (1, 1) when there is no mitigation, it is only
/// planned, or the lag has not elapsed yet. Otherwise:
///
/// ```text
/// impact = clamp01(1 - reduces * effectiveness)
/// prob   = clamp01(1 - effectiveness * 0.5)
/// ```
pub fn compute_mitigation_adjustment(risk: &Risk, month_index: usize) -> MitigationAdjustment {
    let Some(profile) = risk.mitigation.as_ref() else {
        return MitigationAdjustment::NEUTRAL;
    };
    if !profile.status.is_in_effect() || month_index < profile.lag_months as usize {
        return MitigationAdjustment::NEUTRAL;
    }

    let effectiveness = clamp01_or(profile.effectiveness, 0.0);
    let reduces = clamp01_or(profile.reduces, 0.0);

    let impact = clamp01_or(1.0 - reduces * effectiveness, 1.0);
    let prob = clamp01_or(1.0 - effectiveness * 0.5, 1.0);

    if !impact.is_finite() || !prob.is_finite() {
        return MitigationAdjustment::NEUTRAL;
    }

    MitigationAdjustment {
        prob_multiplier: prob,
        impact_multiplier: impact,
    }
}
