//! Time weight builder: normalized per-month weight curves.

use riskcast_core::types::{Risk, TimeProfile, TimeProfileKind};

/// Build the normalized weight curve for a risk over `horizon_months`.
///
/// The result has exactly `horizon_months` non-negative entries summing to 1.
/// A horizon of 0 yields an empty curve.
pub fn build_time_weights(risk: &Risk, horizon_months: usize) -> Vec<f64> {
    build_weights(risk.time_profile.as_ref(), horizon_months)
}

/// Build a normalized weight curve from an optional profile.
pub fn build_weights(profile: Option<&TimeProfile>, horizon_months: usize) -> Vec<f64> {
    if horizon_months == 0 {
        return Vec::new();
    }
    let n = horizon_months;

    let raw: Vec<f64> = match profile {
        None => vec![1.0; n],
        Some(TimeProfile::Named(kind)) => named_shape(*kind, n),
        Some(TimeProfile::Custom(values)) => (0..n)
            .map(|m| values.get(m).copied().unwrap_or(0.0))
            .map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 })
            .collect(),
    };

    normalize(raw)
}

fn named_shape(kind: TimeProfileKind, n: usize) -> Vec<f64> {
    match kind {
        TimeProfileKind::Front => (0..n).map(|m| (n - m) as f64).collect(),
        TimeProfileKind::Back => (0..n).map(|m| (m + 1) as f64).collect(),
        TimeProfileKind::Mid => (0..n)
            .map(|m| {
                let x = (m as f64 + 0.5) / n as f64;
                4.0 * (1.0 - x) * x
            })
            .collect(),
    }
}

/// Scale to sum 1; fall back to uniform when the sum is not positive.
fn normalize(raw: Vec<f64>) -> Vec<f64> {
    let n = raw.len();
    let sum: f64 = raw.iter().sum();
    if !(sum > 0.0) || !sum.is_finite() {
        return vec![1.0 / n as f64; n];
    }
    raw.into_iter().map(|w| w / sum).collect()
}
