/// riskcast version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Composite scores live on a 0..=100 scale.
pub const MIN_COMPOSITE_SCORE: f64 = 0.0;
pub const MAX_COMPOSITE_SCORE: f64 = 100.0;

/// Maximum number of score snapshots retained per risk.
pub const MAX_HISTORY_PER_RISK: usize = 52;

/// Tolerance used when checking that normalized weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Allowed band for non-neutral decay values, as multiples of neutral.
pub const PROFILE_BOUND_LOWER: f64 = 0.5;
pub const PROFILE_BOUND_UPPER: f64 = 1.5;

/// Clamp a value to [0, 1], mapping non-finite input to `fallback`.
pub fn clamp01_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

/// Clamp a composite score to [0, 100], mapping non-finite input to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_COMPOSITE_SCORE, MAX_COMPOSITE_SCORE)
    } else {
        MIN_COMPOSITE_SCORE
    }
}

/// Coerce a non-finite value to zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
