//! Sampling helpers: triangular draws, percentiles, sample retention.

use riskcast_core::types::ImpactRange;
use statrs::distribution::{Continuous, ContinuousCDF, Triangular};
use statrs::statistics::Statistics;

use super::types::{OutcomeDistribution, Percentiles};

/// Map a uniform draw through the triangular inverse CDF of `range`.
///
/// A degenerate range (min == max) cannot form a distribution; the most
/// likely value is returned instead.
pub fn sample_triangular(range: &ImpactRange, u: f64) -> f64 {
    match Triangular::new(range.min, range.max, range.most_likely) {
        Ok(dist) => dist.inverse_cdf(u.clamp(0.0, 1.0)),
        Err(_) => range.most_likely,
    }
}

/// Probability density of `range`'s triangular distribution at `x`.
/// Zero for degenerate ranges. Intended for charting only.
pub fn triangular_density(x: f64, range: &ImpactRange) -> f64 {
    let range = range.sanitized();
    Triangular::new(range.min, range.max, range.most_likely)
        .map(|dist| dist.pdf(x))
        .unwrap_or(0.0)
}

/// Percentile `p` (0.0-1.0) of a sorted slice by interpolated rank `p * (n - 1)`.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Evenly strided subset of a sorted slice, keeping both ends.
pub fn retain_strided(sorted: &[f64], cap: usize) -> Vec<f64> {
    let n = sorted.len();
    if n <= cap {
        return sorted.to_vec();
    }
    match cap {
        0 => Vec::new(),
        1 => vec![sorted[(n - 1) / 2]],
        _ => (0..cap).map(|i| sorted[i * (n - 1) / (cap - 1)]).collect(),
    }
}

/// Summarize raw samples. Sorts in place.
pub fn summarize(samples: &mut [f64], retain: usize) -> OutcomeDistribution {
    if samples.is_empty() {
        return OutcomeDistribution::default();
    }
    samples.sort_by(|a, b| a.total_cmp(b));

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let std_dev = samples.iter().population_std_dev();

    OutcomeDistribution {
        percentiles: Percentiles {
            p50: percentile(samples, 0.50),
            p80: percentile(samples, 0.80),
            p90: percentile(samples, 0.90),
        },
        mean: if mean.is_finite() { mean } else { 0.0 },
        std_dev: if std_dev.is_finite() { std_dev } else { 0.0 },
        min: samples[0],
        max: samples[samples.len() - 1],
        samples: retain_strided(samples, retain),
    }
}
