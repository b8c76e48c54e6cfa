//! Simulation result types: percentiles, outcome distributions.

use riskcast_core::types::Scenario;
use serde::{Deserialize, Serialize};

/// P50/P80/P90 of a simulated outcome.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Percentiles {
    pub p50: f64,
    pub p80: f64,
    pub p90: f64,
}

impl Percentiles {
    /// Check ordering: p50 <= p80 <= p90.
    pub fn is_valid(&self) -> bool {
        self.p50 <= self.p80 && self.p80 <= self.p90
    }
}

/// One bucket of a histogram over simulated samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Summary of one simulated outcome (portfolio cost or schedule).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeDistribution {
    pub percentiles: Percentiles,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Sorted samples; an evenly strided subset when the run produced
    /// more than the retention cap.
    pub samples: Vec<f64>,
}

impl OutcomeDistribution {
    /// Bucket the retained samples into `bins` equal-width bins spanning
    /// [min, max]. The last bin is closed on the right.
    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        if bins == 0 || self.samples.is_empty() {
            return Vec::new();
        }
        let lo = self.samples[0];
        let hi = self.samples[self.samples.len() - 1];
        let width = (hi - lo) / bins as f64;

        let mut out: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
                count: 0,
            })
            .collect();

        for &sample in &self.samples {
            let index = if width > 0.0 {
                (((sample - lo) / width) as usize).min(bins - 1)
            } else {
                0
            };
            out[index].count += 1;
        }
        out
    }

    /// Empirical CDF over the retained samples as (value, cumulative
    /// fraction) pairs.
    pub fn cdf_points(&self) -> Vec<(f64, f64)> {
        let n = self.samples.len() as f64;
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, (i + 1) as f64 / n))
            .collect()
    }
}

/// Result of a portfolio Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSimulation {
    pub iterations: u32,
    pub seed: u64,
    pub scenario: Scenario,
    /// Total portfolio cost per iteration.
    pub cost: OutcomeDistribution,
    /// Total schedule slip (days) per iteration.
    pub schedule: OutcomeDistribution,
}
