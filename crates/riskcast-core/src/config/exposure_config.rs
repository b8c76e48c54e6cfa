//! Exposure-curve configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for exposure curves and portfolio aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExposureConfig {
    /// Months covered by an exposure curve. Default: 12.
    pub horizon_months: Option<usize>,
    /// Number of top drivers reported. Default: 10.
    pub top_n: Option<usize>,
}

impl ExposureConfig {
    pub fn effective_horizon_months(&self) -> usize {
        self.horizon_months
            .unwrap_or(defaults::DEFAULT_EXPOSURE_HORIZON_MONTHS)
    }

    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(defaults::DEFAULT_TOP_DRIVERS)
    }
}
