//! Forecast-confidence configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for forecast-confidence scoring.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Trailing snapshots considered. Default: 6.
    pub window: Option<usize>,
    /// Score assigned when history has fewer than two points. Default: 15.
    pub insufficient_score: Option<u8>,
}

impl ConfidenceConfig {
    pub fn effective_window(&self) -> usize {
        self.window.unwrap_or(defaults::DEFAULT_CONFIDENCE_WINDOW)
    }

    pub fn effective_insufficient_score(&self) -> u8 {
        self.insufficient_score
            .unwrap_or(defaults::DEFAULT_INSUFFICIENT_HISTORY_SCORE)
    }
}
