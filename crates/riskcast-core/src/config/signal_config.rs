//! Governance-signal thresholds.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the instability / early-warning layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SignalConfig {
    /// Instability at or above this warns on its own. Default: 70.
    pub high_instability: Option<f64>,
    /// Instability at or above this warns when confidence is low. Default: 50.
    pub elevated_instability: Option<f64>,
    /// Time-to-critical at or below this is already imminent. Default: 21.
    pub imminent_cycles: Option<u32>,
}

impl SignalConfig {
    pub fn effective_high_instability(&self) -> f64 {
        self.high_instability
            .unwrap_or(defaults::DEFAULT_HIGH_INSTABILITY)
    }

    pub fn effective_elevated_instability(&self) -> f64 {
        self.elevated_instability
            .unwrap_or(defaults::DEFAULT_ELEVATED_INSTABILITY)
    }

    pub fn effective_imminent_cycles(&self) -> u32 {
        self.imminent_cycles
            .unwrap_or(defaults::DEFAULT_IMMINENT_CYCLES)
    }
}
