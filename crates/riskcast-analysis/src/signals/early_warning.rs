//! Early warnings: high instability that time-to-critical has not yet
//! caught.

use std::fmt;

use riskcast_core::config::{defaults, SignalConfig};
use serde::{Deserialize, Serialize};

use crate::forecast::ConfidenceBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyWarningReason {
    /// Instability at or above the high threshold.
    HighInstability,
    /// Elevated instability with a low-confidence forecast.
    InstabilityWithLowConfidence,
}

impl EarlyWarningReason {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighInstability => "high_instability",
            Self::InstabilityWithLowConfidence => "instability_with_low_confidence",
        }
    }
}

impl fmt::Display for EarlyWarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EarlyWarning {
    pub triggered: bool,
    pub reasons: Vec<EarlyWarningReason>,
}

/// Thresholds for early warnings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalThresholds {
    pub high_instability: f64,
    pub elevated_instability: f64,
    /// A time-to-critical at or below this is already imminent and
    /// suppresses the warning.
    pub imminent_cycles: u32,
}

impl SignalThresholds {
    pub fn from_config(config: &SignalConfig) -> Self {
        Self {
            high_instability: config.effective_high_instability(),
            elevated_instability: config.effective_elevated_instability(),
            imminent_cycles: config.effective_imminent_cycles(),
        }
    }
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            high_instability: defaults::DEFAULT_HIGH_INSTABILITY,
            elevated_instability: defaults::DEFAULT_ELEVATED_INSTABILITY,
            imminent_cycles: defaults::DEFAULT_IMMINENT_CYCLES,
        }
    }
}

/// Raise a warning when instability is high but time-to-critical has not
/// fired, or instability is elevated and confidence is low.
pub fn evaluate_early_warning(
    instability: f64,
    time_to_critical: Option<u32>,
    band: ConfidenceBand,
    thresholds: &SignalThresholds,
) -> EarlyWarning {
    if time_to_critical.is_some_and(|ttc| ttc <= thresholds.imminent_cycles) {
        return EarlyWarning::default();
    }

    let mut reasons = Vec::new();
    if instability >= thresholds.high_instability {
        reasons.push(EarlyWarningReason::HighInstability);
    }
    if instability >= thresholds.elevated_instability && band == ConfidenceBand::Low {
        reasons.push(EarlyWarningReason::InstabilityWithLowConfidence);
    }

    EarlyWarning {
        triggered: !reasons.is_empty(),
        reasons,
    }
}
