use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::clamp_score;

/// A single composite-score observation carried on a risk record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub timestamp: DateTime<Utc>,
    pub composite_score: f64,
}

impl ScoreSnapshot {
    pub fn new(timestamp: DateTime<Utc>, composite_score: f64) -> Self {
        Self {
            timestamp,
            composite_score: clamp_score(composite_score),
        }
    }
}

/// A review-cycle snapshot as served by a history collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSnapshot {
    pub risk_id: String,
    pub cycle_index: u32,
    pub timestamp: DateTime<Utc>,
    pub composite_score: f64,
}

impl RiskSnapshot {
    pub fn new(
        risk_id: impl Into<String>,
        cycle_index: u32,
        timestamp: DateTime<Utc>,
        composite_score: f64,
    ) -> Self {
        Self {
            risk_id: risk_id.into(),
            cycle_index,
            timestamp,
            composite_score: clamp_score(composite_score),
        }
    }

    /// The score, clamped to the valid range even if the collaborator
    /// handed us something out of bounds.
    pub fn score(&self) -> f64 {
        clamp_score(self.composite_score)
    }
}
