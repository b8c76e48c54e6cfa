//! Scenario profiles shared by exposure, simulation, and projection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Named scenario profile.
///
/// The same three profiles parameterize exposure multipliers and projection
/// decay. Omitting a profile is always equivalent to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    #[default]
    Neutral,
    Aggressive,
}

impl Scenario {
    /// All profiles, ordered from least to most severe.
    pub const ALL: &'static [Scenario] = &[Self::Conservative, Self::Neutral, Self::Aggressive];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Neutral => "neutral",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "neutral" => Ok(Self::Neutral),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(ConfigError::InvalidValue {
                field: "scenario".to_string(),
                message: format!(
                    "unknown scenario '{other}', expected conservative, neutral, or aggressive"
                ),
            }),
        }
    }
}

/// Per-profile decay parameters for forward projection.
///
/// `momentum_decay` controls how long score momentum persists;
/// `confidence_decay` controls how fast per-point confidence fades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayParams {
    #[serde(alias = "momentum_decay")]
    pub momentum_decay: f64,
    #[serde(alias = "confidence_decay")]
    pub confidence_decay: f64,
}

impl DecayParams {
    pub const fn new(momentum_decay: f64, confidence_decay: f64) -> Self {
        Self {
            momentum_decay,
            confidence_decay,
        }
    }
}
