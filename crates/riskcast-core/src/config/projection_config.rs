//! Forward-projection configuration and validated profile set.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{PROFILE_BOUND_LOWER, PROFILE_BOUND_UPPER};
use crate::errors::ConfigError;
use crate::types::{DecayParams, Scenario};

/// Configuration for the forward score projector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Review cycles projected forward. Default: 26.
    pub horizon: Option<u32>,
    /// Score at which a risk enters the critical band. Default: 70.0.
    pub critical_threshold: Option<f64>,
    /// Snapshots used to derive momentum. Default: 5.
    pub momentum_window: Option<usize>,
    /// Decay parameters for the neutral profile. Default: 0.85 / 0.93.
    pub neutral: Option<DecayParams>,
    /// Decay parameters for the conservative profile. Default: 0.70 / 0.88.
    pub conservative: Option<DecayParams>,
    /// Decay parameters for the aggressive profile. Default: 0.95 / 0.97.
    pub aggressive: Option<DecayParams>,
}

impl ProjectionConfig {
    pub fn effective_horizon(&self) -> u32 {
        self.horizon.unwrap_or(defaults::DEFAULT_PROJECTION_HORIZON)
    }

    pub fn effective_critical_threshold(&self) -> f64 {
        self.critical_threshold
            .unwrap_or(defaults::DEFAULT_CRITICAL_THRESHOLD)
    }

    pub fn effective_momentum_window(&self) -> usize {
        self.momentum_window
            .unwrap_or(defaults::DEFAULT_MOMENTUM_WINDOW)
    }

    /// Build the validated profile set. Fails if any non-neutral decay
    /// falls outside [0.5x, 1.5x] of the neutral value.
    pub fn profiles(&self) -> Result<ProjectionProfiles, ConfigError> {
        ProjectionProfiles::new(
            self.neutral.unwrap_or(defaults::DEFAULT_NEUTRAL_DECAY),
            self.conservative
                .unwrap_or(defaults::DEFAULT_CONSERVATIVE_DECAY),
            self.aggressive.unwrap_or(defaults::DEFAULT_AGGRESSIVE_DECAY),
        )
    }
}

/// Decay parameters for all three projection profiles.
///
/// Can only be constructed through [`ProjectionProfiles::new`] (or
/// `Default`), so every instance satisfies the 0.5x..1.5x-of-neutral band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionProfiles {
    neutral: DecayParams,
    conservative: DecayParams,
    aggressive: DecayParams,
}

impl ProjectionProfiles {
    pub fn new(
        neutral: DecayParams,
        conservative: DecayParams,
        aggressive: DecayParams,
    ) -> Result<Self, ConfigError> {
        validate_decay(Scenario::Neutral, &neutral)?;
        validate_decay(Scenario::Conservative, &conservative)?;
        validate_decay(Scenario::Aggressive, &aggressive)?;

        for (scenario, params) in [
            (Scenario::Conservative, &conservative),
            (Scenario::Aggressive, &aggressive),
        ] {
            check_band(scenario, "momentum_decay", params.momentum_decay, neutral.momentum_decay)?;
            check_band(
                scenario,
                "confidence_decay",
                params.confidence_decay,
                neutral.confidence_decay,
            )?;
        }

        Ok(Self {
            neutral,
            conservative,
            aggressive,
        })
    }

    /// Decay parameters for a profile.
    pub fn params(&self, scenario: Scenario) -> DecayParams {
        match scenario {
            Scenario::Conservative => self.conservative,
            Scenario::Neutral => self.neutral,
            Scenario::Aggressive => self.aggressive,
        }
    }

    pub fn neutral(&self) -> DecayParams {
        self.neutral
    }
}

impl Default for ProjectionProfiles {
    fn default() -> Self {
        Self {
            neutral: defaults::DEFAULT_NEUTRAL_DECAY,
            conservative: defaults::DEFAULT_CONSERVATIVE_DECAY,
            aggressive: defaults::DEFAULT_AGGRESSIVE_DECAY,
        }
    }
}

fn validate_decay(scenario: Scenario, params: &DecayParams) -> Result<(), ConfigError> {
    for (name, value) in [
        ("momentum_decay", params.momentum_decay),
        ("confidence_decay", params.confidence_decay),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: format!("projection.{}.{}", scenario.name(), name),
                message: format!("must be a finite positive number, got {value}"),
            });
        }
    }
    Ok(())
}

fn check_band(scenario: Scenario, parameter: &str, value: f64, neutral: f64) -> Result<(), ConfigError> {
    let min = neutral * PROFILE_BOUND_LOWER;
    let max = neutral * PROFILE_BOUND_UPPER;
    if value < min || value > max {
        tracing::error!(
            profile = scenario.name(),
            parameter,
            value,
            neutral,
            "projection profile outside allowed band"
        );
        return Err(ConfigError::ProfileOutOfBounds {
            profile: scenario.name().to_string(),
            parameter: parameter.to_string(),
            value,
            neutral,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_pass_validation() {
        let config = ProjectionConfig::default();
        let profiles = config.profiles().unwrap();
        assert_eq!(profiles, ProjectionProfiles::default());
    }

    #[test]
    fn conservative_decays_faster_than_aggressive_by_default() {
        let p = ProjectionProfiles::default();
        assert!(p.params(Scenario::Conservative).momentum_decay < p.params(Scenario::Neutral).momentum_decay);
        assert!(p.params(Scenario::Aggressive).momentum_decay > p.params(Scenario::Neutral).momentum_decay);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let neutral = DecayParams::new(0.5, 0.75);
        let low = DecayParams::new(0.25, 0.375);
        let high = DecayParams::new(0.75, 1.125);
        assert!(ProjectionProfiles::new(neutral, low, high).is_ok());
    }

    #[test]
    fn out_of_band_confidence_decay_rejected() {
        let neutral = DecayParams::new(0.8, 0.6);
        let conservative = DecayParams::new(0.7, 0.2);
        let err = ProjectionProfiles::new(neutral, conservative, neutral).unwrap_err();
        match err {
            ConfigError::ProfileOutOfBounds { profile, parameter, .. } => {
                assert_eq!(profile, "conservative");
                assert_eq!(parameter, "confidence_decay");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_positive_decay_is_invalid() {
        let neutral = DecayParams::new(0.0, 0.9);
        assert!(matches!(
            ProjectionProfiles::new(neutral, neutral, neutral),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
