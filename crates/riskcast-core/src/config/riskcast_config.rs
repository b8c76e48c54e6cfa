//! Top-level riskcast configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ConfidenceConfig, ExposureConfig, ProjectionConfig, ProjectionProfiles, SignalConfig,
    SimulationConfig,
};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "riskcast.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`RISKCAST_*`)
/// 3. Project config (`riskcast.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskcastConfig {
    pub projection: ProjectionConfig,
    pub confidence: ConfidenceConfig,
    pub exposure: ExposureConfig,
    pub simulation: SimulationConfig,
    pub signals: SignalConfig,
}

/// Caller-supplied overrides, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub projection_horizon: Option<u32>,
    pub exposure_horizon_months: Option<usize>,
    pub simulation_iterations: Option<u32>,
    pub simulation_seed: Option<u64>,
}

impl RiskcastConfig {
    /// Load configuration with layered resolution and validate it.
    ///
    /// A missing `riskcast.toml` is not an error; an invalid one is.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values, including projection profiles.
    pub fn validate(config: &RiskcastConfig) -> Result<(), ConfigError> {
        let projection = &config.projection;
        if projection.effective_horizon() == 0 {
            return Err(validation("projection.horizon", "must be greater than 0"));
        }
        let threshold = projection.effective_critical_threshold();
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 100.0 {
            return Err(validation(
                "projection.critical_threshold",
                "must be in (0, 100]",
            ));
        }
        if projection.effective_momentum_window() < 2 {
            return Err(validation("projection.momentum_window", "must be at least 2"));
        }
        projection.profiles()?;

        if config.confidence.effective_window() < 2 {
            return Err(validation("confidence.window", "must be at least 2"));
        }
        if config.confidence.effective_insufficient_score() > 100 {
            return Err(validation(
                "confidence.insufficient_score",
                "must be between 0 and 100",
            ));
        }

        if config.exposure.effective_horizon_months() == 0 {
            return Err(validation("exposure.horizon_months", "must be greater than 0"));
        }
        if config.exposure.effective_top_n() == 0 {
            return Err(validation("exposure.top_n", "must be greater than 0"));
        }

        if config.simulation.effective_iterations() == 0 {
            return Err(validation("simulation.iterations", "must be greater than 0"));
        }

        let high = config.signals.effective_high_instability();
        let elevated = config.signals.effective_elevated_instability();
        for (field, value) in [
            ("signals.high_instability", high),
            ("signals.elevated_instability", elevated),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(validation(field, "must be between 0 and 100"));
            }
        }
        if elevated > high {
            return Err(validation(
                "signals.elevated_instability",
                "must not exceed signals.high_instability",
            ));
        }
        Ok(())
    }

    /// The validated projection profiles for this configuration.
    pub fn projection_profiles(&self) -> Result<ProjectionProfiles, ConfigError> {
        self.projection.profiles()
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut RiskcastConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RiskcastConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut RiskcastConfig, other: &RiskcastConfig) {
        // Projection
        if other.projection.horizon.is_some() {
            base.projection.horizon = other.projection.horizon;
        }
        if other.projection.critical_threshold.is_some() {
            base.projection.critical_threshold = other.projection.critical_threshold;
        }
        if other.projection.momentum_window.is_some() {
            base.projection.momentum_window = other.projection.momentum_window;
        }
        if other.projection.neutral.is_some() {
            base.projection.neutral = other.projection.neutral;
        }
        if other.projection.conservative.is_some() {
            base.projection.conservative = other.projection.conservative;
        }
        if other.projection.aggressive.is_some() {
            base.projection.aggressive = other.projection.aggressive;
        }

        // Confidence
        if other.confidence.window.is_some() {
            base.confidence.window = other.confidence.window;
        }
        if other.confidence.insufficient_score.is_some() {
            base.confidence.insufficient_score = other.confidence.insufficient_score;
        }

        // Exposure
        if other.exposure.horizon_months.is_some() {
            base.exposure.horizon_months = other.exposure.horizon_months;
        }
        if other.exposure.top_n.is_some() {
            base.exposure.top_n = other.exposure.top_n;
        }

        // Simulation
        if other.simulation.iterations.is_some() {
            base.simulation.iterations = other.simulation.iterations;
        }
        if other.simulation.seed.is_some() {
            base.simulation.seed = other.simulation.seed;
        }
        if other.simulation.retained_samples.is_some() {
            base.simulation.retained_samples = other.simulation.retained_samples;
        }

        // Signals
        if other.signals.high_instability.is_some() {
            base.signals.high_instability = other.signals.high_instability;
        }
        if other.signals.elevated_instability.is_some() {
            base.signals.elevated_instability = other.signals.elevated_instability;
        }
        if other.signals.imminent_cycles.is_some() {
            base.signals.imminent_cycles = other.signals.imminent_cycles;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RISKCAST_PROJECTION_HORIZON`, `RISKCAST_SIMULATION_SEED`, etc.
    fn apply_env_overrides(config: &mut RiskcastConfig) {
        if let Some(v) = env_parse::<u32>("RISKCAST_PROJECTION_HORIZON") {
            config.projection.horizon = Some(v);
        }
        if let Some(v) = env_parse::<f64>("RISKCAST_PROJECTION_CRITICAL_THRESHOLD") {
            config.projection.critical_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RISKCAST_EXPOSURE_HORIZON_MONTHS") {
            config.exposure.horizon_months = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RISKCAST_EXPOSURE_TOP_N") {
            config.exposure.top_n = Some(v);
        }
        if let Some(v) = env_parse::<u32>("RISKCAST_SIMULATION_ITERATIONS") {
            config.simulation.iterations = Some(v);
        }
        if let Some(v) = env_parse::<u64>("RISKCAST_SIMULATION_SEED") {
            config.simulation.seed = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut RiskcastConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.projection_horizon {
            config.projection.horizon = Some(v);
        }
        if let Some(v) = overrides.exposure_horizon_months {
            config.exposure.horizon_months = Some(v);
        }
        if let Some(v) = overrides.simulation_iterations {
            config.simulation.iterations = Some(v);
        }
        if let Some(v) = overrides.simulation_seed {
            config.simulation.seed = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Parse an environment variable, ignoring unset or unparsable values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
