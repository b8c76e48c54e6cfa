//! Configuration errors.

use super::error_code::{self, RiskcastErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A non-neutral projection profile drifted outside the allowed band
    /// around the neutral decay value.
    #[error(
        "Projection profile {profile}.{parameter} = {value} is outside [{min}, {max}] (0.5x..1.5x of neutral {neutral})"
    )]
    ProfileOutOfBounds {
        profile: String,
        parameter: String,
        value: f64,
        neutral: f64,
        min: f64,
        max: f64,
    },
}

impl RiskcastErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ProfileOutOfBounds { .. } => error_code::PROFILE_OUT_OF_BOUNDS,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
