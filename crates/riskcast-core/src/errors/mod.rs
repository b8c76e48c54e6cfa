//! Error handling for riskcast.
//! One error enum per concern, `thiserror` only, zero `anyhow`.
//!
//! Data-path computations never fail; they clamp and default instead.
//! Configuration is the only fail-fast path.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::RiskcastErrorCode;
