//! RiskcastErrorCode trait for embedding layers.

/// Trait for converting riskcast errors to stable error codes.
/// Every error enum implements this so that embedding layers (HTTP, FFI,
/// UI bridges) can match on a code instead of a message.
pub trait RiskcastErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROFILE_OUT_OF_BOUNDS: &str = "PROFILE_OUT_OF_BOUNDS";
