//! Structured field names used in riskcast tracing events.
//!
//! Consistent names keep log queries stable across engines.

/// Exposure: portfolio total over the horizon.
pub const PORTFOLIO_EXPOSURE_TOTAL: &str = "portfolio_exposure_total";

/// Exposure: number of sanitation warnings collected.
pub const SANITATION_WARNINGS: &str = "sanitation_warnings";

/// Simulation: iterations executed.
pub const SIMULATION_ITERATIONS: &str = "simulation_iterations";

/// Simulation: wall-clock duration in milliseconds.
pub const SIMULATION_TIME_MS: &str = "simulation_time_ms";

/// Projection: risks projected to enter the critical band.
pub const PROJECTED_CRITICAL: &str = "projected_critical";

/// Projection: wall-clock duration in milliseconds.
pub const PROJECTION_TIME_MS: &str = "projection_time_ms";

/// Signals: early warnings raised.
pub const EARLY_WARNINGS: &str = "early_warnings";
