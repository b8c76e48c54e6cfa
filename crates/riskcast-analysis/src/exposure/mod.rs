//! Exposure engine: scenario multipliers, mitigation lag, time weighting,
//! per-risk exposure curves, and portfolio aggregation.

pub mod curve;
pub mod mitigation;
pub mod portfolio;
pub mod sanitize;
pub mod scenario;
pub mod time_weights;
pub mod types;

pub use curve::compute_risk_exposure_curve;
pub use mitigation::compute_mitigation_adjustment;
pub use portfolio::compute_portfolio_exposure;
pub use sanitize::sanitize_risk;
pub use scenario::{apply_scenario, ScenarioMultipliers};
pub use time_weights::build_time_weights;
pub use types::*;
