//! Forward forecasting: momentum, score projection per profile, forecast
//! confidence, and portfolio forward pressure.

pub mod confidence;
pub mod momentum;
pub mod pressure;
pub mod projector;
pub mod types;

pub use confidence::{
    compute_forecast_confidence, ConfidenceBand, ConfidenceBreakdown, ForecastConfidence,
    ForecastConfidenceScorer,
};
pub use momentum::MomentumTracker;
pub use pressure::{
    compute_portfolio_forward_pressure, PortfolioForwardPressure, PressureClass, PressureInput,
    WeightedForwardPressure,
};
pub use projector::{
    run_forward_projection, ForwardProjector, ProjectionOptions, ProjectionSettings,
};
pub use types::{
    ForecastPoint, ForwardProjection, MomentumDirection, RiskForecast, RiskMitigationForecast,
    ScenarioTtc,
};
