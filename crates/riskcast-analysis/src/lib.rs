//! # riskcast-analysis
//!
//! Quantitative engines for project-risk decision support:
//! scenario-aware exposure curves, Monte Carlo portfolio simulation,
//! forward score projection with forecast confidence and portfolio
//! pressure, and the instability / fragility / early-warning layer.
//!
//! Every function here is pure and deterministic for a given input.

pub mod exposure;
pub mod forecast;
pub mod signals;
pub mod simulation;

pub use exposure::{
    apply_scenario, build_time_weights, compute_mitigation_adjustment, compute_portfolio_exposure,
    compute_risk_exposure_curve, PortfolioExposure, PortfolioExposureOptions, RiskExposureCurve,
};
pub use forecast::{
    compute_forecast_confidence, compute_portfolio_forward_pressure, run_forward_projection,
    ForwardProjection, ForwardProjector, PortfolioForwardPressure, ProjectionOptions,
    RiskForecast, RiskMitigationForecast,
};
pub use signals::{
    compute_fragility, compute_instability, evaluate_early_warning, EarlyWarning, FragilityResult,
    InstabilityResult,
};
pub use simulation::{simulate_portfolio, MonteCarloSimulator, PortfolioSimulation};
