//! Monte Carlo portfolio simulation: seeded cost/schedule sampling with
//! percentile summaries.

pub mod monte_carlo;
pub mod sampling;
pub mod types;

pub use monte_carlo::{simulate_portfolio, MonteCarloSimulator};
pub use sampling::triangular_density;
pub use types::{HistogramBin, OutcomeDistribution, Percentiles, PortfolioSimulation};
