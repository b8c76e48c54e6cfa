//! Monte Carlo simulation of portfolio cost and schedule outcomes.
//!
//! A single seeded `ChaCha8Rng` stream is consumed in a fixed order:
//! per iteration, per risk in input order, one uniform decides whether the
//! risk fires; a firing risk then draws one uniform for cost and one for
//! schedule. Same seed and inputs give bit-identical results.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use riskcast_core::config::defaults;
use riskcast_core::config::SimulationConfig;
use riskcast_core::constants::clamp01_or;
use riskcast_core::tracing::metrics;
use riskcast_core::types::{ImpactRange, Risk, Scenario};

use super::sampling::{sample_triangular, summarize};
use super::types::PortfolioSimulation;
use crate::exposure::scenario::{apply_scenario, effective_multiplier, ScenarioMultipliers};

/// A risk reduced to what one draw needs.
#[derive(Debug, Clone, Copy)]
struct PreparedRisk {
    probability: f64,
    cost: ImpactRange,
    schedule: ImpactRange,
}

impl PreparedRisk {
    fn new(risk: &Risk, scenario: Scenario) -> Self {
        let adjusted = apply_scenario(risk, scenario);
        let impact = effective_multiplier(
            ScenarioMultipliers::for_scenario(scenario).impact,
            clamp01_or(risk.sensitivity, 0.0),
        );
        Self {
            probability: adjusted.probability,
            cost: risk.effective_cost_range().scaled(impact),
            schedule: risk.effective_schedule_range().scaled(impact),
        }
    }
}

/// Seeded Monte Carlo simulator for a risk portfolio.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    /// Number of simulation iterations.
    iterations: u32,
    /// Random seed; runs are always reproducible.
    seed: u64,
    scenario: Scenario,
    /// Maximum samples kept per outcome.
    retained_samples: usize,
}

impl MonteCarloSimulator {
    /// Create a simulator with the given iteration count and default seed.
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            seed: defaults::DEFAULT_SIMULATION_SEED,
            scenario: Scenario::Neutral,
            retained_samples: defaults::DEFAULT_RETAINED_SAMPLES,
        }
    }

    /// Build from configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.effective_iterations())
            .with_seed(config.effective_seed())
            .with_retained_samples(config.effective_retained_samples())
    }

    /// Set the PRNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run under a scenario. Neutral is the same as not setting one.
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    /// Cap the number of samples kept per outcome.
    pub fn with_retained_samples(mut self, cap: usize) -> Self {
        self.retained_samples = cap;
        self
    }

    /// Run the simulation over `risks`.
    pub fn simulate(&self, risks: &[Risk]) -> PortfolioSimulation {
        let span = tracing::info_span!(
            "monte_carlo",
            risk_count = risks.len(),
            seed = self.seed,
            simulation_iterations = tracing::field::Empty,
            simulation_time_ms = tracing::field::Empty,
        );
        let _guard = span.enter();
        let start = std::time::Instant::now();

        let prepared: Vec<PreparedRisk> = risks
            .iter()
            .map(|risk| PreparedRisk::new(risk, self.scenario))
            .collect();

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let n = self.iterations as usize;
        let mut cost_samples = Vec::with_capacity(n);
        let mut schedule_samples = Vec::with_capacity(n);

        for _ in 0..n {
            let mut cost = 0.0;
            let mut schedule = 0.0;
            for risk in &prepared {
                let u_fire = rng.gen::<f64>();
                if u_fire < risk.probability {
                    let u_cost = rng.gen::<f64>();
                    let u_schedule = rng.gen::<f64>();
                    cost += sample_triangular(&risk.cost, u_cost);
                    schedule += sample_triangular(&risk.schedule, u_schedule);
                }
            }
            cost_samples.push(cost);
            schedule_samples.push(schedule);
        }

        let cost = summarize(&mut cost_samples, self.retained_samples);
        let schedule = summarize(&mut schedule_samples, self.retained_samples);

        let elapsed_ms = start.elapsed().as_millis() as u64;
        span.record(metrics::SIMULATION_ITERATIONS, self.iterations);
        span.record(metrics::SIMULATION_TIME_MS, elapsed_ms);
        tracing::info!(
            scenario = %self.scenario,
            cost_p50 = cost.percentiles.p50,
            cost_p90 = cost.percentiles.p90,
            schedule_p90 = schedule.percentiles.p90,
            "portfolio simulation complete"
        );

        PortfolioSimulation {
            iterations: self.iterations,
            seed: self.seed,
            scenario: self.scenario,
            cost,
            schedule,
        }
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_SIMULATION_ITERATIONS)
    }
}

/// Simulate `risks` under the neutral scenario.
pub fn simulate_portfolio(risks: &[Risk], iterations: u32, seed: u64) -> PortfolioSimulation {
    MonteCarloSimulator::new(iterations)
        .with_seed(seed)
        .simulate(risks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Vec<Risk> {
        vec![
            Risk {
                schedule_impact_days: 30.0,
                sensitivity: 1.0,
                ..Risk::new("r1", "supply", 0.4, 100_000.0)
            },
            Risk {
                schedule_impact_days: 10.0,
                sensitivity: 0.5,
                ..Risk::new("r2", "design", 0.2, 40_000.0)
            },
        ]
    }

    #[test]
    fn percentiles_are_ordered() {
        let sim = MonteCarloSimulator::new(5_000).with_seed(42).simulate(&portfolio());
        assert!(sim.cost.percentiles.is_valid());
        assert!(sim.schedule.percentiles.is_valid());
        assert!(sim.cost.min <= sim.cost.percentiles.p50);
        assert!(sim.cost.percentiles.p90 <= sim.cost.max);
    }

    #[test]
    fn deterministic_with_seed() {
        let a = simulate_portfolio(&portfolio(), 2_000, 12345);
        let b = simulate_portfolio(&portfolio(), 2_000, 12345);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = simulate_portfolio(&portfolio(), 2_000, 1);
        let b = simulate_portfolio(&portfolio(), 2_000, 2);
        assert_ne!(a.cost.mean, b.cost.mean);
    }

    #[test]
    fn zero_iterations_yield_zero_summary() {
        let sim = simulate_portfolio(&portfolio(), 0, 7);
        assert_eq!(sim.cost.percentiles.p90, 0.0);
        assert_eq!(sim.cost.mean, 0.0);
        assert!(sim.cost.samples.is_empty());
    }

    #[test]
    fn retained_samples_are_capped() {
        let sim = MonteCarloSimulator::new(3_000)
            .with_seed(9)
            .with_retained_samples(500)
            .simulate(&portfolio());
        assert_eq!(sim.cost.samples.len(), 500);
        assert!(sim.cost.samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn aggressive_scenario_raises_expected_cost() {
        let neutral = MonteCarloSimulator::new(5_000).with_seed(3).simulate(&portfolio());
        let aggressive = MonteCarloSimulator::new(5_000)
            .with_seed(3)
            .with_scenario(Scenario::Aggressive)
            .simulate(&portfolio());
        assert!(aggressive.cost.mean > neutral.cost.mean);
    }
}
