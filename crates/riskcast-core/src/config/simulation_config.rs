//! Monte Carlo configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the Monte Carlo simulator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Draws per simulation. Default: 10,000.
    pub iterations: Option<u32>,
    /// PRNG seed. Default: 42.
    pub seed: Option<u64>,
    /// Maximum samples retained per outcome for charting. Default: 2,000.
    pub retained_samples: Option<usize>,
}

impl SimulationConfig {
    pub fn effective_iterations(&self) -> u32 {
        self.iterations
            .unwrap_or(defaults::DEFAULT_SIMULATION_ITERATIONS)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(defaults::DEFAULT_SIMULATION_SEED)
    }

    pub fn effective_retained_samples(&self) -> usize {
        self.retained_samples
            .unwrap_or(defaults::DEFAULT_RETAINED_SAMPLES)
    }
}
