// Single source of truth for all default values.

use crate::types::DecayParams;

// --- Projection ---
pub const DEFAULT_PROJECTION_HORIZON: u32 = 26;
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 70.0;
pub const DEFAULT_MOMENTUM_WINDOW: usize = 5;
pub const DEFAULT_NEUTRAL_DECAY: DecayParams = DecayParams::new(0.85, 0.93);
pub const DEFAULT_CONSERVATIVE_DECAY: DecayParams = DecayParams::new(0.70, 0.88);
pub const DEFAULT_AGGRESSIVE_DECAY: DecayParams = DecayParams::new(0.95, 0.97);

// --- Confidence ---
pub const DEFAULT_CONFIDENCE_WINDOW: usize = 6;
pub const DEFAULT_INSUFFICIENT_HISTORY_SCORE: u8 = 15;

// --- Exposure ---
pub const DEFAULT_EXPOSURE_HORIZON_MONTHS: usize = 12;
pub const DEFAULT_TOP_DRIVERS: usize = 10;

// --- Simulation ---
pub const DEFAULT_SIMULATION_ITERATIONS: u32 = 10_000;
pub const DEFAULT_SIMULATION_SEED: u64 = 42;
pub const DEFAULT_RETAINED_SAMPLES: usize = 2_000;

// --- Signals ---
pub const DEFAULT_HIGH_INSTABILITY: f64 = 70.0;
pub const DEFAULT_ELEVATED_INSTABILITY: f64 = 50.0;
pub const DEFAULT_IMMINENT_CYCLES: u32 = 21;
