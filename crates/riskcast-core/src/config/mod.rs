//! Configuration system for riskcast.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod confidence_config;
pub mod defaults;
pub mod exposure_config;
pub mod projection_config;
pub mod riskcast_config;
pub mod signal_config;
pub mod simulation_config;

pub use confidence_config::ConfidenceConfig;
pub use exposure_config::ExposureConfig;
pub use projection_config::{ProjectionConfig, ProjectionProfiles};
pub use riskcast_config::{ConfigOverrides, RiskcastConfig};
pub use signal_config::SignalConfig;
pub use simulation_config::SimulationConfig;
