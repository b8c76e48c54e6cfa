//! # riskcast-core
//!
//! Foundation crate for the riskcast engine.
//! Defines the risk domain types, the history collaborator trait, errors,
//! config, tracing, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ProjectionProfiles, RiskcastConfig};
pub use errors::{ConfigError, RiskcastErrorCode};
pub use traits::{HistoryLookup, InMemoryHistoryStore, RiskHistoryIndex};
pub use types::{
    DecayParams, ImpactRange, MitigationProfile, MitigationStatus, Risk, RiskSnapshot, Scenario,
    ScoreSnapshot, TimeProfile, TimeProfileKind,
};
