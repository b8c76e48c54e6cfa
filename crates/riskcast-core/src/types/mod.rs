//! Risk domain types consumed by every engine.

pub mod risk;
pub mod scenario;
pub mod snapshot;

pub use risk::{
    ImpactRange, MitigationProfile, MitigationStatus, Risk, TimeProfile, TimeProfileKind,
};
pub use scenario::{DecayParams, Scenario};
pub use snapshot::{RiskSnapshot, ScoreSnapshot};
