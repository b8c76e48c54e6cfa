//! Governance signals derived from projector outputs: instability index,
//! structural fragility, and early warnings.

pub mod early_warning;
pub mod fragility;
pub mod instability;

pub use early_warning::{evaluate_early_warning, EarlyWarning, EarlyWarningReason, SignalThresholds};
pub use fragility::{compute_fragility, FragilityLabel, FragilityResult};
pub use instability::{compute_instability, InstabilityComponents, InstabilityInputs, InstabilityResult};
