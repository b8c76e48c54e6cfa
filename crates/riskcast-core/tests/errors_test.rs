//! Tests for the riskcast error handling system.

use riskcast_core::errors::*;
use riskcast_core::types::Scenario;

#[test]
fn test_config_errors_have_codes() {
    let errors = [
        ConfigError::FileNotFound {
            path: "/tmp/riskcast.toml".into(),
        },
        ConfigError::ParseError {
            path: "<string>".into(),
            message: "bad".into(),
        },
        ConfigError::ValidationFailed {
            field: "projection.horizon".into(),
            message: "must be greater than 0".into(),
        },
        ConfigError::InvalidValue {
            field: "scenario".into(),
            message: "unknown".into(),
        },
    ];
    for err in &errors {
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}

#[test]
fn test_coded_string_format() {
    let err = ConfigError::ProfileOutOfBounds {
        profile: "aggressive".into(),
        parameter: "momentum_decay".into(),
        value: 1.4,
        neutral: 0.85,
        min: 0.425,
        max: 1.275,
    };
    let rendered = err.coded_string();
    assert!(rendered.starts_with("[PROFILE_OUT_OF_BOUNDS] "));
    assert!(rendered.contains("aggressive.momentum_decay"));
}

#[test]
fn test_unknown_scenario_is_invalid_value() {
    let err = "optimistic".parse::<Scenario>().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert_eq!(" Aggressive ".parse::<Scenario>().unwrap(), Scenario::Aggressive);
}
