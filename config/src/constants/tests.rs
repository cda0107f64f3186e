//! Tests for the sweep configuration snapshot.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_config_is_valid() {
    let cfg = SweepConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.path_samples >= MIN_PATH_SAMPLES);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        SweepConfig::new(0.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        SweepConfig::new(1.0e-9, 1).unwrap_err(),
        ConfigError::InvalidSamples(1)
    );
    assert!(SweepConfig::new(f64::NAN, 24).is_err());
}

#[test]
fn config_error_display_names_field() {
    let msg = ConfigError::InvalidSamples(1).to_string();
    assert!(msg.contains("path_samples"));
}
