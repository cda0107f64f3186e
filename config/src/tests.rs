//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and configuration defaults.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_degenerate_epsilon_below_tolerance() {
    assert!(DEGENERATE_EPSILON <= EPSILON_TOLERANCE);
}

#[test]
fn test_rotation_tolerance_looser_than_epsilon() {
    assert!(ROTATION_TOLERANCE >= EPSILON_TOLERANCE);
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_default_samples_produce_segments() {
    assert!(DEFAULT_PATH_SAMPLES >= MIN_PATH_SAMPLES);
}

#[test]
fn test_default_up_is_y() {
    assert_eq!(DEFAULT_UP, [0.0, 1.0, 0.0]);
}

#[test]
fn test_fallback_up_is_perpendicular_to_default() {
    let dot: f64 = DEFAULT_UP
        .iter()
        .zip(DEFAULT_FALLBACK_UP.iter())
        .map(|(a, b)| a * b)
        .sum();
    assert_eq!(dot, 0.0);
}

#[test]
fn test_demo_path_length() {
    assert_eq!(DEMO_PATH_LENGTH, 6);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_limits_fit_u32_indices() {
    assert!((MAX_VERTICES as u64) < u32::MAX as u64);
    assert!(MAX_TRIANGLES > 0);
}
