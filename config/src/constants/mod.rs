//! Centralized configuration values shared across the sweep mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used for general floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Allowed deviation of a rotation from unit norm (quaternions) or from
/// orthonormality (matrices) before it is rejected as degenerate.
///
/// # Examples
/// ```
/// use config::constants::ROTATION_TOLERANCE;
/// let q_len: f64 = 1.0 + 1.0e-8;
/// assert!((q_len - 1.0).abs() < ROTATION_TOLERANCE);
/// ```
pub const ROTATION_TOLERANCE: f64 = 1.0e-6;

/// Vectors shorter than this cannot be normalized.
///
/// Applies to Bezier derivatives and to the binormal built from the
/// up-vector and the tangent.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_EPSILON;
/// let derivative_length = 0.0_f64;
/// assert!(derivative_length < DEGENERATE_EPSILON);
/// ```
pub const DEGENERATE_EPSILON: f64 = 1.0e-12;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of frames sampled along a curve when building a path.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PATH_SAMPLES;
/// assert!(DEFAULT_PATH_SAMPLES >= 2);
/// ```
pub const DEFAULT_PATH_SAMPLES: u32 = 16;

/// Minimum number of samples for a path that produces any triangles.
pub const MIN_PATH_SAMPLES: u32 = 2;

/// Default up axis used to resolve curve frames (Y-up).
pub const DEFAULT_UP: [f64; 3] = [0.0, 1.0, 0.0];

/// Secondary up axis tried when the primary one is parallel to the tangent.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_FALLBACK_UP, DEFAULT_UP};
/// assert_ne!(DEFAULT_FALLBACK_UP, DEFAULT_UP);
/// ```
pub const DEFAULT_FALLBACK_UP: [f64; 3] = [1.0, 0.0, 0.0];

/// Number of identity frames in the lifecycle demo path.
pub const DEMO_PATH_LENGTH: usize = 6;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated mesh.
///
/// Indices are emitted as `u32`, so this must stay below `u32::MAX`.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!((MAX_VERTICES as u64) < u32::MAX as u64);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single generated mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// CONFIGURATION SNAPSHOT
// =============================================================================

/// Immutable snapshot of sweep settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::SweepConfig;
/// let config = SweepConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Number of frames sampled along a curve.
    pub path_samples: u32,
}

impl SweepConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and sample count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SweepConfig;
    /// let cfg = SweepConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.path_samples, 24);
    /// ```
    pub fn new(tolerance: f64, path_samples: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if path_samples < MIN_PATH_SAMPLES {
            return Err(ConfigError::InvalidSamples(path_samples));
        }
        Ok(Self {
            tolerance,
            path_samples,
        })
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            path_samples: DEFAULT_PATH_SAMPLES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when fewer than two path samples are requested.
    InvalidSamples(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSamples(value) => {
                write!(f, "path_samples must be >= {MIN_PATH_SAMPLES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
