//! # Sweep Errors
//!
//! Error types for extrusion and curve evaluation.
//!
//! ## Error Policy
//!
//! - Malformed input is rejected before any buffer is allocated
//! - Degenerate geometry is reported, never turned into NaN output
//! - A failed call leaves no partial mesh behind

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while sweeping profiles or framing curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// Malformed profile, path or parameters
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Zero-length tangent or an up-vector parallel to the tangent
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Rejected configuration values
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SweepError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by degenerate geometry.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}

/// Result type alias for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;
