//! # Config Crate
//!
//! Centralized configuration constants for the sweep mesh pipeline.
//! Tolerances, sampling defaults and safety limits are defined here so the
//! geometry crates never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SweepConfig, DEFAULT_PATH_SAMPLES, EPSILON_TOLERANCE};
//!
//! let config = SweepConfig::default();
//! assert_eq!(config.tolerance, EPSILON_TOLERANCE);
//! assert_eq!(config.path_samples, DEFAULT_PATH_SAMPLES);
//! assert!(SweepConfig::new(0.0, DEFAULT_PATH_SAMPLES).is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Agnostic**: No host-engine specific values
//! - **Left-handed, Y-up**: Axis defaults follow the target renderer convention

pub mod constants;

#[cfg(test)]
mod tests;
