//! # Path Sampling
//!
//! Turns a curve into the frame sequence consumed by the extruder.

use super::BezierCurve;
use crate::error::{SweepError, SweepResult};
use crate::frame::OrientedFrame;
use config::constants::{
    SweepConfig, DEFAULT_FALLBACK_UP, DEFAULT_PATH_SAMPLES, DEFAULT_UP, EPSILON_TOLERANCE,
};
use glam::DVec3;
use log::{debug, warn};

/// Parameters for sampling a curve into a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSampleParams {
    /// Number of frames, evenly spaced in `t` over `[0, 1]`
    pub samples: u32,
    /// Up vector used to resolve each frame's normal
    pub up: DVec3,
    /// Tried when `up` is parallel to the tangent at a sample
    pub fallback_up: Option<DVec3>,
    /// Tangents and binormals shorter than this count as degenerate
    pub tolerance: f64,
}

impl Default for PathSampleParams {
    fn default() -> Self {
        Self {
            samples: DEFAULT_PATH_SAMPLES,
            up: DVec3::from_array(DEFAULT_UP),
            fallback_up: None,
            tolerance: EPSILON_TOLERANCE,
        }
    }
}

impl TryFrom<SweepConfig> for PathSampleParams {
    type Error = SweepError;

    /// Re-validates the snapshot, since its fields are public.
    fn try_from(config: SweepConfig) -> SweepResult<Self> {
        let config = SweepConfig::new(config.tolerance, config.path_samples)?;
        Ok(Self {
            samples: config.path_samples,
            tolerance: config.tolerance,
            ..Default::default()
        })
    }
}

impl PathSampleParams {
    /// Default sampling with the X axis as fallback for vertical tangents.
    pub fn with_default_fallback() -> Self {
        Self {
            fallback_up: Some(DVec3::from_array(DEFAULT_FALLBACK_UP)),
            ..Default::default()
        }
    }

    /// Checks sample count, tolerance and up-vectors.
    pub fn validate(&self) -> SweepResult<()> {
        SweepConfig::new(self.tolerance, self.samples)?;
        check_up("up", self.up)?;
        if let Some(fallback) = self.fallback_up {
            check_up("fallback_up", fallback)?;
        }
        Ok(())
    }
}

fn check_up(name: &str, up: DVec3) -> SweepResult<()> {
    if !up.is_finite() || up.length_squared() == 0.0 {
        return Err(SweepError::invalid_input(format!(
            "{name} must be a finite non-zero vector, got {up}"
        )));
    }
    Ok(())
}

/// Samples `params.samples` frames at `t = k / (samples - 1)`.
///
/// A degenerate up-vector at a sample is retried with `fallback_up` when one
/// is configured; any other degeneracy is returned as an error.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_mesh::{sample_path, BezierCurve, PathSampleParams};
///
/// let curve = BezierCurve::new([DVec3::ZERO, DVec3::X, DVec3::X * 2.0, DVec3::X * 3.0]);
/// let params = PathSampleParams { samples: 4, ..Default::default() };
/// let path = sample_path(&curve, &params)?;
/// assert_eq!(path.len(), 4);
/// assert!(path[3].position.abs_diff_eq(DVec3::X * 3.0, 1e-12));
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
pub fn sample_path(curve: &BezierCurve, params: &PathSampleParams) -> SweepResult<Vec<OrientedFrame>> {
    params.validate()?;

    let last = (params.samples - 1) as f64;
    debug!("sampling {} frames along bezier curve", params.samples);

    (0..params.samples)
        .map(|k| {
            let t = k as f64 / last;
            let tolerance = params.tolerance;
            match (curve.frame_within(t, params.up, tolerance), params.fallback_up) {
                (Err(err), Some(fallback))
                    if err.is_degenerate() && curve.tangent_within(t, tolerance).is_ok() =>
                {
                    warn!("up vector degenerate at t = {t}, using fallback {fallback}");
                    curve.frame_within(t, fallback, tolerance)
                }
                (result, _) => result,
            }
        })
        .collect()
}
