//! # Cubic Bezier
//!
//! One cubic segment with four control points. Parameters outside `[0, 1]`
//! extrapolate with the same polynomial.

use crate::error::{SweepError, SweepResult};
use crate::frame::OrientedFrame;
use crate::rotation::look_rotation;
use config::constants::DEGENERATE_EPSILON;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// A cubic Bezier curve defined by four control points.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_mesh::BezierCurve;
///
/// let curve = BezierCurve::new([
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 1.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ]);
/// assert_eq!(curve.point(0.0), DVec3::ZERO);
/// assert_eq!(curve.tangent(0.0)?, DVec3::X);
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    /// Control points `p0..p3`; the curve passes through `p0` and `p3`
    pub points: [DVec3; 4],
}

impl BezierCurve {
    /// Creates a curve from its four control points.
    pub fn new(points: [DVec3; 4]) -> Self {
        Self { points }
    }

    /// Position at `t` (cubic Bernstein blend).
    pub fn point(&self, t: f64) -> DVec3 {
        let [p0, p1, p2, p3] = self.points;
        let omt = 1.0 - t;
        let omt2 = omt * omt;
        let t2 = t * t;
        p0 * (omt2 * omt) + p1 * (3.0 * omt2 * t) + p2 * (3.0 * omt * t2) + p3 * (t2 * t)
    }

    /// Raw derivative at `t`, scaled by 1/3 and not normalized.
    pub fn derivative(&self, t: f64) -> DVec3 {
        let [p0, p1, p2, p3] = self.points;
        let omt = 1.0 - t;
        let omt2 = omt * omt;
        let t2 = t * t;
        p0 * (-omt2) + p1 * (3.0 * omt2 - 2.0 * omt) + p2 * (-3.0 * t2 + 2.0 * t) + p3 * t2
    }

    /// Unit tangent at `t`.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` when the derivative vanishes, e.g. all control
    /// points coincide or `p0 == p1` at `t = 0`.
    pub fn tangent(&self, t: f64) -> SweepResult<DVec3> {
        self.tangent_within(t, DEGENERATE_EPSILON)
    }

    /// Unit tangent at `t`, treating derivatives shorter than `tolerance` as zero.
    pub fn tangent_within(&self, t: f64, tolerance: f64) -> SweepResult<DVec3> {
        let derivative = self.derivative(t);
        if derivative.length() < tolerance {
            return Err(SweepError::degenerate(format!(
                "zero-length tangent at t = {t}"
            )));
        }
        derivative
            .try_normalize()
            .ok_or_else(|| SweepError::degenerate(format!("non-finite tangent at t = {t}")))
    }

    /// Unit normal at `t`: `tangent × normalize(up × tangent)`.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` when the tangent is degenerate or `up` is
    /// parallel to it.
    pub fn normal(&self, t: f64, up: DVec3) -> SweepResult<DVec3> {
        let tangent = self.tangent(t)?;
        normal_from_tangent(tangent, up, t, DEGENERATE_EPSILON)
    }

    /// Frame at `t`: positioned on the curve, local +Z along the tangent and
    /// local +Y along the normal.
    pub fn frame(&self, t: f64, up: DVec3) -> SweepResult<OrientedFrame> {
        self.frame_within(t, up, DEGENERATE_EPSILON)
    }

    /// Frame at `t` with an explicit degeneracy tolerance for the tangent
    /// and the binormal.
    pub fn frame_within(&self, t: f64, up: DVec3, tolerance: f64) -> SweepResult<OrientedFrame> {
        let tangent = self.tangent_within(t, tolerance)?;
        let normal = normal_from_tangent(tangent, up, t, tolerance)?;
        let rotation = DQuat::from_mat3(&look_rotation(tangent, normal)).normalize();
        OrientedFrame::new(self.point(t), rotation)
    }
}

/// `up` only contributes a direction, so it is normalized before the
/// parallel test.
fn normal_from_tangent(tangent: DVec3, up: DVec3, t: f64, tolerance: f64) -> SweepResult<DVec3> {
    let up_dir = up
        .try_normalize()
        .ok_or_else(|| SweepError::degenerate(format!("up vector {up} has no direction")))?;
    let binormal = up_dir.cross(tangent);
    if binormal.length() < tolerance {
        return Err(SweepError::degenerate(format!(
            "up vector {up} is parallel to the tangent at t = {t}"
        )));
    }
    let binormal = binormal
        .try_normalize()
        .ok_or_else(|| SweepError::degenerate(format!("non-finite binormal at t = {t}")))?;
    Ok(tangent.cross(binormal))
}
