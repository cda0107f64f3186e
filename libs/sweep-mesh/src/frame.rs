//! # Oriented Frames
//!
//! A position plus a rotation, defining a local coordinate space embedded in
//! world space. Paths fed to the extruder are sequences of these frames.

use crate::error::{SweepError, SweepResult};
use crate::rotation::Rotation;
use config::constants::ROTATION_TOLERANCE;
use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A position and rotation in 3D space.
///
/// Generic over the rotation representation; quaternions by default.
///
/// # Example
///
/// ```rust
/// use glam::{DQuat, DVec3};
/// use sweep_mesh::OrientedFrame;
///
/// let frame = OrientedFrame::new(DVec3::new(0.0, 0.0, 5.0), DQuat::IDENTITY).unwrap();
/// let world = frame.local_to_world(DVec3::X);
/// assert_eq!(world, DVec3::new(1.0, 0.0, 5.0));
/// assert_eq!(frame.world_to_local(world), DVec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedFrame<R = DQuat> {
    /// Origin of the local space in world coordinates
    pub position: DVec3,
    /// Orientation of the local axes
    pub rotation: R,
}

impl<R: Rotation> OrientedFrame<R> {
    /// Creates a frame, rejecting rotations that are not finite proper rotations.
    pub fn new(position: DVec3, rotation: R) -> SweepResult<Self> {
        let frame = Self { position, rotation };
        frame.validate()?;
        Ok(frame)
    }

    /// A frame at the origin with the identity rotation.
    pub fn identity() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: R::identity(),
        }
    }

    /// A frame at `position` with the identity rotation.
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            rotation: R::identity(),
        }
    }

    /// Checks the frame invariants.
    pub fn validate(&self) -> SweepResult<()> {
        if !self.position.is_finite() {
            return Err(SweepError::invalid_input(format!(
                "frame position is not finite: {}",
                self.position
            )));
        }
        if !self.rotation.is_valid(ROTATION_TOLERANCE) {
            return Err(SweepError::invalid_input(
                "frame rotation is not a unit rotation",
            ));
        }
        Ok(())
    }

    /// Maps a point from local space to world space.
    #[inline]
    pub fn local_to_world(&self, point: DVec3) -> DVec3 {
        self.position + self.rotation.apply(point)
    }

    /// Maps a world-space point into local space.
    #[inline]
    pub fn world_to_local(&self, point: DVec3) -> DVec3 {
        self.rotation.inverse().apply(point - self.position)
    }

    /// Rotates a local direction into world space without translating it.
    #[inline]
    pub fn local_to_world_direction(&self, dir: DVec3) -> DVec3 {
        self.rotation.apply(dir)
    }

    /// Rotates a world direction into local space.
    #[inline]
    pub fn world_to_local_direction(&self, dir: DVec3) -> DVec3 {
        self.rotation.inverse().apply(dir)
    }

    /// Places a profile-plane point `(x, y, 0)` in world space.
    #[inline]
    pub fn local_to_world_2d(&self, point: DVec2) -> DVec3 {
        self.local_to_world(point.extend(0.0))
    }

    /// Rotates a profile-plane direction `(x, y, 0)` into world space.
    #[inline]
    pub fn local_to_world_direction_2d(&self, dir: DVec2) -> DVec3 {
        self.local_to_world_direction(dir.extend(0.0))
    }
}

impl<R: Rotation> Default for OrientedFrame<R> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DMat3;

    const TOL: f64 = 1e-9;

    fn sample_frames() -> Vec<OrientedFrame> {
        vec![
            OrientedFrame::identity(),
            OrientedFrame::from_position(DVec3::new(3.0, -2.0, 7.5)),
            OrientedFrame::new(
                DVec3::new(-1.0, 4.0, 0.5),
                DQuat::from_euler(glam::EulerRot::YXZ, 1.2, -0.4, 2.9),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_world_to_local_inverts_local_to_world() {
        let points = [
            DVec3::ZERO,
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(-10.0, 0.5, 100.0),
        ];
        for frame in sample_frames() {
            for p in points {
                let round_trip = frame.world_to_local(frame.local_to_world(p));
                assert!(round_trip.abs_diff_eq(p, TOL), "{round_trip} != {p}");
            }
        }
    }

    #[test]
    fn test_direction_ignores_translation() {
        let frame = OrientedFrame::<DQuat>::from_position(DVec3::new(5.0, 5.0, 5.0));
        assert_eq!(frame.local_to_world_direction(DVec3::Y), DVec3::Y);
        assert_eq!(frame.local_to_world(DVec3::Y), DVec3::new(5.0, 6.0, 5.0));
    }

    #[test]
    fn test_direction_round_trip() {
        for frame in sample_frames() {
            let d = DVec3::new(0.3, -0.9, 0.1);
            let back = frame.world_to_local_direction(frame.local_to_world_direction(d));
            assert!(back.abs_diff_eq(d, TOL));
        }
    }

    #[test]
    fn test_matrix_frame_matches_quat_frame() {
        let q = DQuat::from_rotation_x(0.8);
        let position = DVec3::new(1.0, 2.0, 3.0);
        let qf = OrientedFrame::new(position, q).unwrap();
        let mf = OrientedFrame::new(position, DMat3::from_quat(q)).unwrap();
        let p = DVec2::new(0.5, -1.5);
        assert!(qf.local_to_world_2d(p).abs_diff_eq(mf.local_to_world_2d(p), TOL));
    }

    #[test]
    fn test_new_rejects_degenerate_rotation() {
        let zero = DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0);
        assert!(OrientedFrame::new(DVec3::ZERO, zero).is_err());

        let nan = DQuat::from_xyzw(f64::NAN, 0.0, 0.0, 1.0);
        assert!(OrientedFrame::new(DVec3::ZERO, nan).is_err());

        let bad_position = DVec3::new(f64::INFINITY, 0.0, 0.0);
        assert!(OrientedFrame::new(bad_position, DQuat::IDENTITY).is_err());
    }

    #[test]
    fn test_default_is_identity() {
        let frame: OrientedFrame = OrientedFrame::default();
        assert_eq!(frame.position, DVec3::ZERO);
        assert_eq!(frame.rotation, DQuat::IDENTITY);
    }
}
