//! # Cross-Section Profiles
//!
//! The 2D shape swept along a path. A profile is a set of parallel arrays
//! (vertices, normals, U coordinates) plus a line-list naming the rib edges
//! that become quad strips.

use crate::error::{SweepError, SweepResult};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D cross-section to be extruded.
///
/// `lines` holds index pairs: `(lines[2k], lines[2k + 1])` is one rib.
/// Ribs need not form a closed loop.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use sweep_mesh::CrossSectionProfile;
///
/// let flat = CrossSectionProfile::new(
///     vec![DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0)],
///     vec![DVec2::Y, DVec2::Y],
///     vec![0.0, 1.0],
///     vec![0, 1],
/// )
/// .unwrap();
/// assert_eq!(flat.rib_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionProfile {
    /// Profile vertices in the frame's local XY plane
    pub verts: Vec<DVec2>,
    /// Per-vertex normals, same length as `verts`
    pub normals: Vec<DVec2>,
    /// Per-vertex texture U coordinate, same length as `verts`
    pub us: Vec<f64>,
    /// Rib index pairs into `verts`
    pub lines: Vec<u32>,
}

impl CrossSectionProfile {
    /// Creates a profile after checking array lengths and rib indices.
    pub fn new(
        verts: Vec<DVec2>,
        normals: Vec<DVec2>,
        us: Vec<f64>,
        lines: Vec<u32>,
    ) -> SweepResult<Self> {
        let profile = Self {
            verts,
            normals,
            us,
            lines,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// The cross-beam "road" profile: six vertices along local Y with four ribs.
    ///
    /// Vertices 1 and 2 coincide, so the rib strip breaks between them.
    pub fn road() -> Self {
        Self {
            verts: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(0.0, 1.0),
                DVec2::new(0.0, 1.0),
                DVec2::new(0.0, 2.0),
                DVec2::new(0.0, 3.0),
                DVec2::new(0.0, 4.0),
            ],
            normals: vec![DVec2::ZERO; 6],
            us: vec![1.0; 6],
            lines: vec![0, 1, 2, 3, 3, 4, 4, 5],
        }
    }

    /// Checks that the parallel arrays agree, hold only finite values, and
    /// every rib index is in range.
    pub fn validate(&self) -> SweepResult<()> {
        let n = self.verts.len();
        if self.normals.len() != n {
            return Err(SweepError::invalid_input(format!(
                "profile has {} normals for {} vertices",
                self.normals.len(),
                n
            )));
        }
        if self.us.len() != n {
            return Err(SweepError::invalid_input(format!(
                "profile has {} U coordinates for {} vertices",
                self.us.len(),
                n
            )));
        }
        if let Some(j) = self.verts.iter().position(|v| !v.is_finite()) {
            return Err(SweepError::invalid_input(format!(
                "profile vertex {j} is not finite: {}",
                self.verts[j]
            )));
        }
        if let Some(j) = self.normals.iter().position(|v| !v.is_finite()) {
            return Err(SweepError::invalid_input(format!(
                "profile normal {j} is not finite: {}",
                self.normals[j]
            )));
        }
        if let Some(j) = self.us.iter().position(|u| !u.is_finite()) {
            return Err(SweepError::invalid_input(format!(
                "profile U coordinate {j} is not finite: {}",
                self.us[j]
            )));
        }
        if self.lines.len() % 2 != 0 {
            return Err(SweepError::invalid_input(format!(
                "profile line-list has odd length {}",
                self.lines.len()
            )));
        }
        if let Some((pos, &index)) = self
            .lines
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= n)
        {
            return Err(SweepError::invalid_input(format!(
                "profile line {pos} references vertex {index}, but only {n} exist"
            )));
        }
        Ok(())
    }

    /// Returns the number of profile vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Returns the number of rib edges.
    #[inline]
    pub fn rib_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Iterates over rib index pairs.
    pub fn ribs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.lines.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

impl Default for CrossSectionProfile {
    fn default() -> Self {
        Self::road()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_profile_shape() {
        let road = CrossSectionProfile::road();
        assert_eq!(road.vertex_count(), 6);
        assert_eq!(road.rib_count(), 4);
        assert!(road.validate().is_ok());
        let ribs: Vec<_> = road.ribs().collect();
        assert_eq!(ribs, vec![(0, 1), (2, 3), (3, 4), (4, 5)]);
    }

    #[test]
    fn test_default_is_road() {
        assert_eq!(CrossSectionProfile::default(), CrossSectionProfile::road());
    }

    #[test]
    fn test_rejects_mismatched_normals() {
        let result = CrossSectionProfile::new(
            vec![DVec2::ZERO, DVec2::X],
            vec![DVec2::Y],
            vec![0.0, 1.0],
            vec![0, 1],
        );
        assert!(matches!(result, Err(SweepError::InvalidInput { .. })));
    }

    #[test]
    fn test_rejects_mismatched_us() {
        let result = CrossSectionProfile::new(
            vec![DVec2::ZERO, DVec2::X],
            vec![DVec2::Y, DVec2::Y],
            vec![0.0],
            vec![0, 1],
        );
        assert!(matches!(result, Err(SweepError::InvalidInput { .. })));
    }

    #[test]
    fn test_rejects_out_of_range_line() {
        let result = CrossSectionProfile::new(
            vec![DVec2::ZERO, DVec2::X],
            vec![DVec2::Y, DVec2::Y],
            vec![0.0, 1.0],
            vec![0, 2],
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("vertex 2"));
    }

    #[test]
    fn test_rejects_odd_line_list() {
        let result = CrossSectionProfile::new(
            vec![DVec2::ZERO, DVec2::X],
            vec![DVec2::Y, DVec2::Y],
            vec![0.0, 1.0],
            vec![0, 1, 1],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut road = CrossSectionProfile::road();
        road.verts[3].y = f64::NAN;
        let err = road.validate().unwrap_err();
        assert!(matches!(err, SweepError::InvalidInput { .. }));
        assert!(err.to_string().contains("vertex 3"));

        let mut road = CrossSectionProfile::road();
        road.normals[0] = DVec2::new(f64::INFINITY, 0.0);
        assert!(road.validate().unwrap_err().to_string().contains("normal 0"));

        let result = CrossSectionProfile::new(
            vec![DVec2::ZERO, DVec2::X],
            vec![DVec2::Y, DVec2::Y],
            vec![0.0, f64::NEG_INFINITY],
            vec![0, 1],
        );
        assert!(matches!(result, Err(SweepError::InvalidInput { .. })));
    }

    #[test]
    fn test_profile_without_ribs_is_valid() {
        let dots = CrossSectionProfile::new(vec![DVec2::ZERO], vec![DVec2::Y], vec![0.5], vec![])
            .unwrap();
        assert_eq!(dots.rib_count(), 0);
    }
}
