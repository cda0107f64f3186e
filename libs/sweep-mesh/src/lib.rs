//! # Sweep Mesh
//!
//! Procedural tube and ribbon meshes: a 2D cross-section swept along a path
//! of oriented frames, with cubic Bezier curves supplying those frames.
//!
//! ## Architecture
//!
//! ```text
//! BezierCurve → [OrientedFrame] → extrude(CrossSectionProfile) → GeneratedMesh → MeshSink
//! ```
//!
//! ## Conventions
//!
//! - Profiles live in the frame's local XY plane; the path runs along local +Z
//! - Triangles are wound clockwise seen from the front (left-handed, Y-up)
//! - Geometry is f64; sinks receive f32 buffers
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use sweep_mesh::{render_curve, BezierCurve, CrossSectionProfile, PathSampleParams};
//!
//! let curve = BezierCurve::new([
//!     DVec3::ZERO,
//!     DVec3::new(0.0, 0.0, 10.0),
//!     DVec3::new(10.0, 0.0, 10.0),
//!     DVec3::new(10.0, 0.0, 20.0),
//! ]);
//! let mesh = render_curve(&CrossSectionProfile::road(), &curve, &PathSampleParams::default())?;
//! assert_eq!(mesh.vertex_count(), 6 * 16);
//! # Ok::<(), sweep_mesh::SweepError>(())
//! ```

pub mod curve;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod ops;
pub mod profile;
pub mod rotation;

pub use curve::{sample_path, BezierCurve, PathSampleParams};
pub use error::{SweepError, SweepResult};
pub use frame::OrientedFrame;
pub use mesh::{GeneratedMesh, MeshBuffers, MeshSink};
pub use ops::{extrude, extrude_into};
pub use profile::CrossSectionProfile;
pub use rotation::Rotation;

#[cfg(feature = "parallel")]
pub use ops::extrude_batch;

use config::constants::DEMO_PATH_LENGTH;

/// Extrudes the road profile along six identity frames.
///
/// This is the host's start-up invocation. Every loop sits at the origin,
/// so the surface is degenerate; it exists to exercise the pipeline.
pub fn render_default_road() -> SweepResult<GeneratedMesh> {
    let path = [OrientedFrame::<glam::DQuat>::identity(); DEMO_PATH_LENGTH];
    extrude(&CrossSectionProfile::road(), &path)
}

/// Samples `curve` into a path and sweeps `profile` along it.
///
/// # Arguments
///
/// * `profile` - Cross-section to sweep
/// * `curve` - Bezier segment supplying the frames
/// * `params` - Sample count and up-vector handling
pub fn render_curve(
    profile: &CrossSectionProfile,
    curve: &BezierCurve,
    params: &PathSampleParams,
) -> SweepResult<GeneratedMesh> {
    let path = sample_path(curve, params)?;
    extrude(profile, &path)
}
