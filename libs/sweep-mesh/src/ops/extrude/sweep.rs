//! # Profile Sweep
//!
//! Instances the profile at every path frame and stitches consecutive edge
//! loops into quad strips.
//!
//! ## Algorithm
//!
//! 1. Vertex `i * n + j` is profile vertex `j` placed by frame `i`
//! 2. Its UV is `(us[j], i / loops)`, so V never reaches 1 on the last loop
//! 3. Rib `(l0, l1)` between loops `i` and `i + 1` yields the corners
//!    `a = next[l0]`, `b = this[l0]`, `c = this[l1]`, `d = next[l1]`
//!    and the triangles `(a, b, c)`, `(c, d, a)`

use crate::error::{SweepError, SweepResult};
use crate::frame::OrientedFrame;
use crate::mesh::{GeneratedMesh, MeshSink};
use crate::profile::CrossSectionProfile;
use crate::rotation::Rotation;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec2;
use log::debug;

/// Sweeps a profile along a path of oriented frames.
///
/// # Arguments
///
/// * `profile` - The cross-section to instance at every frame
/// * `path` - At least one frame; a single frame yields vertices but no triangles
///
/// # Returns
///
/// A mesh with `profile.vertex_count() * path.len()` vertices and
/// `profile.rib_count() * (path.len() - 1) * 6` indices.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_mesh::{extrude, CrossSectionProfile, OrientedFrame};
///
/// let path: Vec<OrientedFrame> = (0..3)
///     .map(|i| OrientedFrame::from_position(DVec3::new(0.0, 0.0, i as f64)))
///     .collect();
/// let mesh = extrude(&CrossSectionProfile::road(), &path)?;
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.index_count(), 48);
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
pub fn extrude<R: Rotation>(
    profile: &CrossSectionProfile,
    path: &[OrientedFrame<R>],
) -> SweepResult<GeneratedMesh> {
    let (vertex_count, index_count) = check_inputs(profile, path)?;

    let verts_in_shape = profile.vertex_count();
    let edge_loops = path.len();
    let segments = edge_loops - 1;

    debug!(
        "extruding {} ribs along {} frames: {} vertices, {} indices",
        profile.rib_count(),
        edge_loops,
        vertex_count,
        index_count
    );

    let mut mesh = GeneratedMesh::with_capacity(vertex_count, index_count);

    for (i, frame) in path.iter().enumerate() {
        let v = i as f64 / edge_loops as f64;
        let shape = profile.verts.iter().zip(&profile.normals).zip(&profile.us);
        for ((vert, normal), u) in shape {
            mesh.add_vertex(
                frame.local_to_world_2d(*vert),
                frame.local_to_world_direction_2d(*normal),
                DVec2::new(*u, v),
            );
        }
    }

    let stride = verts_in_shape as u32;
    for i in 0..segments {
        let offset = (i * verts_in_shape) as u32;
        for (l0, l1) in profile.ribs() {
            let a = offset + l0 + stride;
            let b = offset + l0;
            let c = offset + l1;
            let d = offset + l1 + stride;
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(c, d, a);
        }
    }

    Ok(mesh)
}

/// Sweeps a profile and hands the result to `sink`.
///
/// The sink is cleared and refilled only when extrusion succeeds; on error
/// its previous content is left untouched.
pub fn extrude_into<R: Rotation, S: MeshSink + ?Sized>(
    profile: &CrossSectionProfile,
    path: &[OrientedFrame<R>],
    sink: &mut S,
) -> SweepResult<GeneratedMesh> {
    let mesh = extrude(profile, path)?;
    mesh.write_to(sink);
    Ok(mesh)
}

/// Validates the inputs and returns `(vertex_count, index_count)`.
fn check_inputs<R: Rotation>(
    profile: &CrossSectionProfile,
    path: &[OrientedFrame<R>],
) -> SweepResult<(usize, usize)> {
    if path.is_empty() {
        return Err(SweepError::invalid_input("extrusion path is empty"));
    }
    profile.validate()?;

    for (i, frame) in path.iter().enumerate() {
        frame.validate().map_err(|err| {
            SweepError::invalid_input(format!("path frame {i}: {err}"))
        })?;
    }

    let vertex_count = profile
        .vertex_count()
        .checked_mul(path.len())
        .unwrap_or(usize::MAX);
    if vertex_count > MAX_VERTICES {
        return Err(SweepError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }

    let triangle_count = profile
        .rib_count()
        .checked_mul(2 * (path.len() - 1))
        .unwrap_or(usize::MAX);
    if triangle_count > MAX_TRIANGLES {
        return Err(SweepError::TooManyTriangles {
            count: triangle_count,
            max: MAX_TRIANGLES,
        });
    }

    Ok((vertex_count, triangle_count * 3))
}
