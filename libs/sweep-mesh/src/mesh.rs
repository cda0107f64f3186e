//! # Generated Mesh
//!
//! Output of an extrusion: parallel per-vertex arrays (positions, normals,
//! UVs) and a flat triangle index list, plus the sink abstraction the host
//! renderer implements to receive them.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A triangle mesh with per-vertex normals and UVs.
///
/// All geometry is kept in f64. Export to f32 happens only when buffers are
/// handed to a [`MeshSink`].
///
/// Triangles are wound clockwise when seen from their front side
/// (left-handed, Y-up convention).
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use sweep_mesh::GeneratedMesh;
///
/// let mut mesh = GeneratedMesh::new();
/// mesh.add_vertex(DVec3::ZERO, DVec3::Y, DVec2::ZERO);
/// mesh.add_vertex(DVec3::Z, DVec3::Y, DVec2::Y);
/// mesh.add_vertex(DVec3::X, DVec3::Y, DVec2::X);
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    /// Flat triangle list, three indices per triangle
    indices: Vec<u32>,
}

impl GeneratedMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangle indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    /// Returns true if no vertices are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns a reference to the triangle indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let base = index * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Iterates over triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Returns the front-face normal of a triangle under clockwise winding.
    ///
    /// `None` for zero-area triangles.
    pub fn face_normal(&self, index: usize) -> Option<DVec3> {
        let [a, b, c] = self.triangle(index);
        let pa = self.positions[a as usize];
        let pb = self.positions[b as usize];
        let pc = self.positions[c as usize];
        (pc - pa).cross(pb - pa).try_normalize()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Per-vertex arrays have matching lengths
    /// - The index list is a whole number of triangles
    /// - All triangle indices are in range
    ///
    /// Zero-area triangles are allowed: profiles with coincident vertices
    /// legitimately produce them.
    pub fn validate(&self) -> bool {
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count || self.uvs.len() != vertex_count {
            return false;
        }
        if self.indices.len() % 3 != 0 {
            return false;
        }
        self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }

    /// Returns a copy with every triangle's winding reversed.
    ///
    /// For consumers that treat counter-clockwise faces as front-facing.
    pub fn flipped_winding(&self) -> Self {
        let mut flipped = self.clone();
        for tri in flipped.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        flipped
    }

    /// Replaces the sink's content with this mesh: `clear` then `set_buffers`.
    pub fn write_to<S: MeshSink + ?Sized>(&self, sink: &mut S) {
        sink.clear();
        sink.set_buffers(&self.positions, &self.normals, &self.uvs, &self.indices);
    }

    /// Consumes the mesh and returns its raw arrays.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<DVec3>, Vec<DVec2>, Vec<u32>) {
        (self.positions, self.normals, self.uvs, self.indices)
    }

    /// Exports positions as a flattened [x, y, z, ...] f32 array for GPU.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_vec3(&self.positions)
    }

    /// Exports normals as a flattened [x, y, z, ...] f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_vec3(&self.normals)
    }

    /// Exports UVs as a flattened [u, v, ...] f32 array for GPU.
    pub fn uvs_f32(&self) -> Vec<f32> {
        flatten_vec2(&self.uvs)
    }
}

fn flatten_vec3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

fn flatten_vec2(values: &[DVec2]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 2);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
    }
    result
}

/// Receiver for generated mesh buffers, implemented by the host renderer.
///
/// Content is replaced wholesale: [`GeneratedMesh::write_to`] always calls
/// `clear` before `set_buffers`. There is no incremental update path.
pub trait MeshSink {
    /// Drops all current content.
    fn clear(&mut self);

    /// Installs new buffers. Per-vertex slices share one length.
    fn set_buffers(&mut self, positions: &[DVec3], normals: &[DVec3], uvs: &[DVec2], indices: &[u32]);
}

/// GPU-ready f32 buffers; the in-crate [`MeshSink`] implementation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Flattened [x, y, z, ...]
    pub positions: Vec<f32>,
    /// Flattened [x, y, z, ...]
    pub normals: Vec<f32>,
    /// Flattened [u, v, ...]
    pub uvs: Vec<f32>,
    /// Flat triangle list
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices held.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns true if no vertices are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }
}

impl MeshSink for MeshBuffers {
    fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    fn set_buffers(&mut self, positions: &[DVec3], normals: &[DVec3], uvs: &[DVec2], indices: &[u32]) {
        self.positions = flatten_vec3(positions);
        self.normals = flatten_vec3(normals);
        self.uvs = flatten_vec2(uvs);
        self.indices = indices.to_vec();
    }
}
