//! # Extrusion Operations
//!
//! Sweeps a [`CrossSectionProfile`](crate::CrossSectionProfile) along a path
//! of [`OrientedFrame`](crate::OrientedFrame)s:
//! - **extrude**: build a fresh [`GeneratedMesh`](crate::GeneratedMesh)
//! - **extrude_into**: build, then replace a [`MeshSink`](crate::MeshSink)'s content
//! - **extrude_batch** (`parallel` feature): many paths, one profile
//!
//! ## Layout
//!
//! Each path frame receives one *edge loop*: a copy of every profile vertex.
//! Consecutive loops are joined rib by rib with two triangles per quad.

mod sweep;

#[cfg(feature = "parallel")]
mod batch;


pub use sweep::{extrude, extrude_into};

#[cfg(feature = "parallel")]
pub use batch::extrude_batch;
