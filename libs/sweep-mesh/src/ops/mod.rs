//! # Mesh Operations
//!
//! Operations producing meshes from profiles and paths.

pub mod extrude;

pub use extrude::{extrude, extrude_into};

#[cfg(feature = "parallel")]
pub use extrude::extrude_batch;
