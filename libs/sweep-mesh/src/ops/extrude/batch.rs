//! # Batch Extrusion
//!
//! Independent sweeps of one profile along many paths, spread over the
//! rayon thread pool. Inputs are only read, so no synchronization is needed.

use super::sweep::extrude;
use crate::error::SweepResult;
use crate::frame::OrientedFrame;
use crate::mesh::GeneratedMesh;
use crate::profile::CrossSectionProfile;
use crate::rotation::Rotation;
use rayon::prelude::*;

/// Extrudes `profile` along every path in parallel.
///
/// Results keep the order of `paths`; each entry fails or succeeds on its own.
pub fn extrude_batch<R, P>(profile: &CrossSectionProfile, paths: &[P]) -> Vec<SweepResult<GeneratedMesh>>
where
    R: Rotation + Send + Sync,
    P: AsRef<[OrientedFrame<R>]> + Sync,
{
    paths
        .par_iter()
        .map(|path| extrude(profile, path.as_ref()))
        .collect()
}
