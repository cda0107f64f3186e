//! End-to-end checks: curve sampling feeding the extruder and a host sink.

use glam::{DVec2, DVec3};
use sweep_mesh::{
    extrude, extrude_into, render_curve, sample_path, BezierCurve, CrossSectionProfile, MeshBuffers,
    MeshSink, PathSampleParams, SweepError,
};

fn s_bend() -> BezierCurve {
    BezierCurve::new([
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 10.0),
        DVec3::new(10.0, 0.0, 10.0),
        DVec3::new(10.0, 0.0, 20.0),
    ])
}

/// Flat deck, 4 units wide, facing up.
fn deck() -> CrossSectionProfile {
    CrossSectionProfile::new(
        vec![DVec2::new(-2.0, 0.0), DVec2::new(2.0, 0.0)],
        vec![DVec2::Y, DVec2::Y],
        vec![0.0, 1.0],
        vec![0, 1],
    )
    .unwrap()
}

#[test]
fn road_along_curve_has_expected_counts() {
    for samples in [2u32, 3, 10, 32] {
        let params = PathSampleParams {
            samples,
            ..Default::default()
        };
        let mesh = render_curve(&CrossSectionProfile::road(), &s_bend(), &params).unwrap();
        let n = samples as usize;
        assert_eq!(mesh.vertex_count(), 6 * n);
        assert_eq!(mesh.index_count(), 24 * (n - 1));
        assert!(mesh.validate());
    }
}

#[test]
fn deck_faces_up_along_planar_curve() {
    let params = PathSampleParams {
        samples: 12,
        ..Default::default()
    };
    let mesh = render_curve(&deck(), &s_bend(), &params).unwrap();

    for normal in mesh.normals() {
        assert!(normal.abs_diff_eq(DVec3::Y, 1e-9));
    }
    for tri in 0..mesh.triangle_count() {
        let face = mesh.face_normal(tri).unwrap();
        assert!(face.abs_diff_eq(DVec3::Y, 1e-9), "triangle {tri}: {face}");
    }
    for p in mesh.positions() {
        assert!(p.y.abs() < 1e-9);
    }
}

#[test]
fn deck_edges_stay_at_half_width() {
    let curve = s_bend();
    let params = PathSampleParams {
        samples: 9,
        ..Default::default()
    };
    let path = sample_path(&curve, &params).unwrap();
    let mesh = extrude(&deck(), &path).unwrap();

    for (i, frame) in path.iter().enumerate() {
        let left = mesh.positions()[i * 2];
        let right = mesh.positions()[i * 2 + 1];
        assert!((left.distance(frame.position) - 2.0).abs() < 1e-9);
        assert!((right.distance(frame.position) - 2.0).abs() < 1e-9);
        assert!(frame.world_to_local(left).abs_diff_eq(DVec3::new(-2.0, 0.0, 0.0), 1e-9));
    }
}

#[test]
fn sink_receives_f32_buffers() {
    let path = sample_path(&s_bend(), &PathSampleParams::default()).unwrap();
    let mut sink = MeshBuffers::new();
    let mesh = extrude_into(&CrossSectionProfile::road(), &path, &mut sink).unwrap();

    assert_eq!(sink.positions, mesh.positions_f32());
    assert_eq!(sink.normals, mesh.normals_f32());
    assert_eq!(sink.uvs, mesh.uvs_f32());
    assert_eq!(sink.indices, mesh.indices());
}

#[test]
fn failed_generation_leaves_host_mesh_intact() {
    struct HostMesh {
        buffers: MeshBuffers,
        clears: usize,
    }

    impl MeshSink for HostMesh {
        fn clear(&mut self) {
            self.clears += 1;
            self.buffers.clear();
        }

        fn set_buffers(&mut self, positions: &[DVec3], normals: &[DVec3], uvs: &[DVec2], indices: &[u32]) {
            self.buffers.set_buffers(positions, normals, uvs, indices);
        }
    }

    let mut host = HostMesh {
        buffers: MeshBuffers::new(),
        clears: 0,
    };
    let path = sample_path(&s_bend(), &PathSampleParams::default()).unwrap();
    extrude_into(&deck(), &path, &mut host).unwrap();
    let snapshot = host.buffers.clone();

    let mut broken = deck();
    broken.lines = vec![0, 5];
    let err = extrude_into(&broken, &path, &mut host).unwrap_err();
    assert!(matches!(err, SweepError::InvalidInput { .. }));
    assert_eq!(host.clears, 1);
    assert_eq!(host.buffers, snapshot);
}
