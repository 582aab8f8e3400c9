//! Integration tests for pressfit-contact.

use pressfit_assets::{PointCloud, SurfacePoint};
use pressfit_contact::{
    deepest_penetration, ContactConfig, ContactGeometry, ContactSolver, DeepestSample,
};
use pressfit_field::SdfGrid;
use pressfit_math::{LocalFrame, Mat4, Quat, Vec3};

fn point_at(position: [f32; 3]) -> SurfacePoint {
    SurfacePoint {
        local_position: position,
        local_normal: [0.0, 1.0, 0.0],
    }
}

/// Grid spanning [0,10]³ with a given uniform distance.
fn uniform_grid(distance: f32) -> SdfGrid {
    SdfGrid::new([0.0; 3], [10.0; 3], 1.0, [10, 10, 10], vec![distance; 1000]).unwrap()
}

// ─── Deepest-Point Search Tests ───────────────────────────────

#[test]
fn selects_the_single_penetrating_point() {
    // Distances positive everywhere except voxel (2,2,2).
    let mut distances = vec![0.5_f32; 1000];
    distances[2 + 10 * (2 + 10 * 2)] = -0.05;
    let grid = SdfGrid::new([0.0; 3], [10.0; 3], 1.0, [10, 10, 10], distances).unwrap();

    let cloud = PointCloud {
        points: vec![
            point_at([5.0, 5.0, 5.0]),
            point_at([2.0, 2.0, 2.0]),
            point_at([7.0, 1.0, 3.0]),
        ],
    };

    let result = deepest_penetration(
        &cloud,
        Mat4::IDENTITY,
        &LocalFrame::default(),
        &grid,
        0.0,
    );
    match result {
        DeepestSample::Contact {
            index, distance, ..
        } => {
            assert_eq!(index, 1);
            assert!((distance - (-0.05)).abs() < 1e-6);
        }
        other => panic!("expected contact, got {other:?}"),
    }
}

#[test]
fn ties_break_to_first_point_in_input_order() {
    let grid = uniform_grid(-0.25);
    let cloud = PointCloud {
        points: vec![point_at([3.0, 3.0, 3.0]), point_at([6.0, 6.0, 6.0])],
    };

    let result = deepest_penetration(
        &cloud,
        Mat4::IDENTITY,
        &LocalFrame::default(),
        &grid,
        0.0,
    );
    match result {
        DeepestSample::Contact { index, .. } => assert_eq!(index, 0),
        other => panic!("expected contact, got {other:?}"),
    }
}

#[test]
fn all_points_outside_the_box_is_out_of_bounds() {
    let grid = uniform_grid(-1.0);
    let cloud = PointCloud {
        points: vec![point_at([50.0, 0.0, 0.0]), point_at([-5.0, -5.0, -5.0])],
    };

    let result = deepest_penetration(
        &cloud,
        Mat4::IDENTITY,
        &LocalFrame::default(),
        &grid,
        0.0,
    );
    assert_eq!(result, DeepestSample::OutOfBounds);
}

#[test]
fn non_penetrating_samples_report_clear() {
    let grid = uniform_grid(0.4);
    let cloud = PointCloud {
        points: vec![point_at([5.0, 5.0, 5.0])],
    };

    let result = deepest_penetration(
        &cloud,
        Mat4::IDENTITY,
        &LocalFrame::default(),
        &grid,
        0.0,
    );
    assert_eq!(
        result,
        DeepestSample::Clear {
            min_distance: 0.4
        }
    );
}

#[test]
fn threshold_widens_the_contact_band() {
    let grid = uniform_grid(0.05);
    let cloud = PointCloud {
        points: vec![point_at([5.0, 5.0, 5.0])],
    };
    let frame = LocalFrame::default();

    // Strict: 0.05 is clear. With a looser 0.1 trigger it becomes a
    // contact.
    assert!(matches!(
        deepest_penetration(&cloud, Mat4::IDENTITY, &frame, &grid, 0.0),
        DeepestSample::Clear { .. }
    ));
    assert!(matches!(
        deepest_penetration(&cloud, Mat4::IDENTITY, &frame, &grid, 0.1),
        DeepestSample::Contact { .. }
    ));
}

#[test]
fn moving_matrix_carries_points_into_the_grid() {
    let grid = uniform_grid(-0.5);
    // Point far outside the grid in local space, translated inside by the
    // moveable body's world matrix.
    let cloud = PointCloud {
        points: vec![point_at([-95.0, 5.0, 5.0])],
    };
    let moving = Mat4::from_translation(Vec3::new(100.0, 0.0, 0.0));

    let result = deepest_penetration(&cloud, moving, &LocalFrame::default(), &grid, 0.0);
    match result {
        DeepestSample::Contact { point_world, .. } => {
            assert!((point_world - Vec3::new(5.0, 5.0, 5.0)).length() < 1e-4);
        }
        other => panic!("expected contact, got {other:?}"),
    }
}

#[test]
fn static_frame_transform_is_applied() {
    let grid = uniform_grid(-0.5);
    // Static body shifted +100 on x: a world point at (105,5,5) lands at
    // grid-local (5,5,5).
    let frame = LocalFrame::new(Mat4::from_translation(Vec3::new(100.0, 0.0, 0.0)));
    let cloud = PointCloud {
        points: vec![point_at([105.0, 5.0, 5.0])],
    };

    let result = deepest_penetration(&cloud, Mat4::IDENTITY, &frame, &grid, 0.0);
    assert!(matches!(result, DeepestSample::Contact { .. }));
}

// ─── Solver Property Tests ────────────────────────────────────

#[test]
fn solver_and_search_agree_end_to_end() {
    let grid = uniform_grid(-0.1);
    let cloud = PointCloud {
        points: vec![point_at([5.0, 8.0, 5.0])],
    };
    let frame = LocalFrame::default();

    let DeepestSample::Contact {
        distance,
        point_world,
        ..
    } = deepest_penetration(&cloud, Mat4::IDENTITY, &frame, &grid, 0.0)
    else {
        panic!("expected contact");
    };

    let solver = ContactSolver::new(ContactConfig::default()).unwrap();
    let delta = solver.resolve(
        &ContactGeometry {
            penetration: distance,
            bbox_min: grid.min(),
            bbox_max: grid.max(),
            contact_point: point_world,
            root_point: Vec3::new(5.0, 5.0, 5.0),
            normal: Vec3::Y,
        },
        Quat::IDENTITY,
    );

    // The moment arm is parallel to the normal here, so the torque axis
    // vanishes and the whole correction lands in the position channel.
    assert!(delta.position.y < 0.0);
    assert_eq!(delta.orientation.length(), 0.0);
}

#[test]
fn config_serializes_for_tooling() {
    let config = ContactConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let recovered: ContactConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.scaling, config.scaling);
    assert_eq!(recovered.correction_factor, config.correction_factor);
}
