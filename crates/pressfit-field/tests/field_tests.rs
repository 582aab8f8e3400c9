//! Integration tests for pressfit-field.

use pressfit_field::sampler::{cell_index, distance_at, gradient_normal, voxel_center};
use pressfit_field::SdfGrid;
use pressfit_math::Vec3;

/// 10×10×10 unit-cell grid spanning [0,10]³, every voxel one unit inside
/// the body except the center voxel (index 555), which stores 0.0.
fn center_hole_grid() -> SdfGrid {
    let mut distances = vec![-1.0_f32; 1000];
    distances[555] = 0.0;
    SdfGrid::new([0.0; 3], [10.0; 3], 1.0, [10, 10, 10], distances).unwrap()
}

// ─── Sampler Bounds Tests ─────────────────────────────────────

#[test]
fn points_outside_box_report_out_of_bounds() {
    let grid = center_hole_grid();
    let outside = [
        Vec3::new(-0.1, 5.0, 5.0),
        Vec3::new(5.0, 10.1, 5.0),
        Vec3::new(5.0, 5.0, -3.0),
        Vec3::new(50.0, 50.0, 50.0),
    ];
    for p in outside {
        assert_eq!(cell_index(p, &grid), None, "point {p:?} should be outside");
        assert_eq!(distance_at(p, &grid), None);
    }
}

#[test]
fn boundary_point_that_rounds_past_last_voxel_is_out_of_bounds() {
    let grid = center_hole_grid();
    // (10,5,5) passes the box check but rounds to x = 10, one voxel past
    // the grid. Must be rejected, not wrapped into a neighboring row.
    assert_eq!(cell_index(Vec3::new(10.0, 5.0, 5.0), &grid), None);
    assert_eq!(cell_index(Vec3::new(10.0, 10.0, 10.0), &grid), None);
}

#[test]
fn inside_points_always_index() {
    let grid = center_hole_grid();
    assert!(cell_index(Vec3::new(0.0, 0.0, 0.0), &grid).is_some());
    assert!(cell_index(Vec3::new(9.4, 9.4, 9.4), &grid).is_some());
}

// ─── Indexing and Round-Trip Tests ────────────────────────────

#[test]
fn center_voxel_returns_stored_distance_not_sentinel() {
    let grid = center_hole_grid();
    // Index 555 stores 0.0 — a valid distance that must be distinguishable
    // from the out-of-bounds case.
    assert_eq!(cell_index(Vec3::new(5.0, 5.0, 5.0), &grid), Some(555));
    assert_eq!(distance_at(Vec3::new(5.0, 5.0, 5.0), &grid), Some(0.0));
    assert_eq!(distance_at(Vec3::new(4.0, 5.0, 5.0), &grid), Some(-1.0));
}

#[test]
fn row_major_x_fastest() {
    let grid = center_hole_grid();
    assert_eq!(cell_index(Vec3::new(3.0, 0.0, 0.0), &grid), Some(3));
    assert_eq!(cell_index(Vec3::new(0.0, 2.0, 0.0), &grid), Some(20));
    assert_eq!(cell_index(Vec3::new(0.0, 0.0, 1.0), &grid), Some(100));
    assert_eq!(cell_index(Vec3::new(3.0, 2.0, 1.0), &grid), Some(123));
}

#[test]
fn voxel_center_round_trips_exactly() {
    let grid = center_hole_grid();
    for (x, y, z) in [(0, 0, 0), (4, 7, 2), (9, 9, 9)] {
        let center = voxel_center(x, y, z, &grid);
        let idx = cell_index(center, &grid).expect("voxel center must index");
        assert_eq!(idx, (x + 10 * (y + 10 * z)) as usize);
    }
}

#[test]
fn perturbed_center_rounds_back_within_half_cell() {
    let grid = center_hole_grid();
    let center = voxel_center(4, 7, 2, &grid);
    let nudged = center + Vec3::new(0.49, -0.49, 0.49);
    assert_eq!(cell_index(nudged, &grid), cell_index(center, &grid));
}

#[test]
fn lookup_is_deterministic() {
    let grid = center_hole_grid();
    let p = Vec3::new(2.3, 7.9, 4.1);
    let first = distance_at(p, &grid);
    for _ in 0..100 {
        let again = distance_at(p, &grid);
        assert_eq!(first.map(f32::to_bits), again.map(f32::to_bits));
    }
}

// ─── Gradient Tests ───────────────────────────────────────────

#[test]
fn gradient_normal_points_along_increasing_distance() {
    // Distance increases linearly with x: d(x) = x - 5.
    let mut distances = vec![0.0_f32; 1000];
    for z in 0..10_usize {
        for y in 0..10 {
            for x in 0..10 {
                distances[x + 10 * (y + 10 * z)] = x as f32 - 5.0;
            }
        }
    }
    let grid = SdfGrid::new([0.0; 3], [10.0; 3], 1.0, [10, 10, 10], distances).unwrap();

    let n = gradient_normal(Vec3::new(5.0, 5.0, 5.0), &grid).unwrap();
    assert!((n - Vec3::X).length() < 1e-5);
}

#[test]
fn gradient_near_edge_is_none() {
    let grid = center_hole_grid();
    // One of the six taps leaves the box.
    assert_eq!(gradient_normal(Vec3::new(0.2, 5.0, 5.0), &grid), None);
}

#[test]
fn gradient_of_flat_field_is_none() {
    let grid = SdfGrid::new([0.0; 3], [10.0; 3], 1.0, [10, 10, 10], vec![-1.0; 1000]).unwrap();
    assert_eq!(gradient_normal(Vec3::new(5.0, 5.0, 5.0), &grid), None);
}

// ─── Serialization ────────────────────────────────────────────

#[test]
fn grid_serializes_with_plain_numeric_fields() {
    let grid = SdfGrid::new([0.0; 3], [2.0; 3], 1.0, [2, 2, 2], vec![0.25; 8]).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    let recovered: SdfGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.resolution, [2, 2, 2]);
    assert_eq!(recovered.distances.len(), 8);
}
