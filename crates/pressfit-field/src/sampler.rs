//! Nearest-voxel spatial sampler.
//!
//! Maps a point (already in the grid's local frame, see
//! `pressfit_math::LocalFrame`) to its nearest voxel and looks up the
//! stored distance. Nearest-neighbor only: the lookup rounds to the
//! closest voxel center rather than flooring to the containing cell, and
//! performs no interpolation. Both choices are load-bearing for
//! compatibility with the precomputed assets and must not change.

use pressfit_math::Vec3;

use crate::grid::SdfGrid;

/// Linearizes integer voxel coordinates, x fastest-varying.
#[inline]
pub fn linear_index(x: i64, y: i64, z: i64, resolution: [u32; 3]) -> i64 {
    let rx = resolution[0] as i64;
    let ry = resolution[1] as i64;
    x + rx * (y + ry * z)
}

/// Maps a local-frame point to its nearest voxel index.
///
/// Returns `None` when the point lies outside the bounding box on any
/// axis — the expected "not near the static body" case — or when rounding
/// pushes a boundary point past the last voxel. Never panics.
pub fn cell_index(point: Vec3, grid: &SdfGrid) -> Option<usize> {
    if !in_box(point, grid.min(), grid.max()) {
        return None;
    }

    let scaled = (point - grid.min()) / grid.cell_size;
    let x = scaled.x.round() as i64;
    let y = scaled.y.round() as i64;
    let z = scaled.z.round() as i64;

    // Boundary points can round one voxel past the last one even after
    // the box check; treat those as out of bounds rather than letting the
    // linear index wrap into a neighboring row.
    if x < 0 || y < 0 || z < 0 {
        return None;
    }
    if x >= grid.resolution[0] as i64
        || y >= grid.resolution[1] as i64
        || z >= grid.resolution[2] as i64
    {
        return None;
    }

    Some(linear_index(x, y, z, grid.resolution) as usize)
}

/// Looks up the signed distance stored at the point's nearest voxel.
/// O(1); `None` means out of bounds, never "distance zero".
pub fn distance_at(point: Vec3, grid: &SdfGrid) -> Option<f32> {
    cell_index(point, grid).map(|idx| grid.distances[idx])
}

/// Position of the grid sample at the given integer coordinates.
///
/// Samples sit at `bbox_min + i * cell_size`; `cell_index` rounds to the
/// nearest of these, so `cell_index(voxel_center(i)) == i` exactly.
pub fn voxel_center(x: u32, y: u32, z: u32, grid: &SdfGrid) -> Vec3 {
    grid.min()
        + Vec3::new(
            x as f32 * grid.cell_size,
            y as f32 * grid.cell_size,
            z as f32 * grid.cell_size,
        )
}

/// Estimates the surface normal at a point by central differences over the
/// neighboring voxels, one cell apart on each axis.
///
/// Falls back to `None` when any of the six taps leaves the grid or the
/// gradient degenerates to zero length. Used when a surface point carries
/// no authored normal.
pub fn gradient_normal(point: Vec3, grid: &SdfGrid) -> Option<Vec3> {
    let h = grid.cell_size;
    let dx = distance_at(point + Vec3::new(h, 0.0, 0.0), grid)?
        - distance_at(point - Vec3::new(h, 0.0, 0.0), grid)?;
    let dy = distance_at(point + Vec3::new(0.0, h, 0.0), grid)?
        - distance_at(point - Vec3::new(0.0, h, 0.0), grid)?;
    let dz = distance_at(point + Vec3::new(0.0, 0.0, h), grid)?
        - distance_at(point - Vec3::new(0.0, 0.0, h), grid)?;

    let gradient = Vec3::new(dx, dy, dz) / 2.0;
    let length = gradient.length();
    if length <= f32::EPSILON {
        return None;
    }
    Some(gradient / length)
}

fn in_box(point: Vec3, min: Vec3, max: Vec3) -> bool {
    point.x >= min.x
        && point.y >= min.y
        && point.z >= min.z
        && point.x <= max.x
        && point.y <= max.y
        && point.z <= max.z
}
