//! SDF grid data model.
//!
//! Plain numeric fields throughout: the grid crosses the worker boundary at
//! startup, so it stays a flat serializable struct with no math-object
//! wrappers beyond `Vec3` accessors at the edges.

use pressfit_math::Vec3;
use pressfit_types::{PressfitError, PressfitResult};
use serde::{Deserialize, Serialize};

/// An immutable uniform voxel grid of signed distances to the static
/// body's surface. Negative = inside the body.
///
/// # Layout
///
/// `distances` is row-major with x fastest-varying:
/// ```text
/// idx = x + resolution[0] * (y + resolution[1] * z)
/// ```
/// Each value is the signed distance from that voxel's center to the
/// nearest surface point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdfGrid {
    /// Minimum corner of the sampled volume, in the static body's local frame.
    pub bbox_min: [f32; 3],
    /// Maximum corner of the sampled volume.
    pub bbox_max: [f32; 3],
    /// Edge length of a cubic voxel.
    pub cell_size: f32,
    /// Voxel counts along each axis.
    pub resolution: [u32; 3],
    /// Flattened signed distances, length `rx * ry * rz`.
    pub distances: Vec<f32>,
}

impl SdfGrid {
    /// Builds a grid, validating every structural invariant.
    ///
    /// Rejects zero/negative cell size, zero-extent bounding boxes (which
    /// would later divide the contact solver by zero), and a distance
    /// buffer whose length disagrees with the resolution.
    pub fn new(
        bbox_min: [f32; 3],
        bbox_max: [f32; 3],
        cell_size: f32,
        resolution: [u32; 3],
        distances: Vec<f32>,
    ) -> PressfitResult<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(PressfitError::InvalidAsset(format!(
                "Cell size must be positive, got {cell_size}"
            )));
        }
        for axis in 0..3 {
            if bbox_max[axis] <= bbox_min[axis] {
                return Err(PressfitError::InvalidAsset(format!(
                    "Degenerate bounding box on axis {axis}: min {} >= max {}",
                    bbox_min[axis], bbox_max[axis]
                )));
            }
        }
        let expected = resolution.iter().map(|&r| r as usize).product::<usize>();
        if expected == 0 {
            return Err(PressfitError::InvalidAsset(format!(
                "Resolution has a zero axis: {resolution:?}"
            )));
        }
        if distances.len() != expected {
            return Err(PressfitError::InvalidAsset(format!(
                "Distance count {} does not match resolution {:?} ({} cells)",
                distances.len(),
                resolution,
                expected
            )));
        }

        Ok(Self {
            bbox_min,
            bbox_max,
            cell_size,
            resolution,
            distances,
        })
    }

    /// Number of voxels in the grid.
    pub fn cell_count(&self) -> usize {
        self.distances.len()
    }

    /// Minimum corner as a vector.
    pub fn min(&self) -> Vec3 {
        Vec3::from_array(self.bbox_min)
    }

    /// Maximum corner as a vector.
    pub fn max(&self) -> Vec3 {
        Vec3::from_array(self.bbox_max)
    }

    /// Half the length of the bounding box diagonal — the characteristic
    /// moment-arm scale the contact solver normalizes against.
    pub fn half_diagonal(&self) -> f32 {
        (self.max() - self.min()).length() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_grid(distances: Vec<f32>) -> PressfitResult<SdfGrid> {
        SdfGrid::new([0.0; 3], [2.0, 2.0, 2.0], 1.0, [2, 2, 2], distances)
    }

    #[test]
    fn accepts_consistent_buffer() {
        let grid = unit_grid(vec![0.5; 8]).unwrap();
        assert_eq!(grid.cell_count(), 8);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(unit_grid(vec![0.5; 7]).is_err());
    }

    #[test]
    fn rejects_zero_extent_bbox() {
        let err = SdfGrid::new([0.0; 3], [2.0, 0.0, 2.0], 1.0, [2, 2, 2], vec![0.0; 8]);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_non_positive_cell_size() {
        let err = SdfGrid::new([0.0; 3], [2.0; 3], 0.0, [2, 2, 2], vec![0.0; 8]);
        assert!(err.is_err());
    }

    #[test]
    fn half_diagonal_of_unit_cube() {
        let grid = SdfGrid::new([0.0; 3], [1.0; 3], 0.5, [2, 2, 2], vec![0.0; 8]).unwrap();
        assert!((grid.half_diagonal() - 3.0_f32.sqrt() / 2.0).abs() < 1e-6);
    }
}
