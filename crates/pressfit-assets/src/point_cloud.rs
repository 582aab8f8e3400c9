//! Surface sample points on the moveable body.
//!
//! Loaded once at startup, read-only afterwards; every frame the points are
//! transformed by the moveable body's current world matrix and tested
//! against the static body's distance field.

use pressfit_math::Vec3;
use serde::{Deserialize, Serialize};

/// One candidate contact sample on the moveable body's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Position in the moveable body's undeformed local frame.
    pub local_position: [f32; 3],
    /// Outward-facing surface normal in the same frame. Zero when the
    /// source asset carried no normals.
    pub local_normal: [f32; 3],
}

impl SurfacePoint {
    /// Local position as a vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.local_position)
    }

    /// Local normal as a vector (may be zero length).
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.local_normal)
    }

    /// True when the source asset supplied a normal for this point.
    pub fn has_normal(&self) -> bool {
        self.normal().length_squared() > 0.0
    }
}

/// The full set of candidate samples for one moveable body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<SurfacePoint>,
}

impl PointCloud {
    /// Number of candidate samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the cloud holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
