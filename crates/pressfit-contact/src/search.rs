//! Deepest-penetration search over the candidate surface points.
//!
//! Each query transforms every candidate point by the moveable body's
//! world matrix, carries it into the static body's grid frame, and samples
//! the distance field. Only the single deepest in-bounds sample drives the
//! correction; ties go to the first point in input order.

use pressfit_assets::PointCloud;
use pressfit_field::{sampler, SdfGrid};
use pressfit_math::{LocalFrame, Mat4, Vec3};

/// Result of one deepest-penetration scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeepestSample {
    /// No candidate point landed inside the grid's bounding box.
    OutOfBounds,
    /// In-bounds samples exist, but none below the contact threshold.
    Clear {
        /// The smallest in-bounds distance seen.
        min_distance: f32,
    },
    /// The deepest sample penetrates below the threshold.
    Contact {
        /// Index of the winning point in the cloud's input order.
        index: usize,
        /// Its sampled signed distance (below the threshold).
        distance: f32,
        /// Its position in world space.
        point_world: Vec3,
    },
}

/// Scans the cloud and reports the deepest sample.
///
/// `threshold` is the distance a sample must fall strictly below to count
/// as a contact; 0.0 means strict penetration only.
pub fn deepest_penetration(
    cloud: &PointCloud,
    moving_world: Mat4,
    static_frame: &LocalFrame,
    grid: &SdfGrid,
    threshold: f32,
) -> DeepestSample {
    let mut deepest: Option<(usize, f32, Vec3)> = None;

    for (index, point) in cloud.points.iter().enumerate() {
        let world = moving_world.transform_point3(point.position());
        let local = static_frame.to_local(world);

        let Some(distance) = sampler::distance_at(local, grid) else {
            continue;
        };

        // Strict less-than keeps the first point on ties.
        match deepest {
            Some((_, best, _)) if distance >= best => {}
            _ => deepest = Some((index, distance, world)),
        }
    }

    match deepest {
        None => DeepestSample::OutOfBounds,
        Some((index, distance, point_world)) if distance < threshold => DeepestSample::Contact {
            index,
            distance,
            point_world,
        },
        Some((_, min_distance, _)) => DeepestSample::Clear { min_distance },
    }
}
