//! Worker message protocol.
//!
//! Flat numeric payloads only: matrices as column-major `[f32; 16]` (glam's
//! native layout), deltas as component arrays, status as a small integer.
//! Math-object wrapping happens at the edges, never on the wire.

use pressfit_math::{Mat4, Quat, Vec3};
use pressfit_types::QueryStatus;
use serde::{Deserialize, Serialize};

/// One collision query: snapshots of both bodies' world matrices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionQuery {
    /// Moveable body's world matrix, column-major.
    pub moving_world: [f32; 16],
    /// Static body's world matrix, column-major.
    pub static_world: [f32; 16],
}

impl CollisionQuery {
    /// Builds a query from composed matrices.
    pub fn new(moving: Mat4, statik: Mat4) -> Self {
        Self {
            moving_world: moving.to_cols_array(),
            static_world: statik.to_cols_array(),
        }
    }

    /// Moveable matrix as a math type.
    pub fn moving(&self) -> Mat4 {
        Mat4::from_cols_array(&self.moving_world)
    }

    /// Static matrix as a math type.
    pub fn statik(&self) -> Mat4 {
        Mat4::from_cols_array(&self.static_world)
    }
}

/// Worker response: correction deltas plus the query status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionResponse {
    /// Translation correction, zero unless `status` is collision.
    pub position_delta: [f32; 3],
    /// Orientation correction as raw quaternion components (x, y, z, w).
    pub orientation_delta: [f32; 4],
    /// Wire status code: 1 collision, 0 no collision, -1 out of bounds.
    pub status: i32,
}

impl CollisionResponse {
    /// A response carrying correction deltas.
    pub fn collision(position: Vec3, orientation: Quat) -> Self {
        Self {
            position_delta: position.to_array(),
            orientation_delta: [orientation.x, orientation.y, orientation.z, orientation.w],
            status: QueryStatus::Collision.code(),
        }
    }

    /// A delta-free response with the given status.
    pub fn empty(status: QueryStatus) -> Self {
        Self {
            position_delta: [0.0; 3],
            orientation_delta: [0.0; 4],
            status: status.code(),
        }
    }

    /// Decoded status; `None` for an unknown wire code.
    pub fn status(&self) -> Option<QueryStatus> {
        QueryStatus::from_code(self.status)
    }

    /// Position delta as a math type.
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position_delta)
    }

    /// Orientation delta as a math type (non-unit by design).
    pub fn orientation(&self) -> Quat {
        Quat::from_xyzw(
            self.orientation_delta[0],
            self.orientation_delta[1],
            self.orientation_delta[2],
            self.orientation_delta[3],
        )
    }
}
