//! Rigid body transform state.
//!
//! Owned exclusively by the render thread; the worker only ever sees
//! snapshot copies of the composed world matrix. Visual scale is cosmetic
//! and excluded from collision — matrices compose at unit scale.

use pressfit_math::{Mat4, Quat, Vec3};

/// Position and orientation of one rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBodyState {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation, unit length between corrections.
    pub orientation: Quat,
}

impl RigidBodyState {
    /// Creates a body at the given pose.
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Composes the unit-scale world matrix for collision queries.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}
