//! Cached-inverse coordinate frame.
//!
//! Transforming sample points into the static body's local frame needs the
//! inverse of its world matrix. Inverting per point (or per sample) is
//! wasted work when the matrix only changes between frames, so the inverse
//! is computed once per `set_world` and reused for every point.

use glam::{Mat4, Vec3};

/// A rigid body's world matrix paired with its cached inverse.
///
/// The inverse is recomputed only when the world matrix is replaced —
/// callers with a stationary body pay for one inversion total, but the
/// contract does not assume immutability.
#[derive(Debug, Clone)]
pub struct LocalFrame {
    world: Mat4,
    inverse: Mat4,
}

impl LocalFrame {
    /// Creates a frame from a world matrix, caching its inverse.
    pub fn new(world: Mat4) -> Self {
        Self {
            world,
            inverse: world.inverse(),
        }
    }

    /// Replaces the world matrix and refreshes the cached inverse.
    pub fn set_world(&mut self, world: Mat4) {
        self.world = world;
        self.inverse = world.inverse();
    }

    /// The current world matrix.
    pub fn world(&self) -> Mat4 {
        self.world
    }

    /// Transforms a world-space point into this frame's local space
    /// (affine point transform, w = 1).
    pub fn to_local(&self, world_point: Vec3) -> Vec3 {
        self.inverse.transform_point3(world_point)
    }

    /// Transforms a local-space point out to world space.
    pub fn to_world(&self, local_point: Vec3) -> Vec3 {
        self.world.transform_point3(local_point)
    }
}

impl Default for LocalFrame {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}
