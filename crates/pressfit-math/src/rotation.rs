//! Normal transport and quaternion helpers for the contact solver.

use glam::{Mat4, Quat, Vec3};

/// Carries a direction (surface normal) from local to world space.
///
/// Normals transform by the inverse-transpose of the world matrix, not by
/// the point rule; the result is renormalized because a scaled matrix does
/// not preserve length.
pub fn transform_normal(local_normal: Vec3, world: Mat4) -> Vec3 {
    let n = world
        .inverse()
        .transpose()
        .transform_vector3(local_normal);
    n.normalize_or_zero()
}

/// Raw Hamilton product of two quaternions without renormalization.
///
/// The solver multiplies a pure quaternion (w = 0, built from the angular
/// correction axis) against the body's current orientation; the product is
/// intentionally non-unit and is applied additively by the caller.
pub fn pure_quat_mul(lhs: Quat, rhs: Quat) -> Quat {
    Quat::from_xyzw(
        lhs.w * rhs.x + lhs.x * rhs.w + lhs.y * rhs.z - lhs.z * rhs.y,
        lhs.w * rhs.y - lhs.x * rhs.z + lhs.y * rhs.w + lhs.z * rhs.x,
        lhs.w * rhs.z + lhs.x * rhs.y - lhs.y * rhs.x + lhs.z * rhs.w,
        lhs.w * rhs.w - lhs.x * rhs.x - lhs.y * rhs.y - lhs.z * rhs.z,
    )
}
