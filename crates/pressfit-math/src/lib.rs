//! # pressfit-math
//!
//! Linear algebra primitives for the Pressfit collision core.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, `Quat`) as the canonical
//!   math types for Pressfit
//! - [`LocalFrame`] — a body's world matrix with its inverse cached, for
//!   repeated world→local point transforms
//! - Normal transport (inverse-transpose rule) and the pure quaternion
//!   product used by the contact solver

pub mod frame;
pub mod rotation;

pub use frame::LocalFrame;
pub use rotation::{pure_quat_mul, transform_normal};

// Re-export glam types as the canonical math types for Pressfit.
pub use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
