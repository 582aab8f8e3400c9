//! One-shot impulse-style contact correction.
//!
//! Given the single deepest-penetrating sample point, computes the position
//! and orientation deltas that move the point back to the surface along the
//! contact normal, with angular coupling through an inverse inertia scale.
//! No iteration, no relaxation: one contact drives one correction per query.

use pressfit_math::{pure_quat_mul, Quat, Vec3};
use pressfit_types::PressfitResult;

use crate::config::{ContactConfig, InertiaModel};

/// Geometry of a single detected contact, all in world space.
#[derive(Debug, Clone, Copy)]
pub struct ContactGeometry {
    /// Signed distance at the deepest sample; negative, magnitude = depth.
    pub penetration: f32,
    /// Static body's sampled extent, the solver's inertia stand-in.
    pub bbox_min: Vec3,
    /// See `bbox_min`.
    pub bbox_max: Vec3,
    /// The penetrating sample point.
    pub contact_point: Vec3,
    /// The moveable body's center of mass.
    pub root_point: Vec3,
    /// Outward surface normal at the contact, unit length, pointing away
    /// from the static body.
    pub normal: Vec3,
}

/// Correction computed for one contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactDelta {
    /// Translation to apply to the moveable body.
    pub position: Vec3,
    /// Orientation correction: the pure quaternion `(axis, 0)` multiplied
    /// against the current orientation. Non-unit; the caller applies it
    /// additively and renormalizes per its configured update mode.
    pub orientation: Quat,
}

impl ContactDelta {
    /// A correction that changes nothing.
    pub fn zero() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::from_xyzw(0.0, 0.0, 0.0, 0.0),
        }
    }
}

/// Single-contact correction solver.
///
/// Construction validates the configuration; a solver in hand implies the
/// knobs are usable (positive scaling, nonzero sphere mass, ...). The
/// caller guarantees a validated grid, so the extent in `ContactGeometry`
/// is nonzero.
#[derive(Debug, Clone)]
pub struct ContactSolver {
    config: ContactConfig,
}

impl ContactSolver {
    /// Creates a solver from a validated configuration.
    pub fn new(config: ContactConfig) -> PressfitResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// Computes the correction for one contact against the body's current
    /// orientation.
    ///
    /// `lambda = (penetration * scaling) / (inv_mass + k |r × n|²)` where
    /// `k` is the inverse inertia scale; for the box-extent model
    /// `inv_mass = 1` and `k = 5 / (2 g²)` with `g` the half-diagonal of
    /// the grid's bounding box, so the denominator is ≥ 1 and `lambda`
    /// never exceeds `penetration * scaling` in magnitude.
    pub fn resolve(&self, geometry: &ContactGeometry, orientation: Quat) -> ContactDelta {
        let r = geometry.contact_point - geometry.root_point;

        let (inv_mass, inv_inertia) = match self.config.inertia {
            InertiaModel::BoxExtent => {
                let g = (geometry.bbox_max - geometry.bbox_min).length() / 2.0;
                (1.0, 5.0 / (2.0 * g * g))
            }
            InertiaModel::SolidSphere { radius, mass } => {
                (1.0 / mass, 5.0 / (2.0 * mass * radius * radius))
            }
        };

        let torque_axis = r.cross(geometry.normal);
        let lambda = (geometry.penetration * self.config.scaling)
            / (inv_mass + inv_inertia * torque_axis.length_squared());

        let position = geometry.normal * (lambda * inv_mass * self.config.correction_factor);

        let half_axis = torque_axis * (inv_inertia * lambda / 2.0);
        let orientation_delta = pure_quat_mul(
            Quat::from_xyzw(half_axis.x, half_axis.y, half_axis.z, 0.0),
            orientation,
        );

        ContactDelta {
            position,
            orientation: orientation_delta,
        }
    }
}
