//! Contact solver configuration.
//!
//! Every knob the experiment variants disagreed on lives here as
//! configuration rather than as a separate code path.

use pressfit_types::{constants, PressfitError, PressfitResult};
use serde::{Deserialize, Serialize};

/// Rotational inertia model used to couple the correction into the
/// orientation channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InertiaModel {
    /// Characteristic half-diagonal of the static body's bounding box as a
    /// stand-in inertia scale. The default, and the cheapest.
    BoxExtent,
    /// Solid sphere of the given radius and mass
    /// (inverse inertia `5 / (2 m r²)` on the diagonal).
    SolidSphere { radius: f32, mass: f32 },
}

/// Configuration for the contact solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Global scale on the correction impulse.
    pub scaling: f32,

    /// Split of the correction between the position and orientation
    /// channels. 1.0 pushes fully by position; 0.5 halves the push and
    /// leaves the rest to the angular term.
    pub correction_factor: f32,

    /// Rotational inertia model.
    pub inertia: InertiaModel,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            scaling: constants::DEFAULT_CORRECTION_SCALING,
            correction_factor: constants::DEFAULT_CORRECTION_FACTOR,
            inertia: InertiaModel::BoxExtent,
        }
    }
}

impl ContactConfig {
    /// Validates the configuration before it reaches the solver.
    ///
    /// The mass-weighted inertia variant divides by `m r²`; zero or
    /// negative values must be rejected here, not discovered mid-frame.
    pub fn validate(&self) -> PressfitResult<()> {
        if !self.scaling.is_finite() || self.scaling <= 0.0 {
            return Err(PressfitError::InvalidConfig(format!(
                "Correction scaling must be positive, got {}",
                self.scaling
            )));
        }
        if !(0.0..=1.0).contains(&self.correction_factor) {
            return Err(PressfitError::InvalidConfig(format!(
                "Correction factor must be in [0, 1], got {}",
                self.correction_factor
            )));
        }
        if let InertiaModel::SolidSphere { radius, mass } = self.inertia {
            if mass <= 0.0 {
                return Err(PressfitError::InvalidConfig(format!(
                    "Sphere inertia mass must be positive, got {mass}"
                )));
            }
            if radius <= 0.0 {
                return Err(PressfitError::InvalidConfig(format!(
                    "Sphere inertia radius must be positive, got {radius}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ContactConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_mass() {
        let config = ContactConfig {
            inertia: InertiaModel::SolidSphere {
                radius: 1.0,
                mass: 0.0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_correction_factor() {
        let config = ContactConfig {
            correction_factor: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
