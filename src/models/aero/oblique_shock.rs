use std::convert::Infallible;

use twine_core::Model;

use crate::support::shock::{ErrorMetric, FlowState, RatioPair};

/// Supersonic and hypersonic shock ratios at one flow state, with their errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockComparison {
    /// Component of the upstream Mach number normal to the shock.
    pub normal_mach: f64,

    /// Static pressure ratio `p₂/p₁` under both approximations.
    pub pressure: RatioPair,

    /// Density ratio `ρ₂/ρ₁` under both approximations.
    pub density: RatioPair,

    /// Error of the supersonic pressure ratio against the hypersonic one.
    pub pressure_error: ErrorMetric,

    /// Error of the supersonic density ratio against the hypersonic one.
    pub density_error: ErrorMetric,
}

impl ShockComparison {
    /// Returns `true` if both approximations are within `threshold`.
    #[must_use]
    pub fn is_within(&self, threshold: f64) -> bool {
        self.pressure_error.is_within(threshold) && self.density_error.is_within(threshold)
    }
}

/// Compares the supersonic and hypersonic oblique shock relations.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_shocks::models::aero::ObliqueShock;
/// use twine_shocks::support::shock::{FlowState, RELATIVE_ERROR_THRESHOLD};
/// use uom::si::{angle::degree, f64::Angle};
///
/// let state = FlowState::air(12.0, Angle::new::<degree>(80.0)).unwrap();
/// let comparison = ObliqueShock.call(&state).unwrap();
///
/// assert!(comparison.is_within(RELATIVE_ERROR_THRESHOLD));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ObliqueShock;

impl Model for ObliqueShock {
    type Input = FlowState;
    type Output = ShockComparison;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let pressure = input.pressure();
        let density = input.density();

        Ok(ShockComparison {
            normal_mach: input.normal_mach(),
            pressure,
            density,
            pressure_error: pressure.error(),
            density_error: density.error(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, f64::Angle};

    use crate::support::shock::{
        GAMMA_AIR, RELATIVE_ERROR_THRESHOLD, functional, hypersonic_density_ratio,
        supersonic_pressure_ratio,
    };

    #[test]
    fn matches_free_functions() {
        let (mach, beta) = (8.0, 35.0);
        let state = FlowState::air(mach, Angle::new::<degree>(beta)).unwrap();
        let Ok(comparison) = ObliqueShock.call(&state);

        assert_relative_eq!(
            comparison.pressure.supersonic,
            supersonic_pressure_ratio(mach, beta, GAMMA_AIR),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            comparison.density.hypersonic,
            hypersonic_density_ratio(GAMMA_AIR)
        );
        assert_relative_eq!(
            comparison.pressure_error.relative,
            functional::relative_error_pressure(mach, beta, GAMMA_AIR),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            comparison.density_error.absolute,
            functional::absolute_error_density(mach, beta, GAMMA_AIR),
            max_relative = 1e-12
        );
    }

    #[test]
    fn low_normal_mach_is_outside_region() {
        let state = FlowState::air(2.0, Angle::new::<degree>(30.0)).unwrap();
        let Ok(comparison) = ObliqueShock.call(&state);

        assert_relative_eq!(comparison.normal_mach, 1.0, epsilon = 1e-12);
        assert!(!comparison.pressure_error.is_within(RELATIVE_ERROR_THRESHOLD));
        assert!(!comparison.is_within(RELATIVE_ERROR_THRESHOLD));
    }
}
