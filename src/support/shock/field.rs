use std::fmt;

use super::{functional, relations};

/// A scalar field of `(mach, beta, gamma)` that can be evaluated pointwise.
///
/// Used to select what [`grid::evaluate`](super::grid::evaluate) computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShockField {
    NormalMach,
    SupersonicPressure,
    HypersonicPressure,
    SupersonicDensity,
    HypersonicDensity,
    AbsoluteErrorPressure,
    RelativeErrorPressure,
    AbsoluteErrorDensity,
    RelativeErrorDensity,
}

impl ShockField {
    /// Every field, in declaration order.
    pub const ALL: [ShockField; 9] = [
        Self::NormalMach,
        Self::SupersonicPressure,
        Self::HypersonicPressure,
        Self::SupersonicDensity,
        Self::HypersonicDensity,
        Self::AbsoluteErrorPressure,
        Self::RelativeErrorPressure,
        Self::AbsoluteErrorDensity,
        Self::RelativeErrorDensity,
    ];

    /// Evaluates this field at a single point, with `beta` in degrees.
    #[must_use]
    pub fn evaluate(self, mach: f64, beta: f64, gamma: f64) -> f64 {
        match self {
            Self::NormalMach => relations::normal_mach(mach, beta),
            Self::SupersonicPressure => relations::supersonic_pressure_ratio(mach, beta, gamma),
            Self::HypersonicPressure => relations::hypersonic_pressure_ratio(mach, beta, gamma),
            Self::SupersonicDensity => relations::supersonic_density_ratio(mach, beta, gamma),
            Self::HypersonicDensity => relations::hypersonic_density_ratio(gamma),
            Self::AbsoluteErrorPressure => functional::absolute_error_pressure(mach, beta, gamma),
            Self::RelativeErrorPressure => functional::relative_error_pressure(mach, beta, gamma),
            Self::AbsoluteErrorDensity => functional::absolute_error_density(mach, beta, gamma),
            Self::RelativeErrorDensity => functional::relative_error_density(mach, beta, gamma),
        }
    }
}

impl fmt::Display for ShockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NormalMach => "normal Mach number",
            Self::SupersonicPressure => "supersonic pressure ratio",
            Self::HypersonicPressure => "hypersonic pressure ratio",
            Self::SupersonicDensity => "supersonic density ratio",
            Self::HypersonicDensity => "hypersonic density ratio",
            Self::AbsoluteErrorPressure => "absolute error in pressure",
            Self::RelativeErrorPressure => "relative error in pressure",
            Self::AbsoluteErrorDensity => "absolute error in density",
            Self::RelativeErrorDensity => "relative error in density",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, f64::Angle};

    use crate::support::shock::{FlowState, GAMMA_AIR};

    #[test]
    fn fields_agree_with_flow_state() {
        let state = FlowState::air(6.0, Angle::new::<degree>(40.0)).unwrap();
        let (mach, beta) = (6.0, 40.0);

        let expected = [
            state.normal_mach(),
            state.pressure().supersonic,
            state.pressure().hypersonic,
            state.density().supersonic,
            state.density().hypersonic,
            state.pressure_error().absolute,
            state.pressure_error().relative,
            state.density_error().absolute,
            state.density_error().relative,
        ];

        for (field, expected) in ShockField::ALL.into_iter().zip(expected) {
            assert_relative_eq!(
                field.evaluate(mach, beta, GAMMA_AIR),
                expected,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            ShockField::RelativeErrorDensity.to_string(),
            "relative error in density"
        );
    }
}
