//! Regime comparisons as free functions.
//!
//! Each function evaluates both approximations of one ratio and compares the
//! supersonic value against the hypersonic one. The hypersonic value is the
//! reference, so it is the denominator of every relative error.

use super::{
    error_metric::{absolute_error, relative_error},
    relations::{
        hypersonic_density_ratio, hypersonic_pressure_ratio, supersonic_density_ratio,
        supersonic_pressure_ratio,
    },
};

/// Absolute error between the pressure ratio approximations.
#[must_use]
pub fn absolute_error_pressure(mach: f64, beta: f64, gamma: f64) -> f64 {
    let supersonic = supersonic_pressure_ratio(mach, beta, gamma);
    let hypersonic = hypersonic_pressure_ratio(mach, beta, gamma);
    absolute_error(supersonic, hypersonic)
}

/// Relative error between the pressure ratio approximations.
#[must_use]
pub fn relative_error_pressure(mach: f64, beta: f64, gamma: f64) -> f64 {
    let supersonic = supersonic_pressure_ratio(mach, beta, gamma);
    let hypersonic = hypersonic_pressure_ratio(mach, beta, gamma);
    relative_error(supersonic, hypersonic)
}

/// Absolute error between the density ratio approximations.
#[must_use]
pub fn absolute_error_density(mach: f64, beta: f64, gamma: f64) -> f64 {
    let supersonic = supersonic_density_ratio(mach, beta, gamma);
    let hypersonic = hypersonic_density_ratio(gamma);
    absolute_error(supersonic, hypersonic)
}

/// Relative error between the density ratio approximations.
#[must_use]
pub fn relative_error_density(mach: f64, beta: f64, gamma: f64) -> f64 {
    let supersonic = supersonic_density_ratio(mach, beta, gamma);
    let hypersonic = hypersonic_density_ratio(gamma);
    relative_error(supersonic, hypersonic)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::shock::GAMMA_AIR;

    #[test]
    fn pressure_at_mach_wave() {
        assert_relative_eq!(
            absolute_error_pressure(2.0, 30.0, GAMMA_AIR),
            1.0 / 6.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            relative_error_pressure(2.0, 30.0, GAMMA_AIR),
            1.0 / 7.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn pressure_absolute_error_is_constant() {
        // p_super − p_hyper = 1 − 2γ/(γ+1) for every normal Mach number.
        for (mach, beta) in [(1.0, 90.0), (3.0, 20.0), (15.0, 75.0)] {
            assert_relative_eq!(
                absolute_error_pressure(mach, beta, GAMMA_AIR),
                1.0 / 6.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn density_at_mach_ten_normal_shock() {
        assert_relative_eq!(
            absolute_error_density(10.0, 90.0, GAMMA_AIR),
            0.285_714_285_714,
            epsilon = 1e-9
        );

        let relative = relative_error_density(10.0, 90.0, GAMMA_AIR);
        assert_relative_eq!(relative, 0.047_619_047_619, epsilon = 1e-9);
        assert!(relative < 0.1);
    }

    #[test]
    fn zero_normal_mach_is_not_trapped() {
        // β = 0 gives Mn = 0, so the hypersonic pressure reference is zero.
        let relative = relative_error_pressure(5.0, 0.0, GAMMA_AIR);
        assert!(!relative.is_finite());

        // The density reference does not depend on Mn and stays finite.
        assert_relative_eq!(relative_error_density(5.0, 0.0, GAMMA_AIR), 1.0);
    }
}
