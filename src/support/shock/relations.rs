//! Closed-form oblique shock relations.
//!
//! Every function takes the upstream Mach number and the shock angle `beta`
//! in degrees and works through the normal Mach number `Mn = M·sin(β)`.
//! Inputs are not validated: a negative Mach number or `gamma ≤ 1` produces
//! a defined but non-physical value rather than an error.

/// Returns the component of the upstream Mach number normal to the shock.
#[must_use]
pub fn normal_mach(mach: f64, beta: f64) -> f64 {
    mach * beta.to_radians().sin()
}

/// Exact static pressure ratio `p₂/p₁` across an oblique shock.
///
/// Computes `1 + 2γ/(γ+1)·(Mn² − 1)`.
#[must_use]
pub fn supersonic_pressure_ratio(mach: f64, beta: f64, gamma: f64) -> f64 {
    let mn2 = normal_mach(mach, beta).powi(2);
    1.0 + (2.0 * gamma) * (mn2 - 1.0) / (gamma + 1.0)
}

/// Hypersonic limit of the pressure ratio, `2γ·Mn²/(γ+1)`.
///
/// This is the leading term of [`supersonic_pressure_ratio`] as `Mn²` grows.
#[must_use]
pub fn hypersonic_pressure_ratio(mach: f64, beta: f64, gamma: f64) -> f64 {
    let mn2 = normal_mach(mach, beta).powi(2);
    (2.0 * gamma * mn2) / (gamma + 1.0)
}

/// Exact density ratio `ρ₂/ρ₁` across an oblique shock.
///
/// Computes `(γ+1)·Mn² / (2 + (γ−1)·Mn²)`.
#[must_use]
pub fn supersonic_density_ratio(mach: f64, beta: f64, gamma: f64) -> f64 {
    let mn2 = normal_mach(mach, beta).powi(2);
    ((gamma + 1.0) * mn2) / (2.0 + (gamma - 1.0) * mn2)
}

/// Hypersonic limit of the density ratio, `(γ+1)/(γ−1)`.
///
/// Independent of Mach number and shock angle.
#[must_use]
pub fn hypersonic_density_ratio(gamma: f64) -> f64 {
    (gamma + 1.0) / (gamma - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::shock::GAMMA_AIR;

    #[test]
    fn normal_mach_at_thirty_degrees() {
        assert_relative_eq!(normal_mach(2.0, 30.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normal_mach(7.0, 90.0), 7.0);
        assert_relative_eq!(normal_mach(7.0, 0.0), 0.0);
    }

    #[test]
    fn pressure_ratios() {
        // Mn = 1 is a Mach wave: no pressure jump.
        assert_relative_eq!(
            supersonic_pressure_ratio(2.0, 30.0, GAMMA_AIR),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            hypersonic_pressure_ratio(2.0, 30.0, GAMMA_AIR),
            7.0 / 6.0,
            epsilon = 1e-12
        );

        // Normal shock at M = 2 in air.
        assert_relative_eq!(
            supersonic_pressure_ratio(2.0, 90.0, GAMMA_AIR),
            4.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn normal_shock_density_ratio() {
        // β = 90° reduces to a normal shock with Mn = M.
        for mach in [1.0, 1.5, 2.0, 5.0, 15.0] {
            for gamma in [1.1, 1.3, GAMMA_AIR, 5.0 / 3.0] {
                let expected =
                    (gamma + 1.0) * mach * mach / ((gamma - 1.0) * mach * mach + 2.0);
                assert_relative_eq!(
                    supersonic_density_ratio(mach, 90.0, gamma),
                    expected,
                    max_relative = 1e-12
                );
            }
        }

        assert_relative_eq!(
            supersonic_density_ratio(10.0, 90.0, GAMMA_AIR),
            240.0 / 42.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn hypersonic_density_limit() {
        assert_relative_eq!(hypersonic_density_ratio(GAMMA_AIR), 6.0, epsilon = 1e-12);

        // The exact ratio approaches the limit as Mn grows.
        let exact = supersonic_density_ratio(1e6, 90.0, GAMMA_AIR);
        assert_relative_eq!(exact, 6.0, max_relative = 1e-9);
    }

    #[test]
    fn unvalidated_inputs_still_evaluate() {
        // γ < 1 gives a negative density limit instead of an error.
        assert!(hypersonic_density_ratio(0.5) < 0.0);
        assert!(supersonic_pressure_ratio(-3.0, 45.0, GAMMA_AIR).is_finite());
    }
}
