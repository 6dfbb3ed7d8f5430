//! Accuracy boundary of the hypersonic approximation.
//!
//! The relative error between the regimes depends on the flow only through
//! the normal Mach number, so the region where the hypersonic approximation
//! is accurate is bounded by a single critical normal Mach number `Mn*`.
//! This module finds `Mn*` by bisection and maps it back to a free-stream
//! Mach number for any shock angle.

mod config;
mod error;
mod problem;

pub use config::ThresholdConfig;
pub use error::ThresholdError;

use std::fmt;

use tracing::{debug, warn};
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{angle::radian, f64::Angle};

use problem::{NormalShockErrorModel, ThresholdProblem};

/// The shock ratio whose approximation error is being bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorQuantity {
    Pressure,
    Density,
}

impl fmt::Display for ErrorQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => f.write_str("pressure"),
            Self::Density => f.write_str("density"),
        }
    }
}

/// Finds the normal Mach number at which the relative error of `quantity`
/// equals `threshold`.
///
/// Above the returned value the hypersonic approximation is within `threshold`
/// of the exact relation.
///
/// # Errors
///
/// Returns a [`ThresholdError`] if `threshold` is not a positive finite value,
/// if the configured bracket does not straddle it, or if bisection fails to
/// converge.
///
/// # Example
///
/// ```
/// use twine_shocks::support::shock::{
///     GAMMA_AIR, RELATIVE_ERROR_THRESHOLD,
///     threshold::{ErrorQuantity, ThresholdConfig, critical_normal_mach},
/// };
///
/// let mn = critical_normal_mach(
///     ErrorQuantity::Density,
///     GAMMA_AIR,
///     RELATIVE_ERROR_THRESHOLD,
///     &ThresholdConfig::default(),
/// )
/// .unwrap();
///
/// assert!((mn - 45.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn critical_normal_mach(
    quantity: ErrorQuantity,
    gamma: f64,
    threshold: f64,
    config: &ThresholdConfig,
) -> Result<f64, ThresholdError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ThresholdError::InvalidThreshold { threshold });
    }

    debug!(%quantity, gamma, threshold, "solving for critical normal Mach");

    let model = NormalShockErrorModel::new(quantity, gamma);
    let problem = ThresholdProblem::new(threshold);

    let [lower, upper] = config.bracket;
    let residual_at = |normal_mach: f64| {
        model
            .call(&normal_mach)
            .ok()
            .map(|output| problem.residual(&output))
    };
    let (lower_residual, upper_residual) = (residual_at(lower), residual_at(upper));

    // A non-finite relative error is treated as far above any threshold,
    // matching the bisection observer below.
    let sign_of = |residual: Option<f64>| residual.unwrap_or(f64::INFINITY);
    let straddles = sign_of(lower_residual) * sign_of(upper_residual) <= 0.0;
    if !straddles {
        return Err(ThresholdError::NotBracketed {
            lower,
            upper,
            lower_residual: lower_residual.unwrap_or(f64::NAN),
            upper_residual: upper_residual.unwrap_or(f64::NAN),
        });
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        warn!(
            %quantity,
            residual = solution.residual,
            iters = solution.iters,
            "critical normal Mach solve hit iteration limit"
        );
        return Err(ThresholdError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let normal_mach = solution.snapshot.output.normal_mach;
    debug!(%quantity, normal_mach, iters = solution.iters, "critical normal Mach found");
    Ok(normal_mach)
}

/// Free-stream Mach number on the accuracy boundary at shock angle `beta`.
///
/// Inverts `Mn = M·sin(β)`; the result is infinite at `β = 0`.
#[must_use]
pub fn boundary_mach(critical_normal_mach: f64, beta: Angle) -> f64 {
    critical_normal_mach / beta.get::<radian>().sin()
}
