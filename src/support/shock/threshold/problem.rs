//! Problem formulation for the critical normal Mach search.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use uom::si::{angle::degree, f64::Angle};

use crate::support::shock::{ErrorMetric, FlowState};

use super::ErrorQuantity;

/// Regime error of a normal shock at a given normal Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct NormalShockError {
    pub(super) normal_mach: f64,
    pub(super) error: ErrorMetric,
}

/// The relative error is `NaN` or infinite, so it has no residual.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("relative error is not finite at normal Mach {normal_mach}")]
pub(super) struct NonFiniteError {
    pub(super) normal_mach: f64,
}

/// Model adapter exposing the normal Mach number as the sole input.
///
/// A normal shock (`β = 90°`) has `Mn = M`, so evaluating one covers every
/// shock angle with the same normal Mach number.
pub(super) struct NormalShockErrorModel {
    quantity: ErrorQuantity,
    gamma: f64,
}

impl NormalShockErrorModel {
    pub(super) fn new(quantity: ErrorQuantity, gamma: f64) -> Self {
        Self { quantity, gamma }
    }
}

impl Model for NormalShockErrorModel {
    type Input = f64;
    type Output = NormalShockError;
    type Error = NonFiniteError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let state = FlowState::new_unchecked(*input, Angle::new::<degree>(90.0), self.gamma);
        let error = match self.quantity {
            ErrorQuantity::Pressure => state.pressure_error(),
            ErrorQuantity::Density => state.density_error(),
        };

        if !error.relative.is_finite() {
            return Err(NonFiniteError {
                normal_mach: *input,
            });
        }

        Ok(NormalShockError {
            normal_mach: state.normal_mach(),
            error,
        })
    }
}

/// Equation problem driving the relative error to a target threshold.
///
/// Computes the residual as `relative_error - threshold`.
pub(super) struct ThresholdProblem {
    threshold: f64,
}

impl ThresholdProblem {
    pub(super) fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub(super) fn residual(&self, output: &NormalShockError) -> f64 {
        output.error.relative - self.threshold
    }
}

impl EquationProblem<1> for ThresholdProblem {
    type Input = f64;
    type Output = NormalShockError;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
