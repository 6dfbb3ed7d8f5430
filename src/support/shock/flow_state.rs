use thiserror::Error;
use uom::si::{angle::degree, f64::Angle};

use crate::support::constraint::{
    AtLeastOne, Constrained, Constraint, GreaterThanOne, WithinRightAngle,
};

use super::{ErrorMetric, GAMMA_AIR, RatioPair, relations};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlowStateError {
    #[error("upstream flow must be supersonic: mach={mach}")]
    Mach { mach: f64 },
    #[error("shock angle must lie within [0°, 90°]: beta={beta:?}")]
    ShockAngle { beta: Angle },
    #[error("ratio of specific heats must exceed 1: gamma={gamma}")]
    Gamma { gamma: f64 },
}

/// A single point at which the shock relations are evaluated.
///
/// The shock angle is stored as an [`Angle`] and converted to degrees only
/// at the boundary of the formula functions.
///
/// # Example
///
/// ```
/// use twine_shocks::support::shock::FlowState;
/// use uom::si::{angle::degree, f64::Angle};
///
/// let state = FlowState::air(10.0, Angle::new::<degree>(90.0)).unwrap();
/// let density = state.density();
///
/// assert!((density.hypersonic - 6.0).abs() < 1e-12);
/// assert!(density.error().is_within(0.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    mach: f64,
    beta: Angle,
    gamma: f64,
}

impl FlowState {
    /// Constructs a validated flow state.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowStateError`] naming the first input that is out of range:
    /// `mach < 1`, `beta` outside `[0°, 90°]`, `gamma ≤ 1`, or any `NaN`.
    pub fn new(mach: f64, beta: Angle, gamma: f64) -> Result<Self, FlowStateError> {
        if AtLeastOne::check(&mach).is_err() {
            return Err(FlowStateError::Mach { mach });
        }
        if WithinRightAngle::check(&beta).is_err() {
            return Err(FlowStateError::ShockAngle { beta });
        }
        if GreaterThanOne::check(&gamma).is_err() {
            return Err(FlowStateError::Gamma { gamma });
        }

        Ok(Self { mach, beta, gamma })
    }

    /// Constructs a validated flow state for air (`gamma = 1.4`).
    ///
    /// # Errors
    ///
    /// Returns a [`FlowStateError`] if `mach` or `beta` is out of range.
    pub fn air(mach: f64, beta: Angle) -> Result<Self, FlowStateError> {
        Self::new(mach, beta, GAMMA_AIR)
    }

    /// Constructs a flow state from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        mach: Constrained<f64, AtLeastOne>,
        beta: Constrained<Angle, WithinRightAngle>,
        gamma: Constrained<f64, GreaterThanOne>,
    ) -> Self {
        Self {
            mach: mach.into_inner(),
            beta: beta.into_inner(),
            gamma: gamma.into_inner(),
        }
    }

    /// Constructs a flow state without validation.
    ///
    /// Out-of-range inputs are carried through the relations unchanged and
    /// produce non-physical (possibly non-finite) results.
    #[must_use]
    pub fn new_unchecked(mach: f64, beta: Angle, gamma: f64) -> Self {
        Self { mach, beta, gamma }
    }

    /// Returns a copy of this state with a different ratio of specific heats.
    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    #[must_use]
    pub fn mach(&self) -> f64 {
        self.mach
    }

    #[must_use]
    pub fn beta(&self) -> Angle {
        self.beta
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the shock angle in degrees.
    fn beta_degrees(&self) -> f64 {
        self.beta.get::<degree>()
    }

    /// Returns the normal Mach number, recomputed on each call.
    #[must_use]
    pub fn normal_mach(&self) -> f64 {
        relations::normal_mach(self.mach, self.beta_degrees())
    }

    /// Returns the supersonic and hypersonic pressure ratios.
    #[must_use]
    pub fn pressure(&self) -> RatioPair {
        let beta = self.beta_degrees();
        RatioPair {
            supersonic: relations::supersonic_pressure_ratio(self.mach, beta, self.gamma),
            hypersonic: relations::hypersonic_pressure_ratio(self.mach, beta, self.gamma),
        }
    }

    /// Returns the supersonic and hypersonic density ratios.
    #[must_use]
    pub fn density(&self) -> RatioPair {
        RatioPair {
            supersonic: relations::supersonic_density_ratio(
                self.mach,
                self.beta_degrees(),
                self.gamma,
            ),
            hypersonic: relations::hypersonic_density_ratio(self.gamma),
        }
    }

    /// Error between the pressure ratio approximations.
    #[must_use]
    pub fn pressure_error(&self) -> ErrorMetric {
        self.pressure().error()
    }

    /// Error between the density ratio approximations.
    #[must_use]
    pub fn density_error(&self) -> ErrorMetric {
        self.density().error()
    }
}
