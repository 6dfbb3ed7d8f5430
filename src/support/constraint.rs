//! Construction-time numeric constraints.
//!
//! Shock relations are only physically meaningful on part of their
//! mathematical domain: a shock needs a supersonic upstream Mach number,
//! a real gas has `gamma > 1`, and a shock angle lies between zero and a
//! right angle. The formula functions in [`super::shock`] accept any input,
//! but validated constructors use the markers here to reject values outside
//! those bounds.
//!
//! # Provided constraints
//!
//! - [`AtLeastOne`]: `x ≥ 1`, e.g. a supersonic Mach number
//! - [`GreaterThanOne`]: `x > 1`, e.g. a ratio of specific heats
//! - [`WithinRightAngle`]: `0 ≤ θ ≤ 90°` for [`uom`] angles
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper and also
//! provides an associated `new()` constructor (e.g., `AtLeastOne::new(2.0)`).

mod at_least_one;
mod greater_than_one;
mod within_right_angle;

use std::marker::PhantomData;

use thiserror::Error;

pub use at_least_one::AtLeastOne;
pub use greater_than_one::GreaterThanOne;
pub use within_right_angle::WithinRightAngle;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> ConstraintResult<()>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use twine_shocks::support::constraint::{AtLeastOne, Constrained};
///
/// let mach = Constrained::<_, AtLeastOne>::new(3.0).unwrap();
/// assert_eq!(mach.into_inner(), 3.0);
///
/// assert!(Constrained::<f64, AtLeastOne>::new(0.8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
