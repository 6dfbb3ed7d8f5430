use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is strictly greater than one.
///
/// The ratio of specific heats of any real gas satisfies this; at exactly one
/// the hypersonic density limit `(γ+1)/(γ−1)` is undefined.
///
/// # Examples
///
/// ```
/// use twine_shocks::support::constraint::GreaterThanOne;
///
/// assert!(GreaterThanOne::new(1.4).is_ok());
/// assert!(GreaterThanOne::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs a [`Constrained<T, GreaterThanOne>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is one or less, or not a number (`NaN`).
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> ConstraintResult<Constrained<T, GreaterThanOne>> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> ConstraintResult<()> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
