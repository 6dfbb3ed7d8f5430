use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is one or greater.
///
/// An upstream Mach number must satisfy this for a shock to form.
///
/// # Examples
///
/// ```
/// use twine_shocks::support::constraint::AtLeastOne;
///
/// assert!(AtLeastOne::new(1.0).is_ok());
/// assert!(AtLeastOne::new(12.5).is_ok());
///
/// assert!(AtLeastOne::new(0.99).is_err());
/// assert!(AtLeastOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs a [`Constrained<T, AtLeastOne>`] if the value is at least one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is below one or not a number (`NaN`).
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> ConstraintResult<Constrained<T, AtLeastOne>> {
        Constrained::<T, AtLeastOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> ConstraintResult<()> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
