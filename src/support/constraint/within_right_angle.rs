use std::f64::consts::FRAC_PI_2;

use uom::si::{angle::radian, f64::Angle};

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that an angle lies in the closed range `[0, 90°]`.
///
/// Shock angles outside this range are mathematically valid inputs to the
/// shock relations but do not describe a physical oblique shock.
///
/// # Examples
///
/// ```
/// use twine_shocks::support::constraint::WithinRightAngle;
/// use uom::si::{angle::degree, f64::Angle};
///
/// assert!(WithinRightAngle::new(Angle::new::<degree>(0.0)).is_ok());
/// assert!(WithinRightAngle::new(Angle::new::<degree>(90.0)).is_ok());
/// assert!(WithinRightAngle::new(Angle::new::<degree>(120.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WithinRightAngle;

impl WithinRightAngle {
    /// Constructs a [`Constrained<Angle, WithinRightAngle>`] if the angle is in range.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle is negative, exceeds a right angle,
    /// or is not a number (`NaN`).
    pub fn new(angle: Angle) -> ConstraintResult<Constrained<Angle, WithinRightAngle>> {
        Constrained::<Angle, WithinRightAngle>::new(angle)
    }
}

impl Constraint<Angle> for WithinRightAngle {
    fn check(value: &Angle) -> ConstraintResult<()> {
        let radians = value.get::<radian>();
        if radians.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if radians < 0.0 {
            Err(ConstraintError::BelowMinimum)
        } else if radians > FRAC_PI_2 {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::angle::degree;

    #[test]
    fn degrees() {
        assert!(WithinRightAngle::new(Angle::new::<degree>(30.0)).is_ok());
        assert!(WithinRightAngle::new(Angle::new::<radian>(FRAC_PI_2)).is_ok());
        assert_eq!(
            WithinRightAngle::new(Angle::new::<degree>(-1.0)),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            WithinRightAngle::new(Angle::new::<degree>(90.5)),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            WithinRightAngle::new(Angle::new::<degree>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
