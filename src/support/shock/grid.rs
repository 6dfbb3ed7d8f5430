//! Element-wise evaluation over arrays of flow states.
//!
//! The free functions accept Mach and shock angle arrays of any dimension
//! and return an array of exactly the same shape. [`Grid`] builds the 2D mesh
//! swept by an error analysis.

use ndarray::{Array, Array1, Array2, ArrayBase, Data, Dimension, Zip};
use thiserror::Error;
use tracing::debug;

use super::{
    ShockField, SweepConfig,
    error_metric::{
        absolute_error as point_absolute_error, relative_error as point_relative_error,
    },
};

/// Errors raised while building or evaluating a grid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// Two operands of an element-wise operation differ in shape.
    #[error("array shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// A sweep axis needs at least two points.
    #[error("{axis} axis needs at least 2 steps, got {steps}")]
    TooFewSteps { axis: &'static str, steps: usize },

    /// A sweep axis has non-finite or coincident bounds.
    #[error("{axis} axis has an invalid range: [{start}, {end}]")]
    InvalidRange {
        axis: &'static str,
        start: f64,
        end: f64,
    },
}

fn ensure_same_shape(left: &[usize], right: &[usize]) -> Result<(), GridError> {
    if left == right {
        Ok(())
    } else {
        Err(GridError::ShapeMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        })
    }
}

/// Evaluates `field` at every `(mach, beta)` pair, with `beta` in degrees.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if `mach` and `beta` differ in shape.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use twine_shocks::support::shock::{GAMMA_AIR, ShockField, grid};
///
/// let mach = array![[2.0, 10.0], [2.0, 10.0]];
/// let beta = array![[30.0, 30.0], [90.0, 90.0]];
///
/// let mn = grid::evaluate(ShockField::NormalMach, &mach, &beta, GAMMA_AIR).unwrap();
/// assert_eq!(mn.shape(), &[2, 2]);
/// assert!((mn[[1, 1]] - 10.0).abs() < 1e-12);
/// ```
pub fn evaluate<S1, S2, D>(
    field: ShockField,
    mach: &ArrayBase<S1, D>,
    beta: &ArrayBase<S2, D>,
    gamma: f64,
) -> Result<Array<f64, D>, GridError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(mach.shape(), beta.shape())?;
    Ok(Zip::from(mach)
        .and(beta)
        .map_collect(|&m, &b| field.evaluate(m, b, gamma)))
}

/// Element-wise `|actual − expected|`.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if the operands differ in shape.
pub fn absolute_error<S1, S2, D>(
    actual: &ArrayBase<S1, D>,
    expected: &ArrayBase<S2, D>,
) -> Result<Array<f64, D>, GridError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(actual.shape(), expected.shape())?;
    Ok(Zip::from(actual)
        .and(expected)
        .map_collect(|&a, &e| point_absolute_error(a, e)))
}

/// Element-wise `|actual − expected| / expected`.
///
/// Zero entries in `expected` produce non-finite entries in the result.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if the operands differ in shape.
pub fn relative_error<S1, S2, D>(
    actual: &ArrayBase<S1, D>,
    expected: &ArrayBase<S2, D>,
) -> Result<Array<f64, D>, GridError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(actual.shape(), expected.shape())?;
    Ok(Zip::from(actual)
        .and(expected)
        .map_collect(|&a, &e| point_relative_error(a, e)))
}

/// A 2D mesh of Mach numbers and shock angles.
///
/// Rows follow the shock angle axis and columns follow the Mach axis,
/// so the shape is `(beta_steps, mach_steps)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    mach: Array2<f64>,
    beta: Array2<f64>,
}

impl Grid {
    /// Builds an evenly spaced grid from a sweep configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if either axis has fewer than two steps or
    /// an invalid range.
    pub fn new(config: &SweepConfig) -> Result<Self, GridError> {
        let mach = axis("mach", config.mach_range, config.mach_steps)?;
        let beta = axis("beta", config.beta_range, config.beta_steps)?;

        debug!(
            mach_steps = mach.len(),
            beta_steps = beta.len(),
            "built shock grid"
        );

        Ok(Self::from_axes(&mach, &beta))
    }

    /// Builds a grid from explicit Mach and shock angle (degrees) axes.
    #[must_use]
    pub fn from_axes(mach: &Array1<f64>, beta: &Array1<f64>) -> Self {
        let shape = (beta.len(), mach.len());
        Self {
            mach: Array2::from_shape_fn(shape, |(_, j)| mach[j]),
            beta: Array2::from_shape_fn(shape, |(i, _)| beta[i]),
        }
    }

    /// Mach number at each grid point.
    #[must_use]
    pub fn mach(&self) -> &Array2<f64> {
        &self.mach
    }

    /// Shock angle in degrees at each grid point.
    #[must_use]
    pub fn beta(&self) -> &Array2<f64> {
        &self.beta
    }

    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        self.mach.dim()
    }

    /// Evaluates `field` over the whole grid.
    #[must_use]
    pub fn evaluate(&self, field: ShockField, gamma: f64) -> Array2<f64> {
        Zip::from(&self.mach)
            .and(&self.beta)
            .map_collect(|&m, &b| field.evaluate(m, b, gamma))
    }
}

fn axis(name: &'static str, range: (f64, f64), steps: usize) -> Result<Array1<f64>, GridError> {
    let (start, end) = range;

    if steps < 2 {
        return Err(GridError::TooFewSteps { axis: name, steps });
    }
    if !start.is_finite() || !end.is_finite() || start == end {
        return Err(GridError::InvalidRange {
            axis: name,
            start,
            end,
        });
    }

    Ok(Array1::linspace(start, end, steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array3, array};

    use crate::support::shock::{GAMMA_AIR, functional};

    #[test]
    fn preserves_shape() -> Result<(), GridError> {
        let mach = Array3::from_elem((2, 3, 4), 5.0);
        let beta = Array3::from_elem((2, 3, 4), 45.0);

        for field in ShockField::ALL {
            let out = evaluate(field, &mach, &beta, GAMMA_AIR)?;
            assert_eq!(out.shape(), mach.shape());
        }

        Ok(())
    }

    #[test]
    fn shape_mismatch() {
        let mach = array![1.0, 2.0, 3.0];
        let beta = array![10.0, 20.0];

        assert_eq!(
            evaluate(ShockField::NormalMach, &mach, &beta, GAMMA_AIR),
            Err(GridError::ShapeMismatch {
                left: vec![3],
                right: vec![2],
            })
        );
        assert!(absolute_error(&mach, &beta).is_err());
        assert!(relative_error(&mach, &beta).is_err());
    }

    #[test]
    fn matches_pointwise_functions() -> Result<(), GridError> {
        let mach = array![[2.0, 10.0], [4.0, 15.0]];
        let beta = array![[30.0, 90.0], [0.0, 60.0]];

        let out = evaluate(ShockField::RelativeErrorDensity, &mach, &beta.view(), GAMMA_AIR)?;
        for ((&m, &b), &value) in mach.iter().zip(beta.iter()).zip(out.iter()) {
            assert_relative_eq!(value, functional::relative_error_density(m, b, GAMMA_AIR));
        }

        Ok(())
    }

    #[test]
    fn array_errors() -> Result<(), GridError> {
        let actual = array![1.0, 5.5, 2.0];
        let expected = array![2.0, 5.0, 0.0];

        let absolute = absolute_error(&actual, &expected)?;
        assert_eq!(absolute, array![1.0, 0.5, 2.0]);

        let relative = relative_error(&actual, &expected)?;
        assert_relative_eq!(relative[0], 0.5);
        assert_relative_eq!(relative[1], 0.1);
        assert!(relative[2].is_infinite());

        Ok(())
    }

    #[test]
    fn grid_layout() -> Result<(), GridError> {
        let config = SweepConfig::default()
            .with_mach_range(1.0, 15.0)
            .with_beta_range(0.0, 90.0)
            .with_steps(5);
        let config = SweepConfig {
            beta_steps: 3,
            ..config
        };
        let grid = Grid::new(&config)?;

        assert_eq!(grid.dim(), (3, 5));
        assert_relative_eq!(grid.mach()[[2, 0]], 1.0);
        assert_relative_eq!(grid.mach()[[0, 4]], 15.0, epsilon = 1e-12);
        assert_relative_eq!(grid.beta()[[1, 3]], 45.0, epsilon = 1e-12);

        let normal_mach = grid.evaluate(ShockField::NormalMach, GAMMA_AIR);
        assert_eq!(normal_mach.dim(), grid.dim());
        assert_relative_eq!(normal_mach[[2, 4]], 15.0, epsilon = 1e-12);
        assert_relative_eq!(normal_mach[[0, 4]], 0.0);

        Ok(())
    }

    #[test]
    fn invalid_axes() {
        let config = SweepConfig::default().with_steps(1);
        assert_eq!(
            Grid::new(&config),
            Err(GridError::TooFewSteps {
                axis: "mach",
                steps: 1,
            })
        );

        let config = SweepConfig::default()
            .with_steps(10)
            .with_beta_range(30.0, 30.0);
        assert!(matches!(
            Grid::new(&config),
            Err(GridError::InvalidRange { axis: "beta", .. })
        ));
    }
}
