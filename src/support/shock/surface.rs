use ndarray::{Array2, Zip};
use tracing::debug;

use super::{Grid, GridError, ShockField, SweepConfig};

/// Absolute and relative regime errors over a [`Grid`].
///
/// # Example
///
/// ```
/// use twine_shocks::support::shock::{
///     ErrorSurface, RELATIVE_ERROR_THRESHOLD, SweepConfig, coverage,
/// };
///
/// let config = SweepConfig::default().with_steps(50);
/// let (_grid, surface) = ErrorSurface::sweep(&config).unwrap();
///
/// let pressure = surface.accurate_pressure_region(RELATIVE_ERROR_THRESHOLD);
/// let both = surface.accurate_intersection(RELATIVE_ERROR_THRESHOLD);
/// assert!(coverage(&both) < coverage(&pressure));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSurface {
    absolute_pressure: Array2<f64>,
    relative_pressure: Array2<f64>,
    absolute_density: Array2<f64>,
    relative_density: Array2<f64>,
}

impl ErrorSurface {
    /// Computes the four regime error fields over `grid`.
    #[must_use]
    pub fn compute(grid: &Grid, gamma: f64) -> Self {
        let (rows, cols) = grid.dim();
        debug!(rows, cols, gamma, "computing error surface");

        Self {
            absolute_pressure: grid.evaluate(ShockField::AbsoluteErrorPressure, gamma),
            relative_pressure: grid.evaluate(ShockField::RelativeErrorPressure, gamma),
            absolute_density: grid.evaluate(ShockField::AbsoluteErrorDensity, gamma),
            relative_density: grid.evaluate(ShockField::RelativeErrorDensity, gamma),
        }
    }

    /// Builds the grid described by `config` and computes its error surface.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the sweep axes are invalid.
    pub fn sweep(config: &SweepConfig) -> Result<(Grid, Self), GridError> {
        let grid = Grid::new(config)?;
        let surface = Self::compute(&grid, config.gamma);
        Ok((grid, surface))
    }

    #[must_use]
    pub fn absolute_pressure(&self) -> &Array2<f64> {
        &self.absolute_pressure
    }

    #[must_use]
    pub fn relative_pressure(&self) -> &Array2<f64> {
        &self.relative_pressure
    }

    #[must_use]
    pub fn absolute_density(&self) -> &Array2<f64> {
        &self.absolute_density
    }

    #[must_use]
    pub fn relative_density(&self) -> &Array2<f64> {
        &self.relative_density
    }

    /// Relative pressure error with entries above `ceiling` or non-finite set to `NaN`.
    #[must_use]
    pub fn masked_relative_pressure(&self, ceiling: f64) -> Array2<f64> {
        mask_above(&self.relative_pressure, ceiling)
    }

    /// Relative density error with entries above `ceiling` or non-finite set to `NaN`.
    #[must_use]
    pub fn masked_relative_density(&self, ceiling: f64) -> Array2<f64> {
        mask_above(&self.relative_density, ceiling)
    }

    /// Points where the hypersonic pressure ratio is within `threshold`.
    ///
    /// Non-finite relative errors are outside the region. Negative ones, which
    /// only arise from a negative hypersonic reference on unvalidated inputs,
    /// are inside it.
    #[must_use]
    pub fn accurate_pressure_region(&self, threshold: f64) -> Array2<bool> {
        below(&self.relative_pressure, threshold)
    }

    /// Points where the hypersonic density ratio is within `threshold`.
    ///
    /// Counts negative relative errors as inside, like
    /// [`accurate_pressure_region`](Self::accurate_pressure_region).
    #[must_use]
    pub fn accurate_density_region(&self, threshold: f64) -> Array2<bool> {
        below(&self.relative_density, threshold)
    }

    /// Points where both approximations are within `threshold`.
    #[must_use]
    pub fn accurate_intersection(&self, threshold: f64) -> Array2<bool> {
        Zip::from(&self.relative_pressure)
            .and(&self.relative_density)
            .map_collect(|&p, &d| is_below(p, threshold) && is_below(d, threshold))
    }
}

/// Fraction of points inside `region`, or zero for an empty region.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn coverage(region: &Array2<bool>) -> f64 {
    if region.is_empty() {
        return 0.0;
    }
    let inside = region.iter().filter(|&&v| v).count();
    inside as f64 / region.len() as f64
}

fn is_below(value: f64, threshold: f64) -> bool {
    value.is_finite() && value < threshold
}

fn below(values: &Array2<f64>, threshold: f64) -> Array2<bool> {
    values.mapv(|v| is_below(v, threshold))
}

fn mask_above(values: &Array2<f64>, ceiling: f64) -> Array2<f64> {
    values.mapv(|v| {
        if v.is_finite() && v <= ceiling {
            v
        } else {
            f64::NAN
        }
    })
}
