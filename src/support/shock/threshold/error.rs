use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving for a critical normal Mach number.
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// The requested relative error threshold is not positive and finite.
    #[error("threshold must be positive and finite: {threshold}")]
    InvalidThreshold { threshold: f64 },

    /// The relative error does not cross the threshold within the bracket.
    ///
    /// A residual is `NaN` where the relative error itself is not finite.
    #[error(
        "threshold not bracketed by normal Mach [{lower}, {upper}]: \
         residuals {lower_residual}, {upper_residual}"
    )]
    NotBracketed {
        lower: f64,
        upper: f64,
        lower_residual: f64,
        upper_residual: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best relative error residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
