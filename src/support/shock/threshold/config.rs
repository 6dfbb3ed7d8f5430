use twine_solvers::equation::bisection;

/// Solver configuration for the critical normal Mach search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    /// Normal Mach numbers bracketing the boundary, `[lower, upper]`.
    pub bracket: [f64; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the normal Mach number.
    pub normal_mach_tol: f64,

    /// Absolute tolerance on the relative error residual (achieved - threshold).
    pub residual_tol: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            bracket: [0.01, 100.0],
            max_iters: 100,
            normal_mach_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl ThresholdConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.normal_mach_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
