use super::{DEFAULT_BETA_RANGE, DEFAULT_MACH_RANGE, DEFAULT_SWEEP_STEPS, GAMMA_AIR};

/// Sweep configuration for building a [`Grid`](super::Grid) and its
/// [`ErrorSurface`](super::ErrorSurface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Upstream Mach number bounds, inclusive.
    pub mach_range: (f64, f64),

    /// Shock angle bounds in degrees, inclusive.
    pub beta_range: (f64, f64),

    /// Number of evenly spaced Mach numbers.
    pub mach_steps: usize,

    /// Number of evenly spaced shock angles.
    pub beta_steps: usize,

    /// Ratio of specific heats used across the sweep.
    pub gamma: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            mach_range: DEFAULT_MACH_RANGE,
            beta_range: DEFAULT_BETA_RANGE,
            mach_steps: DEFAULT_SWEEP_STEPS,
            beta_steps: DEFAULT_SWEEP_STEPS,
            gamma: GAMMA_AIR,
        }
    }
}

impl SweepConfig {
    #[must_use]
    pub fn with_mach_range(mut self, start: f64, end: f64) -> Self {
        self.mach_range = (start, end);
        self
    }

    #[must_use]
    pub fn with_beta_range(mut self, start: f64, end: f64) -> Self {
        self.beta_range = (start, end);
        self
    }

    /// Sets the same step count on both axes.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.mach_steps = steps;
        self.beta_steps = steps;
        self
    }

    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }
}
