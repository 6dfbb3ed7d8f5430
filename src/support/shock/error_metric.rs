/// Returns `|actual − expected|`.
#[must_use]
pub fn absolute_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs()
}

/// Returns `|actual − expected| / expected`.
///
/// A zero `expected` yields `NaN` or `±∞` instead of failing; callers that
/// sweep a domain containing such points mask them downstream.
#[must_use]
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    absolute_error(actual, expected) / expected
}

/// Absolute and relative discrepancy between two approximations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetric {
    pub absolute: f64,
    pub relative: f64,
}

impl ErrorMetric {
    /// Measures `actual` against the reference value `expected`.
    #[must_use]
    pub fn between(actual: f64, expected: f64) -> Self {
        Self {
            absolute: absolute_error(actual, expected),
            relative: relative_error(actual, expected),
        }
    }

    /// Returns `true` if the relative error is finite and below `threshold`.
    ///
    /// The relative error keeps the sign of the reference, so a negative
    /// reference (e.g. an unvalidated `gamma < 1`) gives a negative relative
    /// error that counts as within any positive threshold.
    #[must_use]
    pub fn is_within(&self, threshold: f64) -> bool {
        self.relative.is_finite() && self.relative < threshold
    }
}
