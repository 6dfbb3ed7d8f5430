use super::ErrorMetric;

/// Supersonic and hypersonic approximations of the same shock ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPair {
    pub supersonic: f64,
    pub hypersonic: f64,
}

impl RatioPair {
    /// Returns the error of the supersonic value relative to the hypersonic one.
    #[must_use]
    pub fn error(&self) -> ErrorMetric {
        ErrorMetric::between(self.supersonic, self.hypersonic)
    }
}
