//! Error types for forecast aggregation

use thiserror::Error;

/// Result type alias for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while aggregating raw samples
///
/// Almost every degenerate input is absorbed as graceful degradation, e.g.
/// missing pollutants read as zero and an empty series yields an empty
/// forecast. The one condition surfaced to callers is a sample whose
/// timestamp cannot be placed on the calendar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// A raw sample failed boundary validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ForecastError {
    /// Create an `InvalidInput` error for an out-of-range epoch timestamp
    #[must_use]
    pub fn invalid_timestamp(seconds: i64) -> Self {
        Self::InvalidInput(format!(
            "timestamp {seconds}s is outside the representable calendar range"
        ))
    }
}
