//! PM2.5 Air-Quality Index and Daily Forecast Aggregation
//!
//! This crate provides the domain core of an air-quality dashboard:
//! - Converting pollutant concentrations into the standardized 0–500+ AQI
//!   and one of six severity bands
//! - Merging independently sampled pollution and weather time series into
//!   one aligned daily forecast, one entry per calendar day
//!
//! Everything is a pure, synchronous computation over already-fetched data
//! with no I/O and no shared state. The network layer decodes the upstream
//! responses into [`RawSample`] sequences and hands them over.
//!
//! # Example
//!
//! ```rust
//! use aqi_forecast::{evaluate, PollutantReading, SeverityBand};
//!
//! let reading = PollutantReading { pm2_5: 30.0, ..Default::default() };
//! let aqi = evaluate(&reading);
//!
//! assert_eq!(aqi.index, 89);
//! assert_eq!(aqi.band, SeverityBand::Moderate);
//! ```

pub mod aqi;
pub mod error;
pub mod forecast;
pub mod pollutants;
pub mod severity;

pub use aqi::{AqiResult, compute_index};
pub use error::{ForecastError, Result};
pub use forecast::{DailyForecastEntry, RawSample, WeatherInfo, aggregate};
pub use pollutants::{Pollutant, PollutantReading};
pub use severity::{SEVERITY_SCALE, SeverityBand, classify};

/// Evaluate a pollutant reading into an AQI value and severity band
///
/// # Arguments
///
/// * `pollutants` - Concentrations from one pollution sample; PM2.5 drives
///   the index, the other pollutants are carried for display only
///
/// # Returns
///
/// * `AqiResult` - The index with its tightest severity band
///
/// # Example
///
/// ```rust
/// use aqi_forecast::{evaluate, PollutantReading, SeverityBand};
///
/// let hazy = PollutantReading { pm2_5: 160.0, ..Default::default() };
/// assert_eq!(evaluate(&hazy).band, SeverityBand::VeryUnhealthy);
/// ```
#[must_use]
pub fn evaluate(pollutants: &PollutantReading) -> AqiResult {
    let index = compute_index(pollutants);
    AqiResult {
        index,
        band: classify(index),
    }
}

/// Current air-quality state from a freshly fetched pollution series
///
/// Evaluates the head sample, the most recent reading in the current
/// conditions response. A sample without pollutant data evaluates as a zero
/// reading.
///
/// # Arguments
///
/// * `pollution_series` - Pollution samples, ascending by timestamp
///
/// # Returns
///
/// * `Some(AqiResult)` - Evaluation of the first sample
/// * `None` - The series is empty
#[must_use]
pub fn current_conditions(pollution_series: &[RawSample]) -> Option<AqiResult> {
    pollution_series
        .first()
        .map(|sample| evaluate(&sample.pollutants.unwrap_or_default()))
}
