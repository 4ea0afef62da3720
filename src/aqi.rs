//! PM2.5 AQI derivation
//!
//! Implements the EPA PM2.5 concentration-to-index conversion: piecewise
//! linear interpolation over six breakpoints. PM2.5 is the reference
//! pollutant for the index; the other pollutants are reported alongside but
//! do not contribute to the score.

use serde::{Deserialize, Serialize};

use crate::pollutants::PollutantReading;
use crate::severity::SeverityBand;

/// One segment of the piecewise-linear concentration-to-index mapping
struct Breakpoint {
    conc_low: f64,
    conc_high: f64,
    index_low: f64,
    index_high: f64,
}

/// EPA PM2.5 breakpoints, inclusive upper concentration bounds in μg/m³
const BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint { conc_low: 0.0, conc_high: 12.0, index_low: 0.0, index_high: 50.0 },
    Breakpoint { conc_low: 12.0, conc_high: 35.4, index_low: 51.0, index_high: 100.0 },
    Breakpoint { conc_low: 35.4, conc_high: 55.4, index_low: 101.0, index_high: 150.0 },
    Breakpoint { conc_low: 55.4, conc_high: 150.4, index_low: 151.0, index_high: 200.0 },
    Breakpoint { conc_low: 150.4, conc_high: 250.4, index_low: 201.0, index_high: 300.0 },
    Breakpoint { conc_low: 250.4, conc_high: 350.4, index_low: 301.0, index_high: 400.0 },
];

/// AQI value together with its severity classification
///
/// Derived, never stored: recomputed from a [`PollutantReading`] on every
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiResult {
    /// Standardized index, 0 upwards with no hard ceiling
    pub index: u32,
    /// Severity band containing `index`
    pub band: SeverityBand,
}

/// Compute the AQI for a pollutant reading
///
/// For a concentration `c` inside a breakpoint's range, the index is
/// `(i_high - i_low) / (c_high - c_low) * (c - c_low) + i_low`, rounded
/// half away from zero. Concentrations above the highest breakpoint
/// extrapolate along the last segment's slope. Negative or non-finite
/// PM2.5 values are read as zero.
///
/// # Example
///
/// ```rust
/// use aqi_forecast::{compute_index, PollutantReading};
///
/// let reading = PollutantReading { pm2_5: 35.4, ..Default::default() };
/// assert_eq!(compute_index(&reading), 100);
/// ```
#[must_use]
pub fn compute_index(pollutants: &PollutantReading) -> u32 {
    let c = if pollutants.pm2_5.is_finite() {
        pollutants.pm2_5.max(0.0)
    } else {
        0.0
    };

    // Extrapolation past the table reuses the last segment's slope
    let segment = BREAKPOINTS
        .iter()
        .find(|b| c <= b.conc_high)
        .unwrap_or(&BREAKPOINTS[BREAKPOINTS.len() - 1]);

    let slope = (segment.index_high - segment.index_low) / (segment.conc_high - segment.conc_low);
    let index = slope * (c - segment.conc_low) + segment.index_low;

    index.round() as u32
}
