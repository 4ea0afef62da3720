//! Severity bands for classified AQI values
//!
//! The six bands follow the EPA legend: lower bounds 0, 51, 101, 151, 201
//! and 301, with `Hazardous` open-ended above.

use serde::{Deserialize, Serialize};

/// Health-risk category for an AQI value
///
/// Variants are declared in increasing order of severity, so the derived
/// `Ord` matches the ordering of the lower bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SeverityBand {
    /// AQI 0–50
    Good,
    /// AQI 51–100
    Moderate,
    /// AQI 101–150
    UnhealthySensitive,
    /// AQI 151–200
    Unhealthy,
    /// AQI 201–300
    VeryUnhealthy,
    /// AQI 301 and above
    Hazardous,
}

/// All severity bands in increasing order of lower bound
///
/// Exposed so legends can be rendered without evaluating any reading.
pub const SEVERITY_SCALE: [SeverityBand; 6] = [
    SeverityBand::Good,
    SeverityBand::Moderate,
    SeverityBand::UnhealthySensitive,
    SeverityBand::Unhealthy,
    SeverityBand::VeryUnhealthy,
    SeverityBand::Hazardous,
];

impl SeverityBand {
    /// Smallest AQI value belonging to this band
    #[must_use]
    pub fn lower_bound(&self) -> u32 {
        match self {
            Self::Good => 0,
            Self::Moderate => 51,
            Self::UnhealthySensitive => 101,
            Self::Unhealthy => 151,
            Self::VeryUnhealthy => 201,
            Self::Hazardous => 301,
        }
    }

    /// Display name for cards and legends
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Legend color as a hex string
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#00e400",
            Self::Moderate => "#ffff00",
            Self::UnhealthySensitive => "#ff7e00",
            Self::Unhealthy => "#ff0000",
            Self::VeryUnhealthy => "#8f3f97",
            Self::Hazardous => "#7e0023",
        }
    }

    /// Health-risk description shown alongside the index
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Good => "Air quality is satisfactory and poses little or no risk",
            Self::Moderate => "Air quality is acceptable, a risk for unusually sensitive people",
            Self::UnhealthySensitive => "Members of sensitive groups may experience health effects",
            Self::Unhealthy => "Everyone may begin to experience health effects",
            Self::VeryUnhealthy => "Health alert: everyone may experience more serious effects",
            Self::Hazardous => "Health warning of emergency conditions",
        }
    }
}

/// Classify an AQI value into its severity band
///
/// Picks the band with the largest lower bound not exceeding `index`, i.e.
/// the tightest band containing the value. Total over the whole `u32`
/// domain.
#[must_use]
pub fn classify(index: u32) -> SeverityBand {
    SEVERITY_SCALE
        .into_iter()
        .rev()
        .find(|band| band.lower_bound() <= index)
        .unwrap_or(SeverityBand::Good)
}
