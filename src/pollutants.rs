//! Pollutant identifiers and concentration readings
//!
//! These types match the component payload of the upstream air-pollution API

use serde::{Deserialize, Serialize};

/// The fixed set of pollutants reported by the upstream API
///
/// Serialized names match the upstream JSON keys (`pm2_5`, `pm10`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    /// Fine particulate matter, ≤2.5 μm
    Pm2_5,
    /// Coarse particulate matter, ≤10 μm
    Pm10,
    /// Ozone
    O3,
    /// Nitrogen dioxide
    No2,
    /// Sulphur dioxide
    So2,
    /// Carbon monoxide
    Co,
}

impl Pollutant {
    /// All pollutants, in the order the upstream API lists them
    pub const ALL: [Self; 6] = [
        Self::Pm2_5,
        Self::Pm10,
        Self::O3,
        Self::No2,
        Self::So2,
        Self::Co,
    ];

    /// Display name for cards and legends
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pm2_5 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::O3 => "O₃",
            Self::No2 => "NO₂",
            Self::So2 => "SO₂",
            Self::Co => "CO",
        }
    }

    /// Measurement unit as reported upstream
    #[must_use]
    pub fn unit(&self) -> &'static str {
        "μg/m³"
    }
}

/// Pollutant concentrations in μg/m³ from a single sample
///
/// Identifiers missing from the upstream payload read as zero, so a
/// partially populated response still evaluates cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollutantReading {
    /// Fine particulate matter (reference pollutant for index derivation)
    pub pm2_5: f64,
    /// Coarse particulate matter
    pub pm10: f64,
    /// Ozone
    pub o3: f64,
    /// Nitrogen dioxide
    pub no2: f64,
    /// Sulphur dioxide
    pub so2: f64,
    /// Carbon monoxide
    pub co: f64,
}

impl PollutantReading {
    /// Concentration for a single pollutant
    #[must_use]
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::O3 => self.o3,
            Pollutant::No2 => self.no2,
            Pollutant::So2 => self.so2,
            Pollutant::Co => self.co,
        }
    }
}
