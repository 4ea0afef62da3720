//! Severity Legend Example
//!
//! Renders the static severity scale and pollutant metadata tables the way
//! a dashboard legend would, without evaluating any reading.
//!
//! Run with: cargo run --example severity_legend

use aqi_forecast::{Pollutant, SEVERITY_SCALE};

fn main() {
    println!("🎨 AQI Severity Legend\n");

    for band in SEVERITY_SCALE {
        println!(
            "{:>4}+  {:<30} {}  {}",
            band.lower_bound(),
            band.label(),
            band.color(),
            band.description(),
        );
    }

    println!("\n🧪 Reported Pollutants\n");

    for pollutant in Pollutant::ALL {
        println!("{:<6} ({})", pollutant.label(), pollutant.unit());
    }
}
