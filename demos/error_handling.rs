//! Error Handling Example
//!
//! Shows the one failure the aggregator surfaces (a sample that cannot be
//! placed on the calendar) next to the conditions it absorbs gracefully.
//!
//! Run with: cargo run --example error_handling

use aqi_forecast::{ForecastError, PollutantReading, RawSample, aggregate};
use chrono::Utc;

fn label(day: &chrono::DateTime<Utc>) -> String {
    day.format("%Y-%m-%d").to_string()
}

fn main() {
    println!("⚠️ AQI Forecast - Error Handling Example\n");

    // An out-of-range timestamp fails fast instead of misclassifying a day
    let malformed = vec![RawSample {
        timestamp: i64::MAX,
        pollutants: Some(PollutantReading::default()),
        weather: None,
    }];

    match aggregate(&malformed, &[], 5, &Utc, label) {
        Ok(_) => println!("unexpected success"),
        Err(ForecastError::InvalidInput(reason)) => {
            println!("Rejected malformed sample: {reason}");
        }
    }

    println!();

    // Degenerate inputs degrade gracefully rather than erroring
    let empty = aggregate(&[], &[], 5, &Utc, label).expect("empty input is not an error");
    println!("Empty pollution series -> {} entries", empty.len());

    let no_weather = vec![RawSample {
        timestamp: 1_704_067_200,
        pollutants: Some(PollutantReading {
            pm2_5: 22.0,
            ..Default::default()
        }),
        weather: None,
    }];

    let forecast = aggregate(&no_weather, &[], 5, &Utc, label).expect("aggregation");
    let entry = &forecast[0];
    println!(
        "No weather series -> {}: AQI {} with temperature {:?}",
        entry.date_label, entry.aqi.index, entry.temperature,
    );
}
