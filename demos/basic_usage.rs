//! Basic Usage Example for the AQI forecast core
//!
//! This example demonstrates the two library entry points: evaluating a
//! single pollutant reading and aggregating raw pollution/weather series
//! into a daily forecast.
//!
//! Run with: cargo run --example basic_usage

use aqi_forecast::{
    PollutantReading, RawSample, WeatherInfo, aggregate, current_conditions, evaluate,
};
use chrono::Utc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌫️ AQI Forecast - Basic Usage Example\n");

    // Example 1: Evaluate one reading
    println!("📊 Example 1: Single Reading");
    println!("============================");

    let reading = PollutantReading {
        pm2_5: 38.7,
        pm10: 51.2,
        o3: 61.0,
        no2: 22.4,
        so2: 7.1,
        co: 310.0,
    };

    let aqi = evaluate(&reading);
    println!("PM2.5 {} μg/m³ -> AQI {}", reading.pm2_5, aqi.index);
    println!("{}: {}", aqi.band.label(), aqi.band.description());

    println!();

    // Example 2: Aggregate two raw series into a daily forecast
    println!("🗓️ Example 2: Daily Forecast");
    println!("============================");

    let day_one = 1_704_067_200; // 2024-01-01 00:00:00 UTC
    let three_hours = 3 * 3_600;
    let one_day = 86_400;

    // Three-hourly pollution samples over three days
    let pollution: Vec<RawSample> = (0..24)
        .map(|i| RawSample {
            timestamp: day_one + i * three_hours,
            pollutants: Some(PollutantReading {
                pm2_5: 8.0 + 3.5 * i as f64,
                ..Default::default()
            }),
            weather: None,
        })
        .collect();

    // One weather sample per day at noon
    let weather: Vec<RawSample> = (0..3)
        .map(|d| RawSample {
            timestamp: day_one + d * one_day + 12 * 3_600,
            pollutants: None,
            weather: Some(WeatherInfo {
                temperature: 14.0 + d as f64,
                description: "scattered clouds".to_string(),
                icon: "03d".to_string(),
            }),
        })
        .collect();

    if let Some(current) = current_conditions(&pollution) {
        println!("Current conditions: AQI {} ({})", current.index, current.band.label());
    }

    let forecast = aggregate(&pollution, &weather, 5, &Utc, |day| {
        day.format("%a %d %b").to_string()
    })?;

    for entry in &forecast {
        let temperature = entry
            .temperature
            .map_or_else(|| "-".to_string(), |t| format!("{t:.1}°C"));
        println!(
            "{}: AQI {} ({}), PM2.5 {:.1} μg/m³, {}",
            entry.date_label,
            entry.aqi.index,
            entry.aqi.band.label(),
            entry.pollutants.pm2_5,
            temperature,
        );
    }

    Ok(())
}
