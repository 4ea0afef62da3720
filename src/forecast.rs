//! Multi-source daily forecast aggregation
//!
//! Reduces two independently sampled time series (pollution readings and
//! weather readings, typically at different cadences) to one enriched
//! record per calendar day, up to a caller-chosen horizon.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::aqi::AqiResult;
use crate::error::{ForecastError, Result};
use crate::pollutants::PollutantReading;

/// One raw sample from an upstream time series
///
/// Both input series use this shape: pollution samples carry `pollutants`,
/// weather samples carry `weather`. Series are expected in ascending
/// timestamp order, with no assumption about their relative cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    /// Pollutant concentrations, if this sample came from the pollution feed
    pub pollutants: Option<PollutantReading>,
    /// Weather fields, if this sample came from the weather feed
    pub weather: Option<WeatherInfo>,
}

/// Weather fields attached to a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    /// Temperature in °C
    pub temperature: f64,
    /// Human-readable conditions, e.g. "scattered clouds"
    pub description: String,
    /// Upstream icon code for the conditions, e.g. "03d"
    pub icon: String,
}

/// One day of the aggregated forecast
///
/// Weather fields are optional: when no weather sample could be matched to
/// the day the entry still carries its pollution reading and AQI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Caller-formatted label for the day
    pub date_label: String,
    /// Index and severity band for the day's representative reading
    pub aqi: AqiResult,
    /// The day's representative pollutant concentrations
    pub pollutants: PollutantReading,
    /// Temperature in °C, when a weather sample was found
    pub temperature: Option<f64>,
    /// Conditions text, when a weather sample was found
    pub weather_description: Option<String>,
    /// Icon code, when a weather sample was found
    pub weather_icon: Option<String>,
}

/// Aggregate pollution and weather series into a daily forecast
///
/// Walks `pollution_series` in order and emits one entry per distinct
/// calendar day (in the caller's time zone), stopping after `horizon_days`
/// days or when the input runs out. The first pollution sample of each day
/// is its representative reading; its AQI is computed via
/// [`evaluate`](crate::evaluate). Weather enrichment is best-effort with a
/// three-tier fallback: the weather sample on the same calendar day, else
/// the sample at the day's ordinal position, else the first weather sample
/// overall. When all tiers miss, the weather fields stay empty.
///
/// # Arguments
///
/// * `pollution_series` - Pollution samples, ascending by timestamp
/// * `weather_series` - Weather samples, ascending by timestamp
/// * `horizon_days` - Maximum number of days to emit; `0` yields no entries
/// * `tz` - Time zone whose calendar defines day boundaries
/// * `date_label` - Formats each day's label, keeping locale concerns with
///   the caller
///
/// # Returns
///
/// * `Ok(Vec<DailyForecastEntry>)` - At most `horizon_days` entries, one per
///   day, in encounter (ascending) order
/// * `Err(ForecastError)` - A sample failed boundary validation
///
/// # Example
///
/// ```rust
/// use aqi_forecast::{aggregate, PollutantReading, RawSample};
/// use chrono::Utc;
///
/// let pollution = vec![RawSample {
///     timestamp: 1_704_067_200, // 2024-01-01 00:00:00 UTC
///     pollutants: Some(PollutantReading { pm2_5: 30.0, ..Default::default() }),
///     weather: None,
/// }];
///
/// let forecast = aggregate(&pollution, &[], 5, &Utc, |day| {
///     day.format("%Y-%m-%d").to_string()
/// })
/// .unwrap();
///
/// assert_eq!(forecast.len(), 1);
/// assert_eq!(forecast[0].date_label, "2024-01-01");
/// assert_eq!(forecast[0].aqi.index, 89);
/// ```
///
/// # Errors
///
/// * `ForecastError::InvalidInput` - A sample's epoch timestamp cannot be
///   placed on the calendar
pub fn aggregate<Tz, F>(
    pollution_series: &[RawSample],
    weather_series: &[RawSample],
    horizon_days: usize,
    tz: &Tz,
    date_label: F,
) -> Result<Vec<DailyForecastEntry>>
where
    Tz: TimeZone,
    F: Fn(&DateTime<Tz>) -> String,
{
    // Calendar day of every weather sample, for exact-date matching
    let weather_days = weather_series
        .iter()
        .map(|sample| calendar_day(sample.timestamp, tz).map(|(day, _)| day))
        .collect::<Result<Vec<_>>>()?;

    let mut entries: Vec<DailyForecastEntry> = Vec::new();
    let mut seen_days: Vec<NaiveDate> = Vec::new();

    for sample in pollution_series {
        if entries.len() == horizon_days {
            break;
        }

        let (day, local) = calendar_day(sample.timestamp, tz)?;
        if seen_days.contains(&day) {
            continue;
        }
        seen_days.push(day);

        let weather = weather_series
            .iter()
            .zip(&weather_days)
            .find(|(_, weather_day)| **weather_day == day)
            .map(|(sample, _)| sample)
            .or_else(|| weather_series.get(entries.len()))
            .or_else(|| weather_series.first())
            .and_then(|sample| sample.weather.as_ref());

        let pollutants = sample.pollutants.unwrap_or_default();

        entries.push(DailyForecastEntry {
            date_label: date_label(&local),
            aqi: crate::evaluate(&pollutants),
            pollutants,
            temperature: weather.map(|w| w.temperature),
            weather_description: weather.map(|w| w.description.clone()),
            weather_icon: weather.map(|w| w.icon.clone()),
        });
    }

    Ok(entries)
}

/// Map an epoch timestamp to its calendar day in `tz`
fn calendar_day<Tz: TimeZone>(seconds: i64, tz: &Tz) -> Result<(NaiveDate, DateTime<Tz>)> {
    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| ForecastError::invalid_timestamp(seconds))?;
    let local = utc.with_timezone(tz);
    Ok((local.date_naive(), local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    use crate::severity::SeverityBand;

    // 2024-01-01 00:00:00 UTC
    const DAY_ONE: i64 = 1_704_067_200;
    const HOUR: i64 = 3_600;
    const DAY: i64 = 86_400;

    fn pollution_sample(timestamp: i64, pm2_5: f64) -> RawSample {
        RawSample {
            timestamp,
            pollutants: Some(PollutantReading {
                pm2_5,
                ..Default::default()
            }),
            weather: None,
        }
    }

    fn weather_sample(timestamp: i64, temperature: f64) -> RawSample {
        RawSample {
            timestamp,
            pollutants: None,
            weather: Some(WeatherInfo {
                temperature,
                description: "scattered clouds".to_string(),
                icon: "03d".to_string(),
            }),
        }
    }

    /// Three-hourly pollution samples spanning `days` calendar days
    fn three_hourly_pollution(days: usize) -> Vec<RawSample> {
        (0..days * 8)
            .map(|i| pollution_sample(DAY_ONE + i as i64 * 3 * HOUR, 10.0 + i as f64))
            .collect()
    }

    /// One weather sample per day at noon, starting on the first day
    fn daily_weather(days: usize) -> Vec<RawSample> {
        (0..days)
            .map(|d| weather_sample(DAY_ONE + d as i64 * DAY + 12 * HOUR, 15.0 + d as f64))
            .collect()
    }

    fn label(day: &DateTime<Utc>) -> String {
        day.format("%Y-%m-%d").to_string()
    }

    #[test]
    fn empty_pollution_series_yields_empty_forecast() {
        let forecast = aggregate(&[], &daily_weather(5), 5, &Utc, label).unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn zero_horizon_yields_empty_forecast() {
        let forecast =
            aggregate(&three_hourly_pollution(5), &daily_weather(5), 0, &Utc, label).unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn aligned_series_produce_one_enriched_entry_per_day() {
        let forecast =
            aggregate(&three_hourly_pollution(5), &daily_weather(5), 5, &Utc, label).unwrap();

        assert_eq!(forecast.len(), 5);
        let labels: Vec<&str> = forecast.iter().map(|e| e.date_label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"]
        );

        for (d, entry) in forecast.iter().enumerate() {
            // Exact calendar-day match: each day gets its own weather sample
            assert_eq!(entry.temperature, Some(15.0 + d as f64));
            assert_eq!(entry.weather_description.as_deref(), Some("scattered clouds"));
            assert_eq!(entry.weather_icon.as_deref(), Some("03d"));

            // Representative reading is the first sample of the day
            let expected_pm2_5 = 10.0 + (d * 8) as f64;
            assert_eq!(entry.pollutants.pm2_5, expected_pm2_5);
            assert_eq!(entry.aqi.index, crate::compute_index(&entry.pollutants));
        }
    }

    #[rstest]
    #[case(5, 5, 5)]
    #[case(5, 7, 5)] // horizon longer than the data
    #[case(8, 5, 5)] // more days available than the horizon allows
    #[case(3, 5, 3)]
    fn horizon_caps_distinct_days(
        #[case] days_available: usize,
        #[case] horizon_days: usize,
        #[case] expected: usize,
    ) {
        let forecast = aggregate(
            &three_hourly_pollution(days_available),
            &[],
            horizon_days,
            &Utc,
            label,
        )
        .unwrap();
        assert_eq!(forecast.len(), expected);
    }

    #[test]
    fn eight_days_with_horizon_five_keeps_the_first_five() {
        let forecast = aggregate(&three_hourly_pollution(8), &[], 5, &Utc, label).unwrap();

        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast[0].date_label, "2024-01-01");
        assert_eq!(forecast[4].date_label, "2024-01-05");
    }

    #[test]
    fn first_sample_of_the_day_is_representative() {
        let series = vec![
            pollution_sample(DAY_ONE, 10.0),
            pollution_sample(DAY_ONE + 3 * HOUR, 99.0),
            pollution_sample(DAY_ONE + 6 * HOUR, 200.0),
        ];

        let forecast = aggregate(&series, &[], 5, &Utc, label).unwrap();

        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast[0].pollutants.pm2_5, 10.0);
        assert_eq!(forecast[0].aqi.band, SeverityBand::Good);
    }

    #[test]
    fn missing_pollutants_evaluate_as_zero_reading() {
        let series = vec![RawSample {
            timestamp: DAY_ONE,
            pollutants: None,
            weather: None,
        }];

        let forecast = aggregate(&series, &[], 5, &Utc, label).unwrap();

        assert_eq!(forecast[0].pollutants, PollutantReading::default());
        assert_eq!(forecast[0].aqi.index, 0);
        assert_eq!(forecast[0].aqi.band, SeverityBand::Good);
    }

    #[test]
    fn positional_fallback_when_no_day_matches() {
        // Weather samples sit on unrelated days, so the exact-date tier
        // misses and each day falls back to its ordinal position.
        let june = 1_685_577_600; // 2023-06-01 00:00:00 UTC
        let weather = vec![weather_sample(june, 20.0), weather_sample(june + DAY, 21.0)];

        let forecast =
            aggregate(&three_hourly_pollution(2), &weather, 5, &Utc, label).unwrap();

        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast[0].temperature, Some(20.0));
        assert_eq!(forecast[1].temperature, Some(21.0));
    }

    #[test]
    fn first_weather_sample_is_the_last_resort() {
        // One off-day weather sample for three forecast days: days beyond
        // its position reuse the first sample overall.
        let june = 1_685_577_600;
        let weather = vec![weather_sample(june, 20.0)];

        let forecast =
            aggregate(&three_hourly_pollution(3), &weather, 5, &Utc, label).unwrap();

        assert_eq!(forecast.len(), 3);
        for entry in &forecast {
            assert_eq!(entry.temperature, Some(20.0));
        }
    }

    #[test]
    fn no_weather_at_all_degrades_gracefully() {
        let forecast = aggregate(&three_hourly_pollution(2), &[], 5, &Utc, label).unwrap();

        assert_eq!(forecast.len(), 2);
        for entry in &forecast {
            assert_eq!(entry.temperature, None);
            assert_eq!(entry.weather_description, None);
            assert_eq!(entry.weather_icon, None);
        }
    }

    #[rstest]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn out_of_range_pollution_timestamp_fails_fast(#[case] timestamp: i64) {
        let series = vec![pollution_sample(timestamp, 10.0)];
        let result = aggregate(&series, &[], 5, &Utc, label);
        assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_weather_timestamp_fails_fast() {
        let weather = vec![weather_sample(i64::MAX, 20.0)];
        let result = aggregate(&three_hourly_pollution(1), &weather, 5, &Utc, label);
        assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let pollution = three_hourly_pollution(5);
        let weather = daily_weather(5);

        let first = aggregate(&pollution, &weather, 5, &Utc, label).unwrap();
        let second = aggregate(&pollution, &weather, 5, &Utc, label).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn raw_sample_decodes_from_upstream_shaped_json() {
        let json = r#"{
            "timestamp": 1704067200,
            "pollutants": { "pm2_5": 12.0, "pm10": 20.1 },
            "weather": { "temperature": 21.5, "description": "clear sky", "icon": "01d" }
        }"#;

        let sample: RawSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.timestamp, DAY_ONE);
        assert_eq!(sample.pollutants.unwrap().pm2_5, 12.0);
        assert_eq!(sample.weather.unwrap().icon, "01d");

        // Samples without the optional blocks decode too
        let bare: RawSample =
            serde_json::from_str(r#"{"timestamp": 1704067200, "pollutants": null, "weather": null}"#)
                .unwrap();
        assert_eq!(bare.pollutants, None);
        assert_eq!(bare.weather, None);
    }
}
