//! Serde models for the provider's forecast payload.
//!
//! Only the fields the dataset builder consumes are modelled; everything else
//! in the JSON is ignored. Either forecast array may be absent depending on
//! the endpoint, in which case it deserializes as empty.

use crate::dataset::point::{DailyForecastPoint, ForecastPoint, IconCode};
use serde::Deserialize;

/// The parsed forecast payload, replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub hourly: Vec<RawHourly>,
    #[serde(default)]
    pub daily: Vec<RawDaily>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHourly {
    pub dt: i64,
    pub temp: f64,
    pub pressure: Option<f64>,
    #[serde(default)]
    pub weather: Vec<WeatherTag>,
    pub rain: Option<PrecipVolume>,
    pub snow: Option<PrecipVolume>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDaily {
    pub dt: i64,
    pub temp: DailyTemp,
    pub pressure: Option<f64>,
    #[serde(default)]
    pub weather: Vec<WeatherTag>,
    /// Daily totals are flat numbers, unlike the hourly `{"1h": ..}` objects.
    pub rain: Option<f64>,
    pub snow: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTemp {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherTag {
    pub icon: String,
}

/// Hourly volumes arrive as `{"1h": 0.5}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrecipVolume {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
}

impl ForecastPayload {
    /// Converts the hourly records into builder input. A record without a
    /// weather tag gets an empty icon code, which classifies as
    /// [`crate::DayPhase::Unknown`].
    pub fn hourly_points(&self) -> Vec<ForecastPoint> {
        self.hourly
            .iter()
            .map(|raw| ForecastPoint {
                timestamp_seconds: raw.dt,
                temperature: raw.temp,
                icon: icon_of(&raw.weather),
                rain_mm: raw.rain.as_ref().and_then(|v| v.one_hour),
                snow_mm: raw.snow.as_ref().and_then(|v| v.one_hour),
                pressure_hpa: raw.pressure,
            })
            .collect()
    }

    /// Converts the daily records into builder input.
    pub fn daily_points(&self) -> Vec<DailyForecastPoint> {
        self.daily
            .iter()
            .map(|raw| DailyForecastPoint {
                timestamp_seconds: raw.dt,
                temperature_min: raw.temp.min,
                temperature_max: raw.temp.max,
                icon: icon_of(&raw.weather),
                rain_mm: raw.rain,
                snow_mm: raw.snow,
                pressure_hpa: raw.pressure,
            })
            .collect()
    }
}

fn icon_of(tags: &[WeatherTag]) -> IconCode {
    IconCode::new(tags.first().map(|t| t.icon.as_str()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::point::DayPhase;

    const SAMPLE: &str = r#"{
        "lat": 52.52,
        "lon": 13.4,
        "timezone_offset": 3600,
        "hourly": [
            {
                "dt": 1660000000,
                "temp": 21.4,
                "pressure": 1013,
                "weather": [{"id": 500, "main": "Rain", "icon": "10d"}],
                "rain": {"1h": 0.62}
            },
            {
                "dt": 1660003600,
                "temp": 20.1,
                "pressure": 1012,
                "weather": [{"id": 800, "main": "Clear", "icon": "01n"}]
            }
        ],
        "daily": [
            {
                "dt": 1660000000,
                "temp": {"min": 14.2, "max": 24.8, "day": 22.0},
                "pressure": 1011,
                "weather": [{"id": 600, "main": "Snow", "icon": "13d"}],
                "rain": 1.1,
                "snow": 0.4
            }
        ]
    }"#;

    #[test]
    fn parses_hourly_records() {
        let payload: ForecastPayload = serde_json::from_str(SAMPLE).unwrap();
        let points = payload.hourly_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].temperature, 21.4);
        assert_eq!(points[0].rain_mm, Some(0.62));
        assert_eq!(points[0].snow_mm, None);
        assert_eq!(points[0].icon.phase(), DayPhase::Day);
        assert_eq!(points[1].icon.phase(), DayPhase::Night);
        assert_eq!(points[1].rain_mm, None);
    }

    #[test]
    fn parses_daily_records() {
        let payload: ForecastPayload = serde_json::from_str(SAMPLE).unwrap();
        let points = payload.daily_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].temperature_min, 14.2);
        assert_eq!(points[0].temperature_max, 24.8);
        assert_eq!(points[0].rain_mm, Some(1.1));
        assert_eq!(points[0].snow_mm, Some(0.4));
    }

    #[test]
    fn missing_arrays_deserialize_empty() {
        let payload: ForecastPayload = serde_json::from_str(r#"{"lat": 1.0}"#).unwrap();
        assert!(payload.hourly.is_empty());
        assert!(payload.daily.is_empty());
    }

    #[test]
    fn missing_weather_tag_is_unknown_phase() {
        let json = r#"{"hourly": [{"dt": 1, "temp": 3.0}]}"#;
        let payload: ForecastPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.hourly_points()[0].icon.phase(), DayPhase::Unknown);
    }
}
