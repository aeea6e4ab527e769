// ABOUTME: Weather sample and forecast point models fed to the runcast engines
// ABOUTME: Immutable per-evaluation readings in imperial units with optional radiation data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const fn default_is_day() -> bool {
    true
}

/// A single weather reading, current or hourly
///
/// All temperatures are °F and wind is mph. Values are taken as-is: the
/// engines do not validate ranges, so out-of-range readings produce
/// numerically defined (but physically meaningless) results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Dry-bulb air temperature (°F)
    pub temperature_f: f64,
    /// Feels-like temperature supplied by the weather source (°F)
    pub apparent_temperature_f: f64,
    /// Relative humidity (0-100)
    pub humidity: f64,
    /// Sustained wind speed (mph)
    pub wind_mph: f64,
    /// Probability of precipitation (0-100)
    #[serde(default)]
    pub precip_probability: f64,
    /// Precipitation amount (inches)
    #[serde(default)]
    pub precip_in: f64,
    /// UV index
    #[serde(default)]
    pub uv_index: f64,
    /// Cloud cover (0-100)
    #[serde(default)]
    pub cloud_cover: Option<f64>,
    /// Barometric pressure (hPa)
    #[serde(default)]
    pub pressure_hpa: Option<f64>,
    /// Global solar radiation (W/m²)
    #[serde(default)]
    pub solar_radiation_wm2: Option<f64>,
    /// Whether the sample falls in daylight
    #[serde(default = "default_is_day")]
    pub is_day: bool,
    /// Timestamp of the reading, when the provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl WeatherSample {
    /// Create a dry, daytime sample with no UV from the four mandatory readings
    #[must_use]
    pub const fn new(
        temperature_f: f64,
        apparent_temperature_f: f64,
        humidity: f64,
        wind_mph: f64,
    ) -> Self {
        Self {
            temperature_f,
            apparent_temperature_f,
            humidity,
            wind_mph,
            precip_probability: 0.0,
            precip_in: 0.0,
            uv_index: 0.0,
            cloud_cover: None,
            pressure_hpa: None,
            solar_radiation_wm2: None,
            is_day: true,
            time: None,
        }
    }

    /// Set precipitation probability (0-100) and amount (inches)
    #[must_use]
    pub fn with_precipitation(mut self, probability: f64, amount_in: f64) -> Self {
        self.precip_probability = probability;
        self.precip_in = amount_in;
        self
    }

    /// Set the UV index
    #[must_use]
    pub fn with_uv_index(mut self, uv_index: f64) -> Self {
        self.uv_index = uv_index;
        self
    }

    /// Set the daylight flag
    #[must_use]
    pub fn with_daylight(mut self, is_day: bool) -> Self {
        self.is_day = is_day;
        self
    }

    /// Set the reading timestamp
    #[must_use]
    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Project this sample onto a forecast point
    #[must_use]
    pub fn to_forecast_point(&self) -> ForecastPoint {
        ForecastPoint {
            apparent_temperature_f: self.apparent_temperature_f,
            precip_probability: self.precip_probability,
            precip_in: self.precip_in,
            uv_index: self.uv_index,
            time: self.time,
        }
    }
}

/// A near-future forecast point used to extend long-run decisions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Feels-like temperature (°F)
    pub apparent_temperature_f: f64,
    /// Probability of precipitation (0-100)
    #[serde(default)]
    pub precip_probability: f64,
    /// Precipitation amount (inches)
    #[serde(default)]
    pub precip_in: f64,
    /// UV index
    #[serde(default)]
    pub uv_index: f64,
    /// Forecast valid time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl ForecastPoint {
    /// Create a dry forecast point with no UV
    #[must_use]
    pub const fn new(apparent_temperature_f: f64) -> Self {
        Self {
            apparent_temperature_f,
            precip_probability: 0.0,
            precip_in: 0.0,
            uv_index: 0.0,
            time: None,
        }
    }

    /// Set precipitation probability (0-100) and amount (inches)
    #[must_use]
    pub fn with_precipitation(mut self, probability: f64, amount_in: f64) -> Self {
        self.precip_probability = probability;
        self.precip_in = amount_in;
        self
    }

    /// Set the UV index
    #[must_use]
    pub fn with_uv_index(mut self, uv_index: f64) -> Self {
        self.uv_index = uv_index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_defaults_from_minimal_json() {
        let json = r#"{
            "temperature_f": 55.0,
            "apparent_temperature_f": 53.0,
            "humidity": 40.0,
            "wind_mph": 6.0
        }"#;
        let sample: WeatherSample = serde_json::from_str(json).unwrap();
        assert!(sample.is_day);
        assert!(sample.pressure_hpa.is_none());
        assert!(sample.precip_probability.abs() < f64::EPSILON);
        assert_eq!(sample, WeatherSample::new(55.0, 53.0, 40.0, 6.0));
    }

    #[test]
    fn test_forecast_projection_keeps_precipitation() {
        let sample = WeatherSample::new(60.0, 62.0, 70.0, 4.0)
            .with_precipitation(80.0, 0.2)
            .with_uv_index(3.0);
        let point = sample.to_forecast_point();
        assert!((point.precip_probability - 80.0).abs() < f64::EPSILON);
        assert!((point.uv_index - 3.0).abs() < f64::EPSILON);
    }
}
