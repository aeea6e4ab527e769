// ABOUTME: Dew point calculation via the Magnus formula and comfort tier classification
// ABOUTME: Also inverts dew point back to relative humidity through the saturation pressure ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dew point and humidity comfort
//!
//! All functions are total over numeric input. Humidity is clamped to a tiny
//! positive value before the logarithm so a 0% reading yields a very low (but
//! finite) dew point instead of negative infinity.

use crate::physiological_constants::{dew_point_comfort::*, magnus};
use runcast_core::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use serde::{Deserialize, Serialize};

/// Saturation vapour pressure (hPa) at a Celsius temperature
#[must_use]
pub fn saturation_vapor_pressure_hpa(temp_c: f64) -> f64 {
    magnus::BASE_PRESSURE_HPA * ((magnus::A * temp_c) / (magnus::B_CELSIUS + temp_c)).exp()
}

/// Dew point in °C from air temperature (°C) and relative humidity (0-100)
#[must_use]
pub fn dew_point_c(temp_c: f64, relative_humidity: f64) -> f64 {
    let rh = relative_humidity.max(magnus::MIN_RELATIVE_HUMIDITY);
    let gamma = (rh / 100.0).ln() + (magnus::A * temp_c) / (magnus::B_CELSIUS + temp_c);
    magnus::B_CELSIUS * gamma / (magnus::A - gamma)
}

/// Dew point in °F from air temperature (°F) and relative humidity (0-100)
#[must_use]
pub fn dew_point_f(temp_f: f64, relative_humidity: f64) -> f64 {
    celsius_to_fahrenheit(dew_point_c(
        fahrenheit_to_celsius(temp_f),
        relative_humidity,
    ))
}

/// Relative humidity (0-100) implied by an air temperature and dew point, both °F
#[must_use]
pub fn relative_humidity_from_dew_point(temp_f: f64, dew_point_f: f64) -> f64 {
    let actual = saturation_vapor_pressure_hpa(fahrenheit_to_celsius(dew_point_f));
    let saturated = saturation_vapor_pressure_hpa(fahrenheit_to_celsius(temp_f));
    (100.0 * actual / saturated).clamp(0.0, 100.0)
}

/// Qualitative dew point comfort tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DewPointTier {
    /// Below 50 °F
    Dry,
    /// 50 to below 55 °F
    Comfortable,
    /// 55 to below 60 °F
    SlightlyMuggy,
    /// 60 to below 65 °F
    Moderate,
    /// 65 to below 70 °F
    Muggy,
    /// 70 to below 75 °F
    VeryHumid,
    /// 75 °F and above
    Oppressive,
}

impl DewPointTier {
    /// Classify a dew point (°F)
    #[must_use]
    pub fn from_dew_point_f(dew_point_f: f64) -> Self {
        match dew_point_f {
            d if d < DRY_MAX_F => Self::Dry,
            d if d < COMFORTABLE_MAX_F => Self::Comfortable,
            d if d < SLIGHTLY_MUGGY_MAX_F => Self::SlightlyMuggy,
            d if d < MODERATE_MAX_F => Self::Moderate,
            d if d < MUGGY_MAX_F => Self::Muggy,
            d if d < VERY_HUMID_MAX_F => Self::VeryHumid,
            _ => Self::Oppressive,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Comfortable => "Comfortable",
            Self::SlightlyMuggy => "Slightly muggy",
            Self::Moderate => "Moderate",
            Self::Muggy => "Muggy",
            Self::VeryHumid => "Very humid",
            Self::Oppressive => "Oppressive",
        }
    }

    /// One-sentence description of how the air feels
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dry => "Crisp, dry air. Sweat evaporates easily.",
            Self::Comfortable => "Pleasant air with no noticeable humidity.",
            Self::SlightlyMuggy => "Humidity becomes noticeable on harder efforts.",
            Self::Moderate => "Sticky air. Expect to sweat more than usual.",
            Self::Muggy => "Uncomfortable humidity. Cooling is noticeably less efficient.",
            Self::VeryHumid => "Heavy, humid air. Slow down and hydrate.",
            Self::Oppressive => "Oppressive humidity. Sweat barely evaporates.",
        }
    }

    /// Severity color (hex) for display
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Dry => "#60a5fa",
            Self::Comfortable => "#22c55e",
            Self::SlightlyMuggy => "#84cc16",
            Self::Moderate => "#eab308",
            Self::Muggy => "#f97316",
            Self::VeryHumid => "#ef4444",
            Self::Oppressive => "#991b1b",
        }
    }
}

/// Dew point comfort classification with its display attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DewPointComfort {
    /// Comfort tier
    pub tier: DewPointTier,
    /// Display label
    pub label: String,
    /// Description of how the air feels
    pub description: String,
    /// Severity color (hex)
    pub color: String,
}

/// Classify a dew point (°F) into its comfort level
#[must_use]
pub fn dew_point_comfort_level(dew_point_f: f64) -> DewPointComfort {
    let tier = DewPointTier::from_dew_point_f(dew_point_f);
    DewPointComfort {
        tier,
        label: tier.label().to_owned(),
        description: tier.description().to_owned(),
        color: tier.color().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_anchor() {
        let dp = dew_point_f(75.0, 60.0);
        assert!((dp - 60.3).abs() <= 0.2, "dew point was {dp}");
    }

    #[test]
    fn test_saturated_air_dew_point_equals_temperature() {
        assert!((dew_point_c(20.0, 100.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_humidity_is_finite() {
        let dp = dew_point_f(70.0, 0.0);
        assert!(dp.is_finite());
        assert!(dp < -100.0);
    }

    #[test]
    fn test_tier_boundaries_are_half_open() {
        assert_eq!(DewPointTier::from_dew_point_f(49.99), DewPointTier::Dry);
        assert_eq!(DewPointTier::from_dew_point_f(50.0), DewPointTier::Comfortable);
        assert_eq!(DewPointTier::from_dew_point_f(64.9), DewPointTier::Moderate);
        assert_eq!(DewPointTier::from_dew_point_f(74.99), DewPointTier::VeryHumid);
        assert_eq!(DewPointTier::from_dew_point_f(75.0), DewPointTier::Oppressive);
    }

    #[test]
    fn test_humidity_inverse() {
        let dp = dew_point_f(68.0, 45.0);
        let rh = relative_humidity_from_dew_point(68.0, dp);
        assert!((rh - 45.0).abs() < 1e-6);
        assert!((relative_humidity_from_dew_point(50.0, 80.0) - 100.0).abs() < f64::EPSILON);
    }
}
