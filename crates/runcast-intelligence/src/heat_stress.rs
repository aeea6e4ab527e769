// ABOUTME: Heat stress assessment from WBGT approximation, NWS heat index, and wind chill
// ABOUTME: Classifies WBGT into activity-aware risk tiers and race-style flag colors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Heat stress assessment
//!
//! The WBGT estimate here is the simplified shade approximation: it depends on
//! air temperature and vapour pressure only. Wind, pressure, solar radiation
//! and cloud cover are accepted for interface compatibility with richer
//! estimators but do not alter the result.

use crate::dew_point::saturation_vapor_pressure_hpa;
use crate::physiological_constants::{heat_index, wbgt, wind_chill};
use runcast_core::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use runcast_core::ActivityKind;
use serde::{Deserialize, Serialize};

/// Inputs to the WBGT estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WbgtInput {
    /// Air temperature (°F)
    pub temp_f: f64,
    /// Relative humidity (0-100)
    pub humidity: f64,
    /// Wind speed (mph); unused by the simplified formula
    pub wind_mph: f64,
    /// Barometric pressure (hPa); unused by the simplified formula
    pub pressure_hpa: Option<f64>,
    /// Solar radiation (W/m²); unused by the simplified formula
    pub solar_radiation_wm2: Option<f64>,
    /// Cloud cover (0-100); unused by the simplified formula
    pub cloud_cover: Option<f64>,
}

/// Estimate Wet Bulb Globe Temperature (°F)
///
/// `WBGT(°C) = 0.567·T + 0.393·e + 3.94` where `e` is the ambient vapour
/// pressure in hPa.
#[must_use]
pub fn calculate_wbgt(input: &WbgtInput) -> f64 {
    let temp_c = fahrenheit_to_celsius(input.temp_f);
    let vapor_pressure = input.humidity / 100.0 * saturation_vapor_pressure_hpa(temp_c);
    let wbgt_c = wbgt::AIR_TEMP_COEFFICIENT.mul_add(
        temp_c,
        wbgt::VAPOR_PRESSURE_COEFFICIENT * vapor_pressure + wbgt::OFFSET_CELSIUS,
    );
    celsius_to_fahrenheit(wbgt_c)
}

/// Heat risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No meaningful heat risk
    Ideal,
    /// Run with care
    Caution,
    /// Shorten or slow the run
    HighRisk,
    /// Avoid hard running outdoors
    Danger,
}

/// Race-safety flag color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagColor {
    /// WBGT not meaningful
    None,
    /// Low risk
    Green,
    /// Moderate risk
    Yellow,
    /// High risk
    Red,
    /// Extreme risk
    Black,
}

/// Activity-aware WBGT risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WbgtRisk {
    /// Risk tier
    pub level: RiskLevel,
    /// Flag color
    pub flag: FlagColor,
    /// Guidance message
    pub message: String,
}

impl WbgtRisk {
    fn new(level: RiskLevel, flag: FlagColor, message: &str) -> Self {
        Self {
            level,
            flag,
            message: message.to_owned(),
        }
    }
}

/// Assess WBGT risk for a kind of run
///
/// Below 60 °F WBGT is not meaningful; the assessment is `Ideal` with no
/// flag and callers should fall back to feels-like guidance. Workouts and
/// long runs escalate one tier earlier than easy runs at the bottom of the
/// scale; both reach danger at 73 °F and the black flag at 82 °F.
#[must_use]
pub fn assess_wbgt_risk(wbgt_f: f64, activity: ActivityKind) -> WbgtRisk {
    let hard_effort = matches!(activity, ActivityKind::Workout | ActivityKind::LongRun);

    if wbgt_f < wbgt::MEANINGFUL_MIN_F {
        return WbgtRisk::new(
            RiskLevel::Ideal,
            FlagColor::None,
            "WBGT is not meaningful in these conditions; use the feels-like temperature.",
        );
    }
    if wbgt_f >= wbgt::BLACK_MIN_F {
        return WbgtRisk::new(
            RiskLevel::Danger,
            FlagColor::Black,
            "Extreme heat stress. Move the run indoors or postpone it.",
        );
    }
    if wbgt_f >= wbgt::RED_MIN_F {
        return WbgtRisk::new(
            RiskLevel::Danger,
            FlagColor::Red,
            "Dangerous heat stress. Keep it short and easy, or skip it.",
        );
    }
    if wbgt_f >= wbgt::YELLOW_MIN_F {
        return if hard_effort {
            WbgtRisk::new(
                RiskLevel::HighRisk,
                FlagColor::Yellow,
                "High heat stress for hard efforts. Cut intensity and carry fluids.",
            )
        } else {
            WbgtRisk::new(
                RiskLevel::Caution,
                FlagColor::Yellow,
                "Warm. Slow the pace and hydrate.",
            )
        };
    }
    if hard_effort {
        WbgtRisk::new(
            RiskLevel::Caution,
            FlagColor::Green,
            "Mild heat stress. Hard efforts will feel harder than usual.",
        )
    } else {
        WbgtRisk::new(
            RiskLevel::Ideal,
            FlagColor::Green,
            "Low heat stress. Good conditions for an easy run.",
        )
    }
}

/// Assess WBGT risk from the legacy pair of activity flags
#[must_use]
pub fn assess_wbgt_risk_flags(wbgt_f: f64, workout: bool, long_run: bool) -> WbgtRisk {
    assess_wbgt_risk(wbgt_f, ActivityKind::from_flags(workout, long_run))
}

/// Flag color for a WBGT reading when no activity context is available
#[must_use]
pub fn wbgt_flag(wbgt_f: f64) -> FlagColor {
    match wbgt_f {
        w if w < wbgt::GREEN_MIN_F => FlagColor::None,
        w if w < wbgt::YELLOW_MIN_F => FlagColor::Green,
        w if w < wbgt::RED_MIN_F => FlagColor::Yellow,
        w if w < wbgt::BLACK_MIN_F => FlagColor::Red,
        _ => FlagColor::Black,
    }
}

/// NWS heat index (°F)
///
/// Below 80 °F the air temperature is returned unchanged. Otherwise the
/// Rothfusz regression is applied with the standard low- and high-humidity
/// adjustments, and the result is rounded to the nearest degree.
#[must_use]
pub fn calculate_heat_index(temp_f: f64, humidity: f64) -> f64 {
    if temp_f < heat_index::MIN_TEMPERATURE_F {
        return temp_f;
    }

    let t = temp_f;
    let rh = humidity;
    let mut hi = heat_index::C1
        + heat_index::C2 * t
        + heat_index::C3 * rh
        + heat_index::C4 * t * rh
        + heat_index::C5 * t * t
        + heat_index::C6 * rh * rh
        + heat_index::C7 * t * t * rh
        + heat_index::C8 * t * rh * rh
        + heat_index::C9 * t * t * rh * rh;

    if rh < heat_index::LOW_HUMIDITY_THRESHOLD && t <= heat_index::LOW_HUMIDITY_MAX_TEMP_F {
        hi -= ((heat_index::LOW_HUMIDITY_THRESHOLD - rh) / 4.0)
            * ((17.0 - (t - 95.0).abs()) / 17.0).sqrt();
    } else if rh > heat_index::HIGH_HUMIDITY_THRESHOLD && t <= heat_index::HIGH_HUMIDITY_MAX_TEMP_F
    {
        hi += ((rh - heat_index::HIGH_HUMIDITY_THRESHOLD) / 10.0) * ((87.0 - t) / 5.0);
    }

    hi.round()
}

/// NWS wind chill (°F)
///
/// Defined at or below 50 °F with wind above 3 mph; otherwise the air
/// temperature is returned unchanged.
#[must_use]
pub fn wind_chill_f(temp_f: f64, wind_mph: f64) -> f64 {
    if temp_f > wind_chill::MAX_TEMPERATURE_F || wind_mph <= wind_chill::MIN_WIND_MPH {
        return temp_f;
    }
    let wind_term = wind_mph.powf(wind_chill::WIND_EXPONENT);
    wind_chill::C1 + wind_chill::C2 * temp_f - wind_chill::C3 * wind_term
        + wind_chill::C4 * temp_f * wind_term
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wbgt_ignores_radiation_inputs() {
        let base = WbgtInput {
            temp_f: 85.0,
            humidity: 60.0,
            ..WbgtInput::default()
        };
        let with_sun = WbgtInput {
            solar_radiation_wm2: Some(900.0),
            cloud_cover: Some(0.0),
            pressure_hpa: Some(1013.0),
            wind_mph: 12.0,
            ..base.clone()
        };
        assert!((calculate_wbgt(&base) - calculate_wbgt(&with_sun)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wbgt_hot_humid_day() {
        // 30 °C at 70% RH: e ≈ 29.7 hPa, WBGT ≈ 32.6 °C
        let wbgt_f = calculate_wbgt(&WbgtInput {
            temp_f: 86.0,
            humidity: 70.0,
            ..WbgtInput::default()
        });
        assert!((wbgt_f - 90.7).abs() < 0.5, "wbgt was {wbgt_f}");
    }

    #[test]
    fn test_easy_runs_escalate_later() {
        let easy = assess_wbgt_risk(62.0, ActivityKind::Easy);
        let workout = assess_wbgt_risk(62.0, ActivityKind::Workout);
        assert_eq!(easy.level, RiskLevel::Ideal);
        assert_eq!(workout.level, RiskLevel::Caution);
        assert_eq!(easy.flag, workout.flag);
    }

    #[test]
    fn test_heat_index_adjustments() {
        // Low humidity adjustment lowers the index
        assert!((calculate_heat_index(100.0, 10.0) - 94.0).abs() < f64::EPSILON);
        // High humidity adjustment raises the index
        assert!(calculate_heat_index(82.0, 95.0) > 90.0);
    }

    #[test]
    fn test_wind_chill_range() {
        assert!((wind_chill_f(60.0, 20.0) - 60.0).abs() < f64::EPSILON);
        assert!((wind_chill_f(30.0, 2.0) - 30.0).abs() < f64::EPSILON);
        // NWS chart: 0 °F with 15 mph wind → -19 °F
        assert!((wind_chill_f(0.0, 15.0) + 19.0).abs() < 0.5);
    }
}
