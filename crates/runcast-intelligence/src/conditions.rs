// ABOUTME: Single entry point bundling the dew point, heat stress, score, and outfit engines
// ABOUTME: Also evaluates hourly series in parallel and picks the best hour to run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conditions facade
//!
//! Callers that only have raw readings use these functions instead of the
//! individual engines. Every function is pure; the hourly evaluation fans out
//! over rayon's global pool and preserves input order.

use crate::dew_point::{dew_point_comfort_level, dew_point_f, DewPointComfort};
use crate::heat_stress::{
    assess_wbgt_risk, calculate_heat_index, calculate_wbgt, FlagColor, RiskLevel, WbgtInput,
};
use crate::outfit::{select_outfit, OutfitResult};
use crate::running_score::{compute_running_score, score_label, RunningScore, ScoreLabel};
use crate::tone::{score_based_tone, score_tone, Rgb};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use runcast_core::{ActivityKind, ForecastPoint, RunProfile, WeatherSample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Dew point with its comfort classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DewPointEvaluation {
    /// Dew point (°F)
    pub dew_point_f: f64,
    /// Comfort tier and display attributes
    pub comfort: DewPointComfort,
}

/// Optional radiation inputs for the heat stress estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatStressExtras {
    /// Barometric pressure (hPa)
    pub pressure_hpa: Option<f64>,
    /// Solar radiation (W/m²)
    pub solar_radiation_wm2: Option<f64>,
    /// Cloud cover (0-100)
    pub cloud_cover: Option<f64>,
}

impl HeatStressExtras {
    /// Extras carried by a weather sample
    #[must_use]
    pub const fn from_sample(sample: &WeatherSample) -> Self {
        Self {
            pressure_hpa: sample.pressure_hpa,
            solar_radiation_wm2: sample.solar_radiation_wm2,
            cloud_cover: sample.cloud_cover,
        }
    }
}

/// Heat stress indices with the activity-aware risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatStressEvaluation {
    /// Estimated WBGT (°F)
    pub wbgt_f: f64,
    /// NWS heat index (°F)
    pub heat_index_f: f64,
    /// Risk tier
    pub level: RiskLevel,
    /// Flag color
    pub flag: FlagColor,
    /// Guidance message
    pub message: String,
}

/// Everything known about one sample for one runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsReport {
    /// Sample timestamp, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Dew point evaluation
    pub dew_point: DewPointEvaluation,
    /// Heat stress evaluation
    pub heat_stress: HeatStressEvaluation,
    /// Running score and breakdown
    pub score: RunningScore,
    /// Score label
    pub label: ScoreLabel,
    /// Tint for the feels-like temperature
    pub temperature_tone: Rgb,
    /// Tint for the score
    pub score_tone: Rgb,
    /// Outfit recommendation
    pub outfit: OutfitResult,
}

/// Dew point and comfort for an air temperature (°F) and humidity
#[must_use]
pub fn evaluate_dew_point(temp_f: f64, humidity: f64) -> DewPointEvaluation {
    let dew_point = dew_point_f(temp_f, humidity);
    DewPointEvaluation {
        dew_point_f: dew_point,
        comfort: dew_point_comfort_level(dew_point),
    }
}

/// WBGT, heat index, and risk for the given readings
#[must_use]
pub fn evaluate_heat_stress(
    temp_f: f64,
    humidity: f64,
    wind_mph: f64,
    activity: ActivityKind,
    extras: HeatStressExtras,
) -> HeatStressEvaluation {
    let wbgt_f = calculate_wbgt(&WbgtInput {
        temp_f,
        humidity,
        wind_mph,
        pressure_hpa: extras.pressure_hpa,
        solar_radiation_wm2: extras.solar_radiation_wm2,
        cloud_cover: extras.cloud_cover,
    });
    let risk = assess_wbgt_risk(wbgt_f, activity);
    HeatStressEvaluation {
        wbgt_f,
        heat_index_f: calculate_heat_index(temp_f, humidity),
        level: risk.level,
        flag: risk.flag,
        message: risk.message,
    }
}

/// Running score for a sample
#[must_use]
pub fn evaluate_score(sample: &WeatherSample, activity: ActivityKind) -> RunningScore {
    compute_running_score(sample, activity)
}

/// Outfit for a sample; a missing forecast is treated as empty
#[must_use]
pub fn evaluate_outfit(
    sample: &WeatherSample,
    profile: &RunProfile,
    forecast: Option<&[ForecastPoint]>,
) -> OutfitResult {
    select_outfit(sample, profile, forecast.unwrap_or_default())
}

/// Full report for one sample
#[must_use]
pub fn evaluate_conditions(
    sample: &WeatherSample,
    profile: &RunProfile,
    forecast: Option<&[ForecastPoint]>,
) -> ConditionsReport {
    let score = evaluate_score(sample, profile.activity);
    let report = ConditionsReport {
        time: sample.time,
        dew_point: evaluate_dew_point(sample.temperature_f, sample.humidity),
        heat_stress: evaluate_heat_stress(
            sample.temperature_f,
            sample.humidity,
            sample.wind_mph,
            profile.activity,
            HeatStressExtras::from_sample(sample),
        ),
        label: score_label(score.score),
        temperature_tone: score_tone(sample.apparent_temperature_f),
        score_tone: score_based_tone(score.score),
        outfit: evaluate_outfit(sample, profile, forecast),
        score,
    };

    debug!(
        score = report.score.score,
        label = %report.label.text,
        flag = ?report.heat_stress.flag,
        "Evaluated conditions"
    );

    report
}

/// Evaluate an hourly series in parallel
///
/// Each hour's forecast is the samples that follow it, so long runs see the
/// next two hours. Output order matches input order.
#[must_use]
pub fn evaluate_hourly(samples: &[WeatherSample], profile: &RunProfile) -> Vec<ConditionsReport> {
    let forecasts: Vec<ForecastPoint> = samples
        .iter()
        .map(WeatherSample::to_forecast_point)
        .collect();

    let reports: Vec<ConditionsReport> = samples
        .par_iter()
        .enumerate()
        .map(|(index, sample)| {
            evaluate_conditions(sample, profile, forecasts.get(index + 1..))
        })
        .collect();

    debug!(hours = reports.len(), "Evaluated hourly conditions");
    reports
}

/// Index of the highest-scoring report; the earliest wins ties
#[must_use]
pub fn best_run_hour(reports: &[ConditionsReport]) -> Option<usize> {
    reports
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u8)>, (index, report)| match best {
            Some((_, best_score)) if best_score >= report.score.score => best,
            _ => Some((index, report.score.score)),
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_index_passthrough_below_80() {
        let eval = evaluate_heat_stress(
            75.0,
            90.0,
            5.0,
            ActivityKind::Easy,
            HeatStressExtras::default(),
        );
        assert!((eval.heat_index_f - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_forecast_equals_empty() {
        let sample = WeatherSample::new(45.0, 43.0, 60.0, 8.0);
        let profile = RunProfile::for_activity(ActivityKind::LongRun);
        assert_eq!(
            evaluate_outfit(&sample, &profile, None),
            evaluate_outfit(&sample, &profile, Some([].as_slice()))
        );
    }

    #[test]
    fn test_best_hour_prefers_earliest_tie() {
        let sample = WeatherSample::new(50.0, 50.0, 40.0, 0.0);
        let profile = RunProfile::default();
        let reports = evaluate_hourly(&[sample.clone(), sample.clone(), sample], &profile);
        assert_eq!(best_run_hour(&reports), Some(0));
        assert_eq!(best_run_hour(&[]), None);
    }

    #[test]
    fn test_report_serializes_with_snake_case_enums() {
        let sample = WeatherSample::new(50.0, 50.0, 40.0, 3.0);
        let report = evaluate_conditions(&sample, &RunProfile::default(), None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["heat_stress"]["flag"], "none");
        assert_eq!(json["outfit"]["sock_tier"], "light_socks");
        assert!(json.get("time").is_none());
        assert!(json["score"]["breakdown"].is_array());
    }
}
