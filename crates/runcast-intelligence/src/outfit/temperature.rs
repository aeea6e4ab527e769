// ABOUTME: Dressing temperatures for the outfit rules: effective, forecast look-ahead, and activity-adjusted
// ABOUTME: Effective temperature corrects the feels-like reading for wind, humidity, sun, rain, and sensitivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runcast_core::{ActivityKind, ForecastPoint, RunProfile, WeatherSample};
use serde::{Deserialize, Serialize};

/// Degrees added per unit of temperature sensitivity
const SENSITIVITY_STEP_F: f64 = 5.0;
/// Forecast points consulted by the look-ahead
const LOOK_AHEAD_POINTS: usize = 2;
/// Cap on the forecast warming credited to long runs (°F)
const MAX_CREDITED_RISE_F: f64 = 10.0;
/// Workouts generate enough heat to dress this much warmer (°F)
const WORKOUT_OFFSET_F: f64 = 10.0;

/// Temperature the runner should dress for before activity adjustment (°F)
#[must_use]
pub fn effective_temperature_f(sample: &WeatherSample, profile: &RunProfile) -> f64 {
    let apparent = sample.apparent_temperature_f;
    let mut effective = profile.temp_sensitivity.mul_add(SENSITIVITY_STEP_F, apparent);

    if apparent < 50.0 && sample.wind_mph > 10.0 {
        effective -= ((sample.wind_mph - 10.0) * 0.5).min(5.0);
    }
    if apparent > 55.0 && sample.humidity > 60.0 {
        effective += ((sample.humidity - 60.0) * 0.2).min(8.0);
    }
    if sample.is_day && sample.uv_index > 3.0 && apparent > 45.0 {
        effective += ((sample.uv_index - 3.0) * 1.5).min(6.0);
    }
    if sample.precip_probability > 50.0 && apparent < 60.0 {
        effective -= 3.0;
    }
    effective
}

/// Summary of the next forecast points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAhead {
    /// Largest warming over the current apparent temperature (°F, never negative)
    pub max_temp_rise: f64,
    /// Highest precipitation probability among the consulted points
    pub max_precip_probability: f64,
    /// Any consulted point is likely wet
    pub rain_likely: bool,
    /// Highest UV index including the current reading
    pub max_uv: f64,
}

impl LookAhead {
    /// Look-ahead with no forecast: only the current UV counts
    #[must_use]
    pub const fn current_only(sample: &WeatherSample) -> Self {
        Self {
            max_temp_rise: 0.0,
            max_precip_probability: 0.0,
            rain_likely: false,
            max_uv: sample.uv_index,
        }
    }
}

/// Summarize the first two forecast points relative to the current sample
#[must_use]
pub fn look_ahead(sample: &WeatherSample, forecast: &[ForecastPoint]) -> LookAhead {
    forecast.iter().take(LOOK_AHEAD_POINTS).fold(
        LookAhead::current_only(sample),
        |acc, point| LookAhead {
            max_temp_rise: acc
                .max_temp_rise
                .max(point.apparent_temperature_f - sample.apparent_temperature_f),
            max_precip_probability: acc.max_precip_probability.max(point.precip_probability),
            rain_likely: acc.rain_likely
                || point.precip_probability > 50.0
                || point.precip_in > 0.05,
            max_uv: acc.max_uv.max(point.uv_index),
        },
    )
}

/// Dressing temperature after crediting the activity's own heat (°F)
#[must_use]
pub fn adjusted_temperature_f(effective_f: f64, activity: ActivityKind, ahead: &LookAhead) -> f64 {
    match activity {
        ActivityKind::Workout => effective_f + WORKOUT_OFFSET_F,
        ActivityKind::LongRun => ahead
            .max_temp_rise
            .min(MAX_CREDITED_RISE_F)
            .mul_add(0.5, effective_f),
        ActivityKind::Easy => effective_f,
    }
}
