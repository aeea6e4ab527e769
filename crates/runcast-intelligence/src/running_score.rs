// ABOUTME: Penalty-based 0-100 running condition score with an explainable per-factor breakdown
// ABOUTME: Combines apparent temperature, dew point, humidity, wind, precipitation, UV, and synergy terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Running condition score
//!
//! Each weather factor contributes a non-negative penalty. The penalties are
//! summed, the sum is capped at 99, and the capped total is inverted into a
//! 0-100 score. Breakdown parts report the raw (uncapped) points of each term.

use crate::dew_point::dew_point_f;
use crate::physiological_constants::{dew_point_comfort::*, running_score::*};
use runcast_core::{ActivityKind, WeatherSample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Factor contributing to the running score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    /// Apparent temperature relative to the ideal
    Temperature,
    /// Dew point comfort
    DewPoint,
    /// Extra humidity penalty in warm conditions
    Humidity,
    /// Wind speed
    Wind,
    /// Precipitation probability, amount, and ice
    Precipitation,
    /// UV exposure
    Uv,
    /// Wind amplifying cold
    ColdSynergy,
    /// Humidity and extreme heat amplifying each other
    HeatSynergy,
}

impl ScoreFactor {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::DewPoint => "Dew point",
            Self::Humidity => "Humidity",
            Self::Wind => "Wind",
            Self::Precipitation => "Precipitation",
            Self::Uv => "UV",
            Self::ColdSynergy => "Cold + wind",
            Self::HeatSynergy => "Heat + humidity",
        }
    }
}

/// One explainable term of the score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdownPart {
    /// Factor identifier
    pub key: ScoreFactor,
    /// Display label
    pub label: String,
    /// Penalty points applied (raw, before the total cap)
    pub points: f64,
    /// Nominal full-scale penalty for this factor
    pub max_points: f64,
    /// Why these points were applied
    pub reason: String,
    /// How to mitigate the penalty, when it is non-zero
    pub tip: Option<String>,
}

impl ScoreBreakdownPart {
    fn new(key: ScoreFactor, points: f64, max_points: f64, reason: String) -> Self {
        Self {
            key,
            label: key.label().to_owned(),
            points,
            max_points,
            reason,
            tip: None,
        }
    }

    fn with_tip(mut self, tip: &str) -> Self {
        if self.points > 0.0 {
            self.tip = Some(tip.to_owned());
        }
        self
    }
}

/// Score with its breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningScore {
    /// Score from 0 (dangerous) to 100 (perfect)
    pub score: u8,
    /// Sum of all penalty terms before the cap
    pub total_penalty: f64,
    /// Per-factor breakdown in fixed order
    pub breakdown: Vec<ScoreBreakdownPart>,
}

/// Ideal apparent temperature (°F) for a kind of run
#[must_use]
pub const fn ideal_temperature_f(activity: ActivityKind) -> f64 {
    match activity {
        ActivityKind::Workout => IDEAL_WORKOUT_F,
        ActivityKind::LongRun => IDEAL_LONG_RUN_F,
        ActivityKind::Easy => IDEAL_EASY_F,
    }
}

fn temperature_penalty(apparent_f: f64, activity: ActivityKind) -> f64 {
    let ideal = ideal_temperature_f(activity);
    if apparent_f > ideal {
        let warm_span = MIN_WARM_SPAN_F.max(WARM_CEILING_F - ideal);
        ((apparent_f - ideal) / warm_span)
            .clamp(0.0, 1.0)
            .powf(WARM_EXPONENT)
            * WARM_MAX_PENALTY
    } else {
        let cool_width = if activity.is_workout() {
            COOL_WIDTH_WORKOUT_F
        } else {
            COOL_WIDTH_DEFAULT_F
        };
        ((apparent_f - ideal).abs() / cool_width).powi(2) * COOL_MULTIPLIER
    }
}

fn dew_point_penalty(dew_point: f64) -> f64 {
    let bounds = [
        DRY_MAX_F,
        COMFORTABLE_MAX_F,
        SLIGHTLY_MUGGY_MAX_F,
        MODERATE_MAX_F,
        MUGGY_MAX_F,
        VERY_HUMID_MAX_F,
    ];
    bounds
        .iter()
        .position(|bound| dew_point < *bound)
        .map_or(DEW_POINT_STEPS[DEW_POINT_STEPS.len() - 1], |index| {
            DEW_POINT_STEPS[index]
        })
}

fn humidity_penalty(humidity: f64, apparent_f: f64) -> f64 {
    if humidity > HUMIDITY_THRESHOLD && apparent_f > HUMIDITY_MIN_APPARENT_F {
        (((humidity - HUMIDITY_THRESHOLD) / 20.0).powi(2) * HUMIDITY_MAX_PENALTY)
            .min(HUMIDITY_MAX_PENALTY)
    } else {
        0.0
    }
}

fn wind_penalty(wind_mph: f64) -> f64 {
    ((wind_mph - WIND_FREE_MPH).max(0.0) / WIND_WIDTH_MPH).powi(2) * WIND_MULTIPLIER
}

fn precipitation_penalty(precip_probability: f64, precip_in: f64, apparent_f: f64) -> f64 {
    let probability = (precip_probability / 100.0 * PRECIP_PROBABILITY_MAX).min(PRECIP_PROBABILITY_MAX);
    let amount = (precip_in * PRECIP_AMOUNT_PER_INCH).min(PRECIP_AMOUNT_MAX);
    let ice = if apparent_f <= ICE_MAX_APPARENT_F && precip_in > 0.0 {
        ICE_PENALTY
    } else {
        0.0
    };
    probability + amount + ice
}

/// UV penalty; the long-run rule replaces the base rule rather than adding to it
fn uv_penalty(uv_index: f64, apparent_f: f64, activity: ActivityKind) -> f64 {
    let hot = apparent_f >= UV_HEAT_MIN_APPARENT_F;
    match activity {
        ActivityKind::LongRun => {
            let base = ((uv_index - UV_LONG_RUN_THRESHOLD).max(0.0) * UV_LONG_RUN_MULTIPLIER)
                .min(UV_LONG_RUN_MAX);
            if hot {
                base + UV_LONG_RUN_HEAT_BONUS
            } else {
                base
            }
        }
        ActivityKind::Workout | ActivityKind::Easy => {
            let base = ((uv_index - UV_THRESHOLD).max(0.0) * UV_MULTIPLIER).min(UV_MAX);
            if activity.is_workout() && hot {
                base + UV_WORKOUT_HEAT_BONUS
            } else {
                base
            }
        }
    }
}

fn cold_synergy(apparent_f: f64, wind_mph: f64) -> f64 {
    if apparent_f >= COLD_SYNERGY_MAX_APPARENT_F {
        return 0.0;
    }
    let wind_factor = if wind_mph > COLD_SYNERGY_MIN_WIND_MPH {
        COLD_SYNERGY_WIND_FACTOR
    } else {
        0.0
    };
    (COLD_SYNERGY_MAX_APPARENT_F - apparent_f) * COLD_SYNERGY_SLOPE * wind_factor
}

fn heat_synergy(dew_point: f64, apparent_f: f64) -> f64 {
    let mut penalty = 0.0;
    if dew_point > HEAT_SYNERGY_DEW_POINT_F {
        penalty += (dew_point - HEAT_SYNERGY_DEW_POINT_F) * HEAT_SYNERGY_DEW_POINT_SLOPE;
    }
    if apparent_f > EXTREME_HEAT_APPARENT_F {
        penalty += ((apparent_f - EXTREME_HEAT_APPARENT_F) / EXTREME_HEAT_WIDTH_F).powi(2)
            * EXTREME_HEAT_MULTIPLIER;
    }
    penalty
}

/// Invert a summed penalty into a 0-100 score
///
/// The sum is capped to 0..=99 first; a capped total of 99 maps to 0.
#[must_use]
pub fn score_from_penalty(total_penalty: f64) -> u8 {
    let capped = total_penalty.clamp(0.0, MAX_TOTAL_PENALTY);
    if capped >= MAX_TOTAL_PENALTY {
        return 0;
    }
    (100.0 - capped).round().clamp(0.0, 100.0) as u8
}

/// Compute the running score for a weather sample and kind of run
#[must_use]
pub fn compute_running_score(weather: &WeatherSample, activity: ActivityKind) -> RunningScore {
    let apparent = weather.apparent_temperature_f;
    let ideal = ideal_temperature_f(activity);
    let dew_point = dew_point_f(weather.temperature_f, weather.humidity);

    let temperature = ScoreBreakdownPart::new(
        ScoreFactor::Temperature,
        temperature_penalty(apparent, activity),
        WARM_MAX_PENALTY,
        if apparent > ideal {
            format!("Feels like {apparent:.0}°F, warmer than the ideal {ideal:.0}°F")
        } else if apparent < ideal {
            format!("Feels like {apparent:.0}°F, cooler than the ideal {ideal:.0}°F")
        } else {
            format!("Feels like the ideal {ideal:.0}°F")
        },
    )
    .with_tip(if apparent > ideal {
        "Run early or late in the day and ease the pace"
    } else {
        "Add a layer and warm up indoors before heading out"
    });

    let dew = ScoreBreakdownPart::new(
        ScoreFactor::DewPoint,
        dew_point_penalty(dew_point),
        DEW_POINT_STEPS[DEW_POINT_STEPS.len() - 1],
        format!("Dew point {dew_point:.0}°F"),
    )
    .with_tip("Expect heavier sweating; drink before you are thirsty");

    let humidity = ScoreBreakdownPart::new(
        ScoreFactor::Humidity,
        humidity_penalty(weather.humidity, apparent),
        HUMIDITY_MAX_PENALTY,
        format!("Relative humidity {:.0}%", weather.humidity),
    )
    .with_tip("Wear light, wicking fabrics");

    let wind = ScoreBreakdownPart::new(
        ScoreFactor::Wind,
        wind_penalty(weather.wind_mph),
        WIND_MULTIPLIER,
        format!("Wind {:.0} mph", weather.wind_mph),
    )
    .with_tip("Start into the wind and finish with it at your back");

    let precipitation = ScoreBreakdownPart::new(
        ScoreFactor::Precipitation,
        precipitation_penalty(weather.precip_probability, weather.precip_in, apparent),
        PRECIP_PROBABILITY_MAX + PRECIP_AMOUNT_MAX + ICE_PENALTY,
        if apparent <= ICE_MAX_APPARENT_F && weather.precip_in > 0.0 {
            format!(
                "{:.0}% chance of precipitation, {:.2} in, icy footing likely",
                weather.precip_probability, weather.precip_in
            )
        } else {
            format!(
                "{:.0}% chance of precipitation, {:.2} in",
                weather.precip_probability, weather.precip_in
            )
        },
    )
    .with_tip("Wear a brimmed cap and watch for slick surfaces");

    let uv_max = if activity.is_long_run() {
        UV_LONG_RUN_MAX + UV_LONG_RUN_HEAT_BONUS
    } else {
        UV_MAX + UV_WORKOUT_HEAT_BONUS
    };
    let uv = ScoreBreakdownPart::new(
        ScoreFactor::Uv,
        uv_penalty(weather.uv_index, apparent, activity),
        uv_max,
        format!("UV index {:.0}", weather.uv_index),
    )
    .with_tip("Use sunscreen and seek shaded routes");

    let mut breakdown = vec![temperature, dew, humidity, wind, precipitation, uv];

    let cold = cold_synergy(apparent, weather.wind_mph);
    if cold > 0.0 {
        breakdown.push(
            ScoreBreakdownPart::new(
                ScoreFactor::ColdSynergy,
                cold,
                COLD_SYNERGY_NOMINAL_MAX,
                format!(
                    "Wind {:.0} mph makes {apparent:.0}°F feel harsher",
                    weather.wind_mph
                ),
            )
            .with_tip("Cover exposed skin and pick sheltered routes"),
        );
    }

    let heat = heat_synergy(dew_point, apparent);
    if heat > 0.0 {
        breakdown.push(
            ScoreBreakdownPart::new(
                ScoreFactor::HeatSynergy,
                heat,
                HEAT_SYNERGY_NOMINAL_MAX,
                format!("Dew point {dew_point:.0}°F limits cooling at {apparent:.0}°F"),
            )
            .with_tip("Shorten the run and plan water stops"),
        );
    }

    let total_penalty: f64 = breakdown.iter().map(|part| part.points).sum();
    let score = score_from_penalty(total_penalty);

    debug!(
        score,
        total_penalty,
        activity = %activity,
        apparent_f = apparent,
        dew_point_f = dew_point,
        "Computed running score"
    );

    RunningScore {
        score,
        total_penalty,
        breakdown,
    }
}

/// Compute the running score from the legacy pair of activity flags
#[must_use]
pub fn compute_running_score_flags(
    weather: &WeatherSample,
    workout: bool,
    long_run: bool,
) -> RunningScore {
    compute_running_score(weather, ActivityKind::from_flags(workout, long_run))
}

/// Tone of a score label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTone {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// 40 to 59
    Fair,
    /// 20 to 39
    Poor,
    /// Below 20
    Danger,
}

/// Text label and tone for a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLabel {
    /// Short label
    pub text: String,
    /// Tone bucket
    pub tone: ScoreTone,
}

/// Label a score in buckets of ten
#[must_use]
pub fn score_label(score: u8) -> ScoreLabel {
    let (text, tone) = match score {
        90.. => ("Perfect", ScoreTone::Excellent),
        80..=89 => ("Excellent", ScoreTone::Excellent),
        70..=79 => ("Great", ScoreTone::Good),
        60..=69 => ("Good", ScoreTone::Good),
        50..=59 => ("Fair", ScoreTone::Fair),
        40..=49 => ("Mediocre", ScoreTone::Fair),
        30..=39 => ("Tough", ScoreTone::Poor),
        20..=29 => ("Poor", ScoreTone::Poor),
        10..=19 => ("Bad", ScoreTone::Danger),
        _ => ("Dangerous", ScoreTone::Danger),
    };
    ScoreLabel {
        text: text.to_owned(),
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dew_point_steps() {
        assert!((dew_point_penalty(45.0)).abs() < f64::EPSILON);
        assert!((dew_point_penalty(50.0) - 2.0).abs() < f64::EPSILON);
        assert!((dew_point_penalty(62.0) - 10.0).abs() < f64::EPSILON);
        assert!((dew_point_penalty(74.9) - 28.0).abs() < f64::EPSILON);
        assert!((dew_point_penalty(80.0) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_temperature_curve_is_asymmetric() {
        // 20 °F above and below the easy ideal
        let warm = temperature_penalty(70.0, ActivityKind::Easy);
        let cold = temperature_penalty(30.0, ActivityKind::Easy);
        assert!((cold - 28.0).abs() < 1e-9);
        assert!(warm > cold);
        // Saturates at the warm ceiling
        assert!((temperature_penalty(120.0, ActivityKind::Easy) - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_run_uv_replaces_base() {
        let long = uv_penalty(9.0, 75.0, ActivityKind::LongRun);
        let easy = uv_penalty(9.0, 75.0, ActivityKind::Easy);
        let workout = uv_penalty(9.0, 75.0, ActivityKind::Workout);
        assert!((long - 15.0).abs() < 1e-9);
        assert!((easy - 7.5).abs() < 1e-9);
        assert!((workout - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_from_penalty_caps() {
        assert_eq!(score_from_penalty(0.0), 100);
        assert_eq!(score_from_penalty(-5.0), 100);
        assert_eq!(score_from_penalty(98.4), 2);
        assert_eq!(score_from_penalty(99.0), 0);
        assert_eq!(score_from_penalty(250.0), 0);
    }

    #[test]
    fn test_cold_synergy_needs_wind() {
        assert!(cold_synergy(20.0, 5.0).abs() < f64::EPSILON);
        assert!((cold_synergy(20.0, 15.0) - 2.7).abs() < 1e-9);
    }

    #[test]
    fn test_synergy_parts_report_nominal_maxima() {
        let cold = compute_running_score(
            &WeatherSample::new(22.0, 20.0, 50.0, 15.0),
            ActivityKind::Easy,
        );
        let part = cold
            .breakdown
            .iter()
            .find(|part| part.key == ScoreFactor::ColdSynergy)
            .unwrap();
        assert!((part.max_points - COLD_SYNERGY_NOMINAL_MAX).abs() < f64::EPSILON);

        let hot = compute_running_score(
            &WeatherSample::new(95.0, 105.0, 70.0, 3.0),
            ActivityKind::Easy,
        );
        let part = hot
            .breakdown
            .iter()
            .find(|part| part.key == ScoreFactor::HeatSynergy)
            .unwrap();
        assert!((part.max_points - HEAT_SYNERGY_NOMINAL_MAX).abs() < f64::EPSILON);
    }

    #[test]
    fn test_labels() {
        assert_eq!(score_label(95).text, "Perfect");
        assert_eq!(score_label(90).text, "Perfect");
        assert_eq!(score_label(89).text, "Excellent");
        assert_eq!(score_label(41).tone, ScoreTone::Fair);
        assert_eq!(score_label(0).text, "Dangerous");
    }
}
