// ABOUTME: Command handlers for runcast-cli, one per subcommand
// ABOUTME: Loads inputs, calls the intelligence facade, and hands results to the JSON printer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{print_json, TemperatureDisplay};
use runcast::core::{ForecastPoint, RunProfile, WeatherSample};
use runcast::errors::AppResult;
use runcast::input::{load_json, load_optional_json};
use runcast::intelligence::conditions::{
    best_run_hour, evaluate_conditions, evaluate_dew_point, evaluate_heat_stress,
    evaluate_hourly, evaluate_outfit, evaluate_score, ConditionsReport, DewPointEvaluation,
    HeatStressEvaluation, HeatStressExtras,
};
use runcast::intelligence::running_score::{score_label, RunningScore, ScoreLabel};
use runcast::intelligence::tone::score_based_tone;
use serde::Serialize;
use tracing::info;

/// Readings for the heat-stress command
pub struct HeatStressArgs {
    pub temp: f64,
    pub humidity: f64,
    pub wind: f64,
    pub pressure: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub cloud_cover: Option<f64>,
}

#[derive(Serialize)]
struct DewPointOutput {
    temperature_f: f64,
    humidity: f64,
    #[serde(flatten)]
    evaluation: DewPointEvaluation,
    display: TemperatureDisplay,
}

#[derive(Serialize)]
struct HeatStressOutput {
    #[serde(flatten)]
    evaluation: HeatStressEvaluation,
    display: TemperatureDisplay,
}

#[derive(Serialize)]
struct ScoreOutput {
    #[serde(flatten)]
    score: RunningScore,
    label: ScoreLabel,
    tone: String,
}

#[derive(Serialize)]
struct HourlyOutput {
    best_hour: Option<usize>,
    reports: Vec<ConditionsReport>,
}

pub fn dew_point(temp: f64, humidity: f64, profile: &RunProfile) -> AppResult<()> {
    let evaluation = evaluate_dew_point(temp, humidity);
    let display = TemperatureDisplay::new(profile.temperature_unit)
        .with("temperature", temp)
        .with("dew_point", evaluation.dew_point_f);
    print_json(&DewPointOutput {
        temperature_f: temp,
        humidity,
        evaluation,
        display,
    })
}

pub fn heat_stress(args: &HeatStressArgs, profile: &RunProfile) -> AppResult<()> {
    let extras = HeatStressExtras {
        pressure_hpa: args.pressure,
        solar_radiation_wm2: args.solar_radiation,
        cloud_cover: args.cloud_cover,
    };
    let evaluation = evaluate_heat_stress(
        args.temp,
        args.humidity,
        args.wind,
        profile.activity,
        extras,
    );
    let display = TemperatureDisplay::new(profile.temperature_unit)
        .with("wbgt", evaluation.wbgt_f)
        .with("heat_index", evaluation.heat_index_f);
    print_json(&HeatStressOutput {
        evaluation,
        display,
    })
}

pub fn score(input: &str, profile: &RunProfile) -> AppResult<()> {
    let sample: WeatherSample = load_json(input)?;
    let score = evaluate_score(&sample, profile.activity);
    let label = score_label(score.score);
    let tone = score_based_tone(score.score).to_hex();
    print_json(&ScoreOutput { score, label, tone })
}

pub fn outfit(input: &str, forecast: Option<&str>, profile: &RunProfile) -> AppResult<()> {
    let sample: WeatherSample = load_json(input)?;
    let forecast: Option<Vec<ForecastPoint>> = load_optional_json(forecast)?;
    print_json(&evaluate_outfit(&sample, profile, forecast.as_deref()))
}

pub fn report(input: &str, forecast: Option<&str>, profile: &RunProfile) -> AppResult<()> {
    let sample: WeatherSample = load_json(input)?;
    let forecast: Option<Vec<ForecastPoint>> = load_optional_json(forecast)?;
    print_json(&evaluate_conditions(&sample, profile, forecast.as_deref()))
}

pub fn hourly(input: &str, profile: &RunProfile) -> AppResult<()> {
    let samples: Vec<WeatherSample> = load_json(input)?;
    let reports = evaluate_hourly(&samples, profile);
    let best_hour = best_run_hour(&reports);
    if let Some((index, best)) = best_hour.and_then(|index| Some((index, reports.get(index)?))) {
        info!(hour = index, score = best.score.score, "Best hour to run");
    }
    print_json(&HourlyOutput { best_hour, reports })
}
