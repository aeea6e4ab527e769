// ABOUTME: Criterion benchmarks for the running-conditions engines
// ABOUTME: Measures scoring, outfit selection, and parallel hourly evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the running-conditions engines.
//!
//! Measures single-sample scoring and outfit selection across a spread of
//! conditions, and hourly evaluation over multi-day series.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use runcast::core::{ActivityKind, ForecastPoint, RunProfile, WeatherSample};
use runcast::intelligence::{compute_running_score, evaluate_hourly, select_outfit};
use std::f64::consts::TAU;

/// Representative conditions from deep winter to midsummer
fn condition_spread() -> Vec<(&'static str, WeatherSample)> {
    vec![
        ("frigid", WeatherSample::new(5.0, -8.0, 70.0, 18.0)),
        ("cold_rain", WeatherSample::new(38.0, 33.0, 90.0, 10.0).with_precipitation(80.0, 0.2)),
        ("mild", WeatherSample::new(55.0, 55.0, 50.0, 5.0).with_uv_index(4.0)),
        ("hot_humid", WeatherSample::new(88.0, 96.0, 70.0, 4.0).with_uv_index(10.0)),
    ]
}

/// Hourly series with a daily temperature swing
#[allow(clippy::cast_precision_loss)]
fn hourly_series(hours: usize) -> Vec<WeatherSample> {
    let start = Utc
        .with_ymd_and_hms(2025, 4, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    (0..hours)
        .map(|index| {
            let phase = (index % 24) as f64 / 24.0 * TAU;
            let temp = 20.0f64.mul_add(-phase.cos(), 55.0);
            let offset = Duration::hours(i64::try_from(index).unwrap_or_default());
            WeatherSample::new(temp, temp - 2.0, 60.0, 8.0)
                .with_uv_index((phase.sin() * 8.0).max(0.0))
                .at(start + offset)
        })
        .collect()
}

fn bench_running_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_score");

    for (name, sample) in condition_spread() {
        group.bench_with_input(BenchmarkId::new("compute", name), &sample, |b, sample| {
            b.iter(|| compute_running_score(black_box(sample), black_box(ActivityKind::Workout)));
        });
    }

    group.finish();
}

fn bench_outfit_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("outfit");
    let profile = RunProfile::for_activity(ActivityKind::LongRun).with_cold_hands(true);
    let forecast = [
        ForecastPoint::new(50.0).with_precipitation(60.0, 0.1),
        ForecastPoint::new(58.0).with_uv_index(7.0),
    ];

    for (name, sample) in condition_spread() {
        group.bench_with_input(BenchmarkId::new("select", name), &sample, |b, sample| {
            b.iter(|| select_outfit(black_box(sample), black_box(&profile), black_box(&forecast)));
        });
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_hourly_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("hourly");
    let profile = RunProfile::default();

    for days in [1, 7, 16] {
        let series = hourly_series(days * 24);
        group.throughput(Throughput::Elements(series.len() as u64));
        group.bench_with_input(BenchmarkId::new("evaluate", days), &series, |b, series| {
            b.iter(|| evaluate_hourly(black_box(series), black_box(&profile)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_running_score,
    bench_outfit_selection,
    bench_hourly_evaluation,
);
criterion_main!(benches);
