// ABOUTME: Integration tests for loading runner defaults from RUNCAST_* environment variables
// ABOUTME: Mutates the process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runcast::config::environment::env_keys;
use runcast::config::{ConfigError, ProfileOverrides, RuncastConfig};
use runcast::core::{ActivityKind, Gender, TemperatureUnit};
use runcast::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

fn clear_runcast_env() {
    for key in env_keys::ALL {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_runcast_env();
    let config = RuncastConfig::from_env().unwrap();
    assert_eq!(config, RuncastConfig::default());
    let profile = config.to_profile();
    assert_eq!(profile.activity, ActivityKind::Easy);
    assert!(!profile.cold_hands);
}

#[test]
#[serial]
fn test_environment_builds_profile() {
    clear_runcast_env();
    env::set_var(env_keys::ACTIVITY, "workout");
    env::set_var(env_keys::GENDER, "female");
    env::set_var(env_keys::COLD_HANDS, "1");
    env::set_var(env_keys::TEMP_SENSITIVITY, "2");
    env::set_var(env_keys::UNIT, "metric");

    let profile = RuncastConfig::from_env().unwrap().to_profile();
    clear_runcast_env();

    assert_eq!(profile.activity, ActivityKind::Workout);
    assert_eq!(profile.gender, Gender::Female);
    assert!(profile.cold_hands);
    assert!((profile.temp_sensitivity - 2.0).abs() < f64::EPSILON);
    assert_eq!(profile.temperature_unit, TemperatureUnit::Celsius);
}

#[test]
#[serial]
fn test_out_of_range_sensitivity_is_rejected() {
    clear_runcast_env();
    env::set_var(env_keys::TEMP_SENSITIVITY, "3.5");
    let result = RuncastConfig::from_env();
    clear_runcast_env();

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert_eq!(app_error.exit_code(), 3);
}

#[test]
#[serial]
fn test_unparsable_value_names_variable() {
    clear_runcast_env();
    env::set_var(env_keys::GENDER, "robot");
    let result = RuncastConfig::from_env();
    clear_runcast_env();

    let message = result.unwrap_err().to_string();
    assert!(message.contains("RUNCAST_GENDER"), "message was {message}");
}

#[test]
#[serial]
fn test_flags_override_environment() {
    clear_runcast_env();
    env::set_var(env_keys::ACTIVITY, "long_run");
    let config = RuncastConfig::from_env()
        .unwrap()
        .with_overrides(ProfileOverrides {
            activity: Some(ActivityKind::Easy),
            temperature_unit: Some(TemperatureUnit::Celsius),
            ..ProfileOverrides::default()
        })
        .unwrap();
    clear_runcast_env();

    assert_eq!(config.activity, ActivityKind::Easy);
    assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
}
