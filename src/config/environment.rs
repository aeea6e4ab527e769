// ABOUTME: Environment configuration for the default runner profile
// ABOUTME: Reads RUNCAST_* variables through pure parse helpers that are testable without the process env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based runner defaults
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `RUNCAST_ACTIVITY` | `workout`, `long_run`, or `easy` | `easy` |
//! | `RUNCAST_GENDER` | `female`, `male`, or `unspecified` | `unspecified` |
//! | `RUNCAST_COLD_HANDS` | boolean | `false` |
//! | `RUNCAST_TEMP_SENSITIVITY` | number in −3..=3 | `0` |
//! | `RUNCAST_UNIT` | `fahrenheit` or `celsius` | `fahrenheit` |

use super::error::ConfigError;
use runcast_core::{ActivityKind, Gender, RunProfile, TemperatureUnit};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Environment variable names
pub mod env_keys {
    /// Default kind of run
    pub const ACTIVITY: &str = "RUNCAST_ACTIVITY";
    /// Runner gender
    pub const GENDER: &str = "RUNCAST_GENDER";
    /// Cold-hands flag
    pub const COLD_HANDS: &str = "RUNCAST_COLD_HANDS";
    /// Temperature sensitivity offset
    pub const TEMP_SENSITIVITY: &str = "RUNCAST_TEMP_SENSITIVITY";
    /// Display temperature unit
    pub const UNIT: &str = "RUNCAST_UNIT";

    /// Every variable read by the loader
    pub const ALL: [&str; 5] = [ACTIVITY, GENDER, COLD_HANDS, TEMP_SENSITIVITY, UNIT];
}

/// Accepted range for the temperature sensitivity offset
pub const TEMP_SENSITIVITY_RANGE: (f64, f64) = (-3.0, 3.0);

/// Runner defaults loaded from the environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuncastConfig {
    /// Default kind of run
    pub activity: ActivityKind,
    /// Runner gender
    pub gender: Gender,
    /// Runner reports cold hands
    pub cold_hands: bool,
    /// Temperature sensitivity offset (negative runs cold, positive runs warm)
    pub temp_sensitivity: f64,
    /// Display unit
    pub temperature_unit: TemperatureUnit,
}

impl RuncastConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not unicode, cannot be
    /// parsed, or is outside its accepted range
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(error) => Err(ConfigError::EnvVar(error)),
        })?;
        debug!(?config, "Loaded runner defaults from environment");
        Ok(config)
    }

    /// Load configuration through a key lookup
    ///
    /// Unset and blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = Self::default();
        apply_var(&lookup, env_keys::ACTIVITY, &mut config.activity, parse_enum)?;
        apply_var(&lookup, env_keys::GENDER, &mut config.gender, parse_enum)?;
        apply_var(&lookup, env_keys::COLD_HANDS, &mut config.cold_hands, parse_bool)?;
        apply_var(
            &lookup,
            env_keys::TEMP_SENSITIVITY,
            &mut config.temp_sensitivity,
            parse_temp_sensitivity,
        )?;
        apply_var(&lookup, env_keys::UNIT, &mut config.temperature_unit, parse_enum)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate loaded values
    ///
    /// # Errors
    ///
    /// Returns an error if the temperature sensitivity is outside −3..=3
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = TEMP_SENSITIVITY_RANGE;
        if !(min..=max).contains(&self.temp_sensitivity) {
            return Err(ConfigError::ValueOutOfRange(
                "RUNCAST_TEMP_SENSITIVITY must lie between -3 and 3",
            ));
        }
        Ok(())
    }

    /// Runner profile described by this configuration
    #[must_use]
    pub fn to_profile(&self) -> RunProfile {
        RunProfile {
            activity: self.activity,
            gender: self.gender,
            cold_hands: self.cold_hands,
            temp_sensitivity: self.temp_sensitivity,
            temperature_unit: self.temperature_unit,
        }
    }
}

/// Per-invocation overrides layered over the environment defaults
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileOverrides {
    /// Kind of run
    pub activity: Option<ActivityKind>,
    /// Runner gender
    pub gender: Option<Gender>,
    /// Force the cold-hands flag on
    pub cold_hands: bool,
    /// Temperature sensitivity offset
    pub temp_sensitivity: Option<f64>,
    /// Display unit
    pub temperature_unit: Option<TemperatureUnit>,
}

impl RuncastConfig {
    /// Apply overrides and re-validate
    ///
    /// # Errors
    ///
    /// Returns an error if an overridden sensitivity is outside −3..=3
    pub fn with_overrides(mut self, overrides: ProfileOverrides) -> Result<Self, ConfigError> {
        if let Some(activity) = overrides.activity {
            self.activity = activity;
        }
        if let Some(gender) = overrides.gender {
            self.gender = gender;
        }
        self.cold_hands |= overrides.cold_hands;
        if let Some(sensitivity) = overrides.temp_sensitivity {
            self.temp_sensitivity = sensitivity;
        }
        if let Some(unit) = overrides.temperature_unit {
            self.temperature_unit = unit;
        }
        self.validate()?;
        Ok(self)
    }
}

fn apply_var<F, T>(
    lookup: &F,
    key: &'static str,
    target: &mut T,
    parse: fn(&'static str, &str) -> Result<T, ConfigError>,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    if let Some(value) = lookup(key)? {
        if !value.trim().is_empty() {
            *target = parse(key, &value)?;
        }
    }
    Ok(())
}

/// Parse any profile enum through its `FromStr` implementation
///
/// # Errors
///
/// Returns `ConfigError::Parse` naming the variable and the rejected value
pub fn parse_enum<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|error| ConfigError::Parse(format!("{key}: {error}")))
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`)
///
/// # Errors
///
/// Returns `ConfigError::Parse` for any other value
pub fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Parse(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}

/// Parse the temperature sensitivity offset
///
/// # Errors
///
/// Returns `ConfigError::Parse` for non-numeric input and
/// `ConfigError::ValueOutOfRange` outside −3..=3
pub fn parse_temp_sensitivity(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|error| ConfigError::Parse(format!("{key}: {error}")))?;
    let (min, max) = TEMP_SENSITIVITY_RANGE;
    if (min..=max).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ConfigError::ValueOutOfRange(
            "RUNCAST_TEMP_SENSITIVITY must lie between -3 and 3",
        ))
    }
}
