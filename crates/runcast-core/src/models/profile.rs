// ABOUTME: Run profile model passed explicitly into every engine call
// ABOUTME: Defines activity kind, gender, cold-hands flag, temperature sensitivity, and display unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a profile field cannot be parsed from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} value: {value}")]
pub struct ParseProfileError {
    /// Name of the profile field being parsed
    pub field: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseProfileError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}

/// Kind of run being planned
///
/// Harder efforts run hotter, so workouts and long runs shift the ideal
/// temperature and heat-risk thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Intervals, tempo, or race-pace session
    Workout,
    /// Extended duration run
    LongRun,
    /// Easy or recovery run
    #[default]
    Easy,
}

impl ActivityKind {
    /// Map the legacy pair of activity flags onto a single kind
    ///
    /// The workout flag wins when both are set.
    #[must_use]
    pub const fn from_flags(workout: bool, long_run: bool) -> Self {
        if workout {
            Self::Workout
        } else if long_run {
            Self::LongRun
        } else {
            Self::Easy
        }
    }

    /// Whether this is a workout
    #[must_use]
    pub const fn is_workout(self) -> bool {
        matches!(self, Self::Workout)
    }

    /// Whether this is a long run
    #[must_use]
    pub const fn is_long_run(self) -> bool {
        matches!(self, Self::LongRun)
    }

    /// Stable identifier used in configuration and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::LongRun => "long_run",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "workout" => Ok(Self::Workout),
            "long_run" | "long" => Ok(Self::LongRun),
            "easy" | "recovery" => Ok(Self::Easy),
            _ => Err(ParseProfileError::new("activity", s)),
        }
    }
}

/// Runner gender, used for base-layer and glove defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female runner
    Female,
    /// Male runner
    Male,
    /// Not specified; uses the unisex defaults
    #[default]
    Unspecified,
}

impl Gender {
    /// Whether this is the female profile
    #[must_use]
    pub const fn is_female(self) -> bool {
        matches!(self, Self::Female)
    }
}

impl FromStr for Gender {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" | "woman" => Ok(Self::Female),
            "male" | "m" | "man" => Ok(Self::Male),
            "unspecified" | "other" | "" => Ok(Self::Unspecified),
            _ => Err(ParseProfileError::new("gender", s)),
        }
    }
}

/// Unit used when temperatures are shown to the runner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
    /// Degrees Celsius
    Celsius,
}

impl TemperatureUnit {
    /// Display suffix for this unit
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "fahrenheit" | "imperial" => Ok(Self::Fahrenheit),
            "c" | "celsius" | "metric" => Ok(Self::Celsius),
            _ => Err(ParseProfileError::new("unit", s)),
        }
    }
}

/// Per-runner settings supplied with every evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunProfile {
    /// Kind of run being planned
    pub activity: ActivityKind,
    /// Runner gender
    pub gender: Gender,
    /// Runner reports hands that get cold easily
    pub cold_hands: bool,
    /// Continuous temperature-sensitivity offset (negative runs cold, positive runs warm)
    pub temp_sensitivity: f64,
    /// Display unit for temperatures
    pub temperature_unit: TemperatureUnit,
}

impl RunProfile {
    /// Profile for the given activity with all other settings at their defaults
    #[must_use]
    pub fn for_activity(activity: ActivityKind) -> Self {
        Self {
            activity,
            ..Self::default()
        }
    }

    /// Set the runner gender
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the cold-hands flag
    #[must_use]
    pub fn with_cold_hands(mut self, cold_hands: bool) -> Self {
        self.cold_hands = cold_hands;
        self
    }

    /// Set the temperature sensitivity offset
    #[must_use]
    pub fn with_temp_sensitivity(mut self, temp_sensitivity: f64) -> Self {
        self.temp_sensitivity = temp_sensitivity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_prefers_workout() {
        assert_eq!(ActivityKind::from_flags(true, true), ActivityKind::Workout);
        assert_eq!(ActivityKind::from_flags(false, true), ActivityKind::LongRun);
        assert_eq!(ActivityKind::from_flags(false, false), ActivityKind::Easy);
    }

    #[test]
    fn test_parse_profile_fields() {
        assert_eq!("long-run".parse::<ActivityKind>(), Ok(ActivityKind::LongRun));
        assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("metric".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));

        let err = "sprint".parse::<ActivityKind>().unwrap_err();
        assert_eq!(err.field, "activity");
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let profile: RunProfile = serde_json::from_str(r#"{"cold_hands": true}"#).unwrap();
        assert!(profile.cold_hands);
        assert_eq!(profile.activity, ActivityKind::Easy);
        assert_eq!(profile.gender, Gender::Unspecified);
    }
}
