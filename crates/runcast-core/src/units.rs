// ABOUTME: Unit conversion helpers for temperature readings
// ABOUTME: Converts between Fahrenheit and Celsius and formats readings in the display unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit conversions used at the data boundary.
//!
//! The engines work exclusively in °F; the display unit only changes how
//! temperatures are rendered.

use crate::models::TemperatureUnit;

/// Convert Fahrenheit to Celsius
#[must_use]
pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + 32.0
}

/// Express a Fahrenheit reading in the requested display unit
#[must_use]
pub fn display_temperature(temp_f: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => temp_f,
        TemperatureUnit::Celsius => fahrenheit_to_celsius(temp_f),
    }
}

/// Format a Fahrenheit reading for display, rounded to whole degrees
#[must_use]
pub fn format_temperature(temp_f: f64, unit: TemperatureUnit) -> String {
    let value = display_temperature(temp_f, unit).round();
    format!("{value}{}", unit.symbol())
}
