// ABOUTME: Output formatting helpers for runcast-cli
// ABOUTME: Writes pretty JSON to stdout and formats temperatures in the runner's display unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runcast::core::units::format_temperature;
use runcast::core::TemperatureUnit;
use runcast::errors::AppResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Temperatures formatted for display, keyed by field name
#[derive(Serialize)]
pub struct TemperatureDisplay {
    unit: TemperatureUnit,
    #[serde(flatten)]
    values: BTreeMap<&'static str, String>,
}

impl TemperatureDisplay {
    #[must_use]
    pub const fn new(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            values: BTreeMap::new(),
        }
    }

    /// Add a Fahrenheit reading under `name`
    #[must_use]
    pub fn with(mut self, name: &'static str, temp_f: f64) -> Self {
        self.values.insert(name, format_temperature(temp_f, self.unit));
        self
    }
}

/// Print a value to stdout as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
