// ABOUTME: JSON input loading for CLI commands from files or standard input
// ABOUTME: Maps read and parse failures into AppError with the offending source named
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Source name that selects standard input
pub const STDIN_SOURCE: &str = "-";

/// Read a JSON value from a file path, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns `InvalidInput` if the source cannot be read and `InvalidFormat`
/// if its contents are not the expected JSON shape
pub fn load_json<T: DeserializeOwned>(source: &str) -> AppResult<T> {
    if source == STDIN_SOURCE {
        return load_json_from_reader(io::stdin().lock(), "stdin");
    }

    let path = Path::new(source);
    let contents = fs::read_to_string(path).map_err(|error| {
        AppError::invalid_input(format!("cannot read {}: {error}", path.display()))
            .with_source(error)
    })?;
    debug!(source, bytes = contents.len(), "Loaded input file");
    parse_json(&contents, source)
}

/// Read a JSON value from any reader
///
/// # Errors
///
/// Returns `InvalidInput` on read failure and `InvalidFormat` on bad JSON
pub fn load_json_from_reader<T, R>(mut reader: R, label: &str) -> AppResult<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(|error| {
        AppError::invalid_input(format!("cannot read {label}: {error}")).with_source(error)
    })?;
    parse_json(&contents, label)
}

/// Load an optional JSON source
///
/// # Errors
///
/// Propagates the errors of [`load_json`]
pub fn load_optional_json<T: DeserializeOwned>(source: Option<&str>) -> AppResult<Option<T>> {
    source.map(load_json).transpose()
}

fn parse_json<T: DeserializeOwned>(contents: &str, label: &str) -> AppResult<T> {
    serde_json::from_str(contents).map_err(|error| {
        let mut app_error = AppError::from(error);
        app_error.message = format!("{label}: {}", app_error.message);
        app_error
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use runcast_core::ForecastPoint;

    #[test]
    fn test_reader_parses_forecast() {
        let json = r#"[{"apparent_temperature_f": 41.0, "precip_probability": 60.0}]"#;
        let points: Vec<ForecastPoint> = load_json_from_reader(json.as_bytes(), "test").unwrap();
        assert_eq!(points.len(), 1);
        assert!((points[0].precip_probability - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bad_json_names_source() {
        let error = load_json_from_reader::<Vec<ForecastPoint>, _>(&b"[{"[..], "forecast.json")
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert!(error.message.starts_with("forecast.json:"));
    }

    #[test]
    fn test_absent_optional_source() {
        let loaded: Option<Vec<ForecastPoint>> = load_optional_json(None).unwrap();
        assert!(loaded.is_none());
    }
}
