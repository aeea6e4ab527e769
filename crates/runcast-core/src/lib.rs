// ABOUTME: Core types for the runcast running-conditions engine
// ABOUTME: Foundation crate with weather samples, run profiles, gear catalog, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runcast Core
//!
//! Foundation crate providing the plain data model shared by the runcast
//! intelligence engines and the command-line boundary. This crate is designed
//! to change infrequently, enabling incremental compilation benefits in the
//! workspace.
//!
//! ## Modules
//!
//! - **models**: Weather samples, forecast points, run profiles, and the gear catalog
//! - **units**: Temperature and wind speed conversions

/// Core data models (`WeatherSample`, `RunProfile`, `GearKey`, etc.)
pub mod models;

/// Unit conversions between imperial and metric readings
pub mod units;

pub use models::{
    ActivityKind, ForecastPoint, GearItem, GearKey, Gender, ParseProfileError, RunProfile,
    TemperatureUnit, WeatherSample,
};
