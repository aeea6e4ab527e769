// ABOUTME: Core data models for the runcast engine
// ABOUTME: Re-exports weather, profile, and gear catalog types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the plain data structures consumed and produced by the
//! runcast engines. Every evaluation builds these fresh from its inputs; none
//! of them carry long-lived state.
//!
//! ## Core Models
//!
//! - `WeatherSample`: One immutable weather reading (current or hourly)
//! - `ForecastPoint`: A near-future point used for long-run look-ahead
//! - `RunProfile`: Activity kind, gender, and temperature sensitivity
//! - `GearKey` / `GearItem`: The fixed gear catalog and its display form

mod gear;
mod profile;
mod weather;

pub use gear::{GearItem, GearKey};
pub use profile::{ActivityKind, Gender, ParseProfileError, RunProfile, TemperatureUnit};
pub use weather::{ForecastPoint, WeatherSample};
