// ABOUTME: Main library entry point for runcast, the weather-to-running-decisions toolkit
// ABOUTME: Re-exports the engines and provides configuration, logging, errors, and input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runcast
//!
//! Turns a weather reading and a runner profile into running guidance: dew
//! point comfort, heat stress risk, a 0-100 running score, and what to wear.
//!
//! ## Architecture
//!
//! - **`runcast_core`**: weather samples, forecast points, profiles, and gear
//! - **`runcast_intelligence`**: the pure decision engines and their facade
//! - **config**: runner defaults from `RUNCAST_*` environment variables
//! - **logging**: tracing subscriber setup
//! - **errors**: the boundary error type used by the CLI
//! - **input**: JSON loading from files or stdin
//!
//! ## Example Usage
//!
//! ```rust
//! use runcast::core::{ActivityKind, RunProfile, WeatherSample};
//! use runcast::intelligence::evaluate_conditions;
//!
//! let sample = WeatherSample::new(52.0, 50.0, 45.0, 4.0);
//! let profile = RunProfile::for_activity(ActivityKind::Easy);
//! let report = evaluate_conditions(&sample, &profile, None);
//! assert!(report.score.score > 90);
//! ```

/// Environment configuration for runner defaults
pub mod config;

/// Boundary error types
pub mod errors;

/// JSON input loading
pub mod input;

/// Structured logging setup
pub mod logging;

pub use runcast_core as core;
pub use runcast_intelligence as intelligence;
