// ABOUTME: Configuration module for runner defaults loaded from the environment
// ABOUTME: Exposes the environment loader and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the runcast boundary
//!
//! The engines never read configuration. The CLI loads a [`RuncastConfig`]
//! once, turns it into a `RunProfile`, and lets command-line flags override
//! individual fields.

/// Environment-driven runner defaults
pub mod environment;

/// Configuration error types
pub mod error;

pub use environment::{ProfileOverrides, RuncastConfig};
pub use error::ConfigError;
