// ABOUTME: Running-conditions intelligence crate: dew point, heat stress, scoring, and outfit selection
// ABOUTME: Pure, synchronous decision engines over runcast-core weather samples and run profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runcast Intelligence
//!
//! Decision engines that turn a weather reading and a runner profile into
//! guidance. None of them perform I/O, read configuration, or fail: out of
//! range readings flow through the arithmetic and produce numerically defined
//! results.
//!
//! ## Modules
//!
//! - **`dew_point`**: Magnus dew point and comfort tiers
//! - **`heat_stress`**: WBGT estimate, heat index, wind chill, and risk flags
//! - **`running_score`**: 0-100 score with an explainable breakdown
//! - **tone**: Display tints for temperatures and scores
//! - **outfit**: Performance and comfort gear lists
//! - **conditions**: Facade bundling all engines, plus hourly evaluation

/// Physiological and meteorological constants
pub mod physiological_constants;

/// Dew point calculation and comfort classification
pub mod dew_point;

/// Heat stress indices and risk assessment
pub mod heat_stress;

/// Running condition score
pub mod running_score;

/// Display color ramps
pub mod tone;

/// Outfit selection pipeline
pub mod outfit;

/// Facade over all engines
pub mod conditions;

pub use conditions::{
    best_run_hour, evaluate_conditions, evaluate_dew_point, evaluate_heat_stress,
    evaluate_hourly, evaluate_outfit, evaluate_score, ConditionsReport, DewPointEvaluation,
    HeatStressEvaluation, HeatStressExtras,
};
pub use outfit::{select_outfit, OutfitResult};
pub use running_score::{compute_running_score, RunningScore};
