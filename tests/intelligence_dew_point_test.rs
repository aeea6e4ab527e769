// ABOUTME: Integration tests for dew point calculation and comfort classification
// ABOUTME: Covers the Magnus anchor value, monotonicity in humidity, and facade output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runcast::intelligence::dew_point::{dew_point_comfort_level, dew_point_f, DewPointTier};
use runcast::intelligence::evaluate_dew_point;

#[test]
fn test_anchor_value() {
    let dp = dew_point_f(75.0, 60.0);
    assert!((dp - 60.3).abs() <= 0.2, "dew point was {dp}");
}

#[test]
fn test_strictly_increasing_in_humidity() {
    for temp in [20.0, 50.0, 75.0, 95.0] {
        let mut previous = f64::NEG_INFINITY;
        for rh in (5..=100).step_by(5) {
            let dp = dew_point_f(temp, f64::from(rh));
            assert!(dp > previous, "dew point not increasing at {temp}°F {rh}%");
            previous = dp;
        }
    }
}

#[test]
fn test_never_exceeds_air_temperature() {
    for rh in [10.0, 40.0, 70.0, 100.0] {
        assert!(dew_point_f(68.0, rh) <= 68.0 + 1e-9);
    }
}

#[test]
fn test_comfort_tiers_follow_dew_point() {
    assert_eq!(dew_point_comfort_level(45.0).tier, DewPointTier::Dry);
    assert_eq!(dew_point_comfort_level(62.0).tier, DewPointTier::Moderate);
    assert_eq!(dew_point_comfort_level(78.0).tier, DewPointTier::Oppressive);
}

#[test]
fn test_facade_bundles_comfort() {
    let evaluation = evaluate_dew_point(75.0, 60.0);
    assert_eq!(evaluation.comfort.tier, DewPointTier::Moderate);
    assert!(evaluation.comfort.color.starts_with('#'));
    assert!(!evaluation.comfort.label.is_empty());
}
