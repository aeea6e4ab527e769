// ABOUTME: Color ramps for temperature and score display tints
// ABOUTME: Piecewise-linear interpolation between fixed RGB anchors, clamped at both ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Construct from channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` hex string
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        let channel = |a: u8, b: u8| -> u8 {
            (f64::from(b) - f64::from(a))
                .mul_add(t, f64::from(a))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

const TEMPERATURE_ANCHORS: [(f64, Rgb); 6] = [
    (0.0, Rgb::new(59, 130, 246)),
    (32.0, Rgb::new(96, 165, 250)),
    (50.0, Rgb::new(34, 197, 94)),
    (65.0, Rgb::new(234, 179, 8)),
    (80.0, Rgb::new(249, 115, 22)),
    (95.0, Rgb::new(239, 68, 68)),
];

const SCORE_ANCHORS: [(f64, Rgb); 5] = [
    (0.0, Rgb::new(239, 68, 68)),
    (40.0, Rgb::new(249, 115, 22)),
    (60.0, Rgb::new(234, 179, 8)),
    (80.0, Rgb::new(132, 204, 22)),
    (100.0, Rgb::new(34, 197, 94)),
];

fn interpolate(anchors: &[(f64, Rgb)], value: f64) -> Rgb {
    let Some(&(first_at, first)) = anchors.first() else {
        return Rgb::new(0, 0, 0);
    };
    if value.is_nan() || value <= first_at {
        return first;
    }
    for pair in anchors.windows(2) {
        let (lo_at, lo) = pair[0];
        let (hi_at, hi) = pair[1];
        if value <= hi_at {
            return lo.lerp(hi, (value - lo_at) / (hi_at - lo_at));
        }
    }
    anchors.last().map_or(first, |&(_, last)| last)
}

/// Display tint for an apparent temperature (°F), cold blue through hot red
#[must_use]
pub fn score_tone(apparent_f: f64) -> Rgb {
    interpolate(&TEMPERATURE_ANCHORS, apparent_f)
}

/// Display tint for a 0-100 score, red through green
#[must_use]
pub fn score_based_tone(score: u8) -> Rgb {
    interpolate(&SCORE_ANCHORS, f64::from(score))
}
