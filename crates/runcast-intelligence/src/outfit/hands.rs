// ABOUTME: Glove and mitten level from temperature and wind triggers with a cold-hands profile
// ABOUTME: The level only depends on the current inputs and never decreases as conditions get colder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hand protection
//!
//! Two independent triggers each propose a level and the warmer protection
//! (higher level) wins. The temperature trigger uses a more generous table
//! for runners who flag cold hands, and both triggers compare against a
//! temperature lowered for cold hands and for female runners.

use super::gear_set::GearSet;
use runcast_core::{GearKey, RunProfile};
use serde::{Deserialize, Serialize};

/// Degrees subtracted from the comparison temperature for cold hands
const COLD_HANDS_OFFSET_F: f64 = 3.0;
/// Degrees subtracted from the comparison temperature for female runners
const FEMALE_OFFSET_F: f64 = 2.0;

/// Temperature bounds (°F, inclusive) for light, medium, mittens, mittens + liner
const STANDARD_BOUNDS_F: [f64; 4] = [45.0, 35.0, 20.0, 5.0];
const COLD_HANDS_BOUNDS_F: [f64; 4] = [52.0, 42.0, 28.0, 12.0];

/// Hand protection level, ordered from none to warmest
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HandsLevel {
    /// Bare hands
    #[default]
    None = 0,
    /// Light gloves
    LightGloves = 1,
    /// Midweight gloves
    MediumGloves = 2,
    /// Mittens
    Mittens = 3,
    /// Mittens over a liner glove
    MittensLiner = 4,
}

impl HandsLevel {
    /// Numeric level 0..=4
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Gear keys that make up this level in the unified outfit
    #[must_use]
    pub const fn items(self) -> &'static [GearKey] {
        match self {
            Self::None => &[],
            Self::LightGloves => &[GearKey::LightGloves],
            Self::MediumGloves => &[GearKey::MediumGloves],
            Self::Mittens => &[GearKey::Mittens],
            Self::MittensLiner => &[GearKey::Mittens, GearKey::MittensLiner],
        }
    }

    /// Level a single hand item represents
    #[must_use]
    pub const fn of_key(key: GearKey) -> Self {
        match key {
            GearKey::LightGloves => Self::LightGloves,
            GearKey::MediumGloves => Self::MediumGloves,
            GearKey::Mittens => Self::Mittens,
            GearKey::MittensLiner => Self::MittensLiner,
            _ => Self::None,
        }
    }
}

/// Outcome of the hand triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandsDecision {
    /// Chosen level
    pub level: HandsLevel,
    /// The cold-hands profile raised the level above the standard choice
    pub raised_by_cold_hands: bool,
}

/// Temperature the hand triggers compare against (°F)
#[must_use]
pub fn hands_comparison_f(effective_f: f64, profile: &RunProfile) -> f64 {
    let mut g = effective_f;
    if profile.cold_hands {
        g -= COLD_HANDS_OFFSET_F;
    }
    if profile.gender.is_female() {
        g -= FEMALE_OFFSET_F;
    }
    g
}

fn temperature_trigger(g: f64, cold_hands: bool) -> HandsLevel {
    let [light, medium, mittens, liner] = if cold_hands {
        COLD_HANDS_BOUNDS_F
    } else {
        STANDARD_BOUNDS_F
    };
    if g <= liner {
        HandsLevel::MittensLiner
    } else if g <= mittens {
        HandsLevel::Mittens
    } else if g <= medium {
        HandsLevel::MediumGloves
    } else if g <= light {
        HandsLevel::LightGloves
    } else {
        HandsLevel::None
    }
}

fn wind_trigger(g: f64, wind_mph: f64) -> HandsLevel {
    if g <= 32.0 && wind_mph >= 20.0 {
        HandsLevel::Mittens
    } else if g <= 45.0 && wind_mph >= 15.0 {
        HandsLevel::MediumGloves
    } else if g <= 55.0 && wind_mph >= 10.0 {
        HandsLevel::LightGloves
    } else {
        HandsLevel::None
    }
}

fn level_for(g: f64, wind_mph: f64, cold_hands: bool) -> HandsLevel {
    temperature_trigger(g, cold_hands).max(wind_trigger(g, wind_mph))
}

/// Decide the hand protection level for an effective temperature and wind
#[must_use]
pub fn decide_hands(effective_f: f64, wind_mph: f64, profile: &RunProfile) -> HandsDecision {
    let level = level_for(hands_comparison_f(effective_f, profile), wind_mph, profile.cold_hands);
    let raised_by_cold_hands = profile.cold_hands && {
        let standard = profile.clone().with_cold_hands(false);
        level > level_for(hands_comparison_f(effective_f, &standard), wind_mph, false)
    };
    HandsDecision {
        level,
        raised_by_cold_hands,
    }
}

/// Replace every hand item in the set with the items for `level`
#[must_use]
pub fn apply_hands_level(gear: GearSet, level: HandsLevel) -> GearSet {
    gear.without_all(&GearKey::HAND_ITEMS).with_all(level.items())
}

/// Highest hand protection level present among the keys
pub fn hands_level_from_gear<I>(keys: I) -> HandsLevel
where
    I: IntoIterator<Item = GearKey>,
{
    keys.into_iter()
        .map(HandsLevel::of_key)
        .max()
        .unwrap_or_default()
}
