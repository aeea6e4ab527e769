// ABOUTME: Performance and comfort variants of the unified outfit, exclusive-group resolution, and display ordering
// ABOUTME: Each variant is derived from the same unified set and sorted by its own priority table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::gear_set::GearSet;
use super::modifiers::ArmSleeves;
use super::OutfitContext;
use runcast_core::{GearItem, GearKey};

/// Keys of which at most one may appear in a final list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusiveGroup {
    /// Group name
    pub name: &'static str,
    /// Members in precedence order; the first present member wins
    pub members: &'static [GearKey],
}

/// Exclusive groups resolved on every final list
pub const EXCLUSIVE_GROUPS: [ExclusiveGroup; 6] = [
    ExclusiveGroup {
        name: "brim",
        members: &[GearKey::BrimCap, GearKey::Cap],
    },
    ExclusiveGroup {
        name: "shell",
        members: &[GearKey::RainShell, GearKey::Windbreaker],
    },
    ExclusiveGroup {
        name: "outer_layer",
        members: &[GearKey::InsulatedJacket, GearKey::LightJacket, GearKey::Vest],
    },
    ExclusiveGroup {
        name: "head_warmth",
        members: &[GearKey::Balaclava, GearKey::Beanie, GearKey::Headband],
    },
    ExclusiveGroup {
        name: "hands",
        members: &GearKey::HAND_ITEMS,
    },
    ExclusiveGroup {
        name: "socks",
        members: &GearKey::SOCK_ITEMS,
    },
];

/// Keep only the first present member of every exclusive group
#[must_use]
pub fn resolve_conflicts(gear: GearSet) -> GearSet {
    EXCLUSIVE_GROUPS.iter().fold(gear, |gear, group| {
        match group.members.iter().position(|key| gear.contains(*key)) {
            Some(winner) => gear.without_all(&group.members[winner + 1..]),
            None => gear,
        }
    })
}

/// Display order for the performance list: core garments first, extras last
pub const PERFORMANCE_PRIORITY: [GearKey; 35] = [
    GearKey::SportsBra,
    GearKey::TankTop,
    GearKey::ShortSleeve,
    GearKey::LongSleeve,
    GearKey::ThermalBase,
    GearKey::Shorts,
    GearKey::HalfTights,
    GearKey::Tights,
    GearKey::ThermalTights,
    GearKey::WindPants,
    GearKey::Vest,
    GearKey::LightJacket,
    GearKey::InsulatedJacket,
    GearKey::Windbreaker,
    GearKey::RainShell,
    GearKey::ArmSleeves,
    GearKey::LightGloves,
    GearKey::MediumGloves,
    GearKey::Mittens,
    GearKey::MittensLiner,
    GearKey::Headband,
    GearKey::Beanie,
    GearKey::Balaclava,
    GearKey::NeckGaiter,
    GearKey::Cap,
    GearKey::BrimCap,
    GearKey::LightSocks,
    GearKey::HeavySocks,
    GearKey::DoubleSocks,
    GearKey::Sunglasses,
    GearKey::Sunscreen,
    GearKey::WaterBottle,
    GearKey::Electrolytes,
    GearKey::EnergyGels,
    GearKey::AntiChafe,
];

/// Display order for the comfort list: warmth and weather protection first
pub const COMFORT_PRIORITY: [GearKey; 35] = [
    GearKey::InsulatedJacket,
    GearKey::LightJacket,
    GearKey::Vest,
    GearKey::RainShell,
    GearKey::Windbreaker,
    GearKey::ThermalBase,
    GearKey::LongSleeve,
    GearKey::ShortSleeve,
    GearKey::TankTop,
    GearKey::SportsBra,
    GearKey::ThermalTights,
    GearKey::WindPants,
    GearKey::Tights,
    GearKey::HalfTights,
    GearKey::Shorts,
    GearKey::Balaclava,
    GearKey::Beanie,
    GearKey::Headband,
    GearKey::NeckGaiter,
    GearKey::BrimCap,
    GearKey::Cap,
    GearKey::MittensLiner,
    GearKey::Mittens,
    GearKey::MediumGloves,
    GearKey::LightGloves,
    GearKey::ArmSleeves,
    GearKey::DoubleSocks,
    GearKey::HeavySocks,
    GearKey::LightSocks,
    GearKey::Sunglasses,
    GearKey::Sunscreen,
    GearKey::WaterBottle,
    GearKey::Electrolytes,
    GearKey::AntiChafe,
    GearKey::EnergyGels,
];

/// Lean variant for runners who heat up fast
#[must_use]
pub(super) fn performance(ctx: &OutfitContext<'_>, unified: &GearSet) -> GearSet {
    let g = ctx.hands_comparison_f;
    let t = ctx.adjusted_f;

    let mut gear = unified.clone().without(GearKey::MittensLiner);
    if g > 25.0 {
        gear = gear.replacing(GearKey::Mittens, GearKey::MediumGloves);
    }
    if g > 40.0 {
        gear = gear.replacing(GearKey::MediumGloves, GearKey::LightGloves);
    }
    if g > 50.0 {
        gear = gear.without(GearKey::LightGloves);
    }
    if t > 5.0 || ctx.profile.activity.is_workout() {
        gear = gear.replacing(GearKey::InsulatedJacket, GearKey::LightJacket);
    }
    if t > 52.0 {
        gear = gear.replacing(GearKey::LongSleeve, GearKey::ShortSleeve);
    }
    if ctx.arm_sleeves == ArmSleeves::Optional {
        gear = gear.without(GearKey::ArmSleeves);
    }
    gear
}

/// Warmer variant for runners who run cold or stop often
#[must_use]
pub(super) fn comfort(ctx: &OutfitContext<'_>, unified: &GearSet) -> GearSet {
    let t = ctx.adjusted_f;

    let mut gear = unified.clone();
    if gear.contains(GearKey::MittensLiner) {
        gear = gear.without(GearKey::Mittens);
    }

    let has_jacket = gear.contains_any(&[GearKey::InsulatedJacket, GearKey::LightJacket]);
    if t <= 35.0 && !has_jacket {
        gear = gear.with(GearKey::LightJacket);
    } else if t > 35.0 && t <= 42.0 && !has_jacket {
        gear = gear.with(GearKey::Vest);
    }
    if t <= 25.0 && !gear.contains(GearKey::Balaclava) {
        gear = gear.with(GearKey::NeckGaiter);
    }
    gear
}

/// Render a set as display items sorted by `priority`; unranked keys go last
#[must_use]
pub fn order_items(gear: &GearSet, priority: &[GearKey], cold_hands: bool) -> Vec<GearItem> {
    let mut keys: Vec<GearKey> = gear.iter().collect();
    keys.sort_by_key(|key| {
        priority
            .iter()
            .position(|ranked| ranked == key)
            .unwrap_or(priority.len())
    });
    keys.into_iter()
        .map(|key| GearItem::new(key).with_cold_hands(cold_hands && key.is_hand_item()))
        .collect()
}
