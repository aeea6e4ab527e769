// ABOUTME: Additive outfit rules applied on top of the base layers, one named stage per concern
// ABOUTME: Wind layers, rain, sun, hydration, arm sleeves, head warmth, extremities, and long-run extras
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::gear_set::GearSet;
use super::temperature::LookAhead;
use super::OutfitContext;
use crate::heat_stress::wind_chill_f;
use runcast_core::{ActivityKind, GearKey, WeatherSample};
use serde::{Deserialize, Serialize};

/// Whether arm sleeves are part of the outfit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmSleeves {
    /// Leave them at home
    #[default]
    NotNeeded,
    /// Nice to have; dropped from the performance list
    Optional,
    /// Recommended in every list
    Required,
}

/// Arm sleeve recommendation for the dressing temperature and conditions
#[must_use]
pub fn arm_sleeves_state(
    adjusted_f: f64,
    sample: &WeatherSample,
    activity: ActivityKind,
    ahead: &LookAhead,
) -> ArmSleeves {
    let t = adjusted_f;
    let transitional = (42.0..55.0).contains(&t);
    let warming_long_run =
        activity.is_long_run() && ahead.max_temp_rise >= 8.0 && (38.0..50.0).contains(&t);

    if (transitional && sample.wind_mph >= 10.0) || warming_long_run {
        ArmSleeves::Required
    } else if transitional || (t >= 75.0 && sample.uv_index >= 8.0 && sample.is_day) {
        ArmSleeves::Optional
    } else {
        ArmSleeves::NotNeeded
    }
}

/// Whether the sample counts as wet for rain gear
#[must_use]
pub fn is_wet(sample: &WeatherSample) -> bool {
    sample.precip_probability >= 60.0 || sample.precip_in >= 0.1
}

pub(super) fn light_jacket(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    let t = ctx.adjusted_f;
    gear.with_if(
        (30.0..40.0).contains(&t) && ctx.sample.wind_mph >= 12.0,
        GearKey::LightJacket,
    )
}

pub(super) fn vest(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    let t = ctx.adjusted_f;
    gear.with_if(
        (40.0..50.0).contains(&t) && ctx.sample.wind_mph >= 10.0,
        GearKey::Vest,
    )
}

pub(super) fn rain(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    if !is_wet(ctx.sample) {
        return gear;
    }
    gear.with(GearKey::BrimCap)
        .with_if(ctx.adjusted_f < 70.0, GearKey::RainShell)
}

pub(super) fn windbreaker(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    let t = ctx.adjusted_f;
    let wind = ctx.sample.wind_mph;
    let needed = match t {
        t if t >= 55.0 => wind >= 20.0,
        t if t >= 50.0 => wind >= 15.0,
        t if t >= 40.0 => wind >= 12.0,
        t if t >= 35.0 => wind >= 10.0,
        _ => wind >= 15.0 && !gear.contains(GearKey::InsulatedJacket),
    };
    gear.with_if(needed, GearKey::Windbreaker)
}

pub(super) fn sun(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    let sample = ctx.sample;
    if !sample.is_day {
        return gear;
    }
    let gear = gear.with_if(sample.uv_index >= 3.0, GearKey::Sunglasses);
    if sample.uv_index >= 5.0 {
        gear.with_all(&[GearKey::Cap, GearKey::Sunscreen])
    } else {
        gear
    }
}

pub(super) fn hydration(ctx: &OutfitContext<'_>, mut gear: GearSet) -> GearSet {
    let t = ctx.adjusted_f;
    if t >= 65.0 && ctx.sample.humidity >= 70.0 {
        gear = gear.with_all(&[GearKey::WaterBottle, GearKey::AntiChafe]);
    }
    if t >= 75.0 {
        gear = gear.with_all(&[GearKey::WaterBottle, GearKey::Electrolytes]);
    }
    gear
}

pub(super) fn arm_sleeves(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    gear.with_if(ctx.arm_sleeves != ArmSleeves::NotNeeded, GearKey::ArmSleeves)
}

pub(super) fn head_warmth(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    let t = ctx.adjusted_f;
    gear.with_if(t < 40.0, GearKey::Headband)
        .with_if(t < 30.0, GearKey::Beanie)
}

/// Extremity tiers; each tier supersedes the one below it
pub(super) fn extremities(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    let t = ctx.adjusted_f;
    let sample = ctx.sample;

    if t <= 0.0 || wind_chill_f(sample.temperature_f, sample.wind_mph) <= 0.0 {
        gear.without_all(&[GearKey::Beanie, GearKey::Headband, GearKey::NeckGaiter])
            .with(GearKey::Balaclava)
    } else if t <= 10.0 {
        gear.with_all(&[GearKey::Beanie, GearKey::NeckGaiter])
    } else if t <= 20.0 && sample.wind_mph >= 15.0 {
        gear.with(GearKey::NeckGaiter)
    } else {
        gear
    }
}

pub(super) fn long_run(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    if !ctx.profile.activity.is_long_run() {
        return gear;
    }
    let t = ctx.adjusted_f;
    let ahead = &ctx.look_ahead;

    let gear = gear
        .with_all(&[GearKey::WaterBottle, GearKey::AntiChafe])
        .with_if(t > 50.0, GearKey::EnergyGels)
        .with_if(ahead.max_uv >= 6.0 && ctx.sample.is_day, GearKey::Sunscreen);

    if ahead.rain_likely && t < 70.0 {
        gear.with_all(&[GearKey::RainShell, GearKey::BrimCap])
    } else {
        gear
    }
}
