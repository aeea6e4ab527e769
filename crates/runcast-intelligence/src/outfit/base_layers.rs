// ABOUTME: Temperature ladder that picks the starting top, outer layer, and bottoms
// ABOUTME: Bands are half-open on the adjusted dressing temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::gear_set::GearSet;
use runcast_core::{Gender, GearKey};

/// Starting garments for an adjusted dressing temperature (°F)
#[must_use]
pub fn base_layers(adjusted_f: f64, gender: Gender) -> GearSet {
    use GearKey::{
        InsulatedJacket, LightJacket, LongSleeve, ShortSleeve, Shorts, SportsBra, TankTop,
        ThermalBase, ThermalTights, Tights, WindPants,
    };

    match adjusted_f {
        t if t < 0.0 => GearSet::from([ThermalBase, InsulatedJacket, ThermalTights, WindPants]),
        t if t < 10.0 => GearSet::from([ThermalBase, InsulatedJacket, ThermalTights]),
        t if t < 20.0 => GearSet::from([ThermalBase, LightJacket, ThermalTights]),
        t if t < 30.0 => GearSet::from([LongSleeve, LightJacket, Tights]),
        t if t < 40.0 => GearSet::from([LongSleeve, Tights]),
        t if t < 48.0 => GearSet::from([LongSleeve, GearKey::HalfTights]),
        t if t < 58.0 => GearSet::from([LongSleeve, Shorts]),
        t if t < 70.0 => GearSet::from([ShortSleeve, Shorts]),
        _ if gender.is_female() => GearSet::from([SportsBra, Shorts]),
        _ => GearSet::from([TankTop, Shorts]),
    }
}
