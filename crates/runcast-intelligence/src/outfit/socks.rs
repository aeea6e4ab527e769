// ABOUTME: Sock tier chosen from the feels-like temperature, wind, and wet ground
// ABOUTME: Exactly one sock item ends up in every outfit list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::gear_set::GearSet;
use runcast_core::{GearKey, WeatherSample};
use serde::{Deserialize, Serialize};

/// Sock warmth tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SockTier {
    /// Thin running socks
    LightSocks,
    /// Heavy wool socks
    HeavySocks,
    /// Two layers
    DoubleSocks,
}

impl SockTier {
    /// Gear key for this tier
    #[must_use]
    pub const fn key(self) -> GearKey {
        match self {
            Self::LightSocks => GearKey::LightSocks,
            Self::HeavySocks => GearKey::HeavySocks,
            Self::DoubleSocks => GearKey::DoubleSocks,
        }
    }
}

/// Choose socks from the current conditions
#[must_use]
pub fn sock_tier(sample: &WeatherSample) -> SockTier {
    let apparent = sample.apparent_temperature_f;
    let wind = sample.wind_mph;
    let wet_feet = sample.precip_probability > 50.0 || sample.precip_in > 0.05;
    let soaking = sample.precip_probability > 60.0 || sample.precip_in > 0.1;

    if apparent <= 15.0 || (apparent <= 30.0 && wind >= 15.0) || (apparent <= 32.0 && wet_feet) {
        SockTier::DoubleSocks
    } else if apparent <= 45.0 || (apparent <= 55.0 && soaking) {
        SockTier::HeavySocks
    } else {
        SockTier::LightSocks
    }
}

/// Replace any socks in the set with the chosen tier
#[must_use]
pub fn apply_sock_tier(gear: GearSet, tier: SockTier) -> GearSet {
    gear.without_all(&GearKey::SOCK_ITEMS).with(tier.key())
}
