// ABOUTME: Fixed gear catalog and the display item emitted in outfit lists
// ABOUTME: Each GearKey has a stable snake_case identifier and a human-readable label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for every item the outfit selector can recommend
///
/// The catalog is closed: rules can only add or remove these keys. The
/// derived ordering is declaration order and only serves deterministic set
/// iteration; display order comes from per-variant priority tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearKey {
    // Tops
    /// Sports bra
    SportsBra,
    /// Singlet / tank top
    TankTop,
    /// Short-sleeve technical tee
    ShortSleeve,
    /// Long-sleeve technical shirt
    LongSleeve,
    /// Thermal base layer
    ThermalBase,

    // Outer layers
    /// Running vest
    Vest,
    /// Light running jacket
    LightJacket,
    /// Insulated jacket
    InsulatedJacket,
    /// Windbreaker shell
    Windbreaker,
    /// Waterproof rain shell
    RainShell,

    // Bottoms
    /// Running shorts
    Shorts,
    /// Three-quarter tights
    HalfTights,
    /// Full-length tights
    Tights,
    /// Fleece-lined thermal tights
    ThermalTights,
    /// Wind pants over tights
    WindPants,

    /// Arm sleeves
    ArmSleeves,

    // Head and neck
    /// Running cap
    Cap,
    /// Brimmed rain cap
    BrimCap,
    /// Ear-warmer headband
    Headband,
    /// Beanie
    Beanie,
    /// Balaclava
    Balaclava,
    /// Neck gaiter
    NeckGaiter,

    // Sun
    /// Sunglasses
    Sunglasses,
    /// Sunscreen
    Sunscreen,

    // Hands
    /// Light gloves
    LightGloves,
    /// Midweight gloves
    MediumGloves,
    /// Mittens
    Mittens,
    /// Mittens worn over a liner glove
    MittensLiner,

    // Feet
    /// Light socks
    LightSocks,
    /// Heavy wool socks
    HeavySocks,
    /// Double-layer socks
    DoubleSocks,

    // Hydration and care
    /// Handheld water bottle
    WaterBottle,
    /// Electrolyte tabs or drink mix
    Electrolytes,
    /// Energy gels
    EnergyGels,
    /// Anti-chafe balm
    AntiChafe,
}

impl GearKey {
    /// Every catalog entry, in declaration order
    pub const ALL: [Self; 35] = [
        Self::SportsBra,
        Self::TankTop,
        Self::ShortSleeve,
        Self::LongSleeve,
        Self::ThermalBase,
        Self::Vest,
        Self::LightJacket,
        Self::InsulatedJacket,
        Self::Windbreaker,
        Self::RainShell,
        Self::Shorts,
        Self::HalfTights,
        Self::Tights,
        Self::ThermalTights,
        Self::WindPants,
        Self::ArmSleeves,
        Self::Cap,
        Self::BrimCap,
        Self::Headband,
        Self::Beanie,
        Self::Balaclava,
        Self::NeckGaiter,
        Self::Sunglasses,
        Self::Sunscreen,
        Self::LightGloves,
        Self::MediumGloves,
        Self::Mittens,
        Self::MittensLiner,
        Self::LightSocks,
        Self::HeavySocks,
        Self::DoubleSocks,
        Self::WaterBottle,
        Self::Electrolytes,
        Self::EnergyGels,
        Self::AntiChafe,
    ];

    /// Hand protection items, warmest first
    pub const HAND_ITEMS: [Self; 4] = [
        Self::MittensLiner,
        Self::Mittens,
        Self::MediumGloves,
        Self::LightGloves,
    ];

    /// Sock items, warmest first
    pub const SOCK_ITEMS: [Self; 3] = [Self::DoubleSocks, Self::HeavySocks, Self::LightSocks];

    /// Stable `snake_case` identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SportsBra => "sports_bra",
            Self::TankTop => "tank_top",
            Self::ShortSleeve => "short_sleeve",
            Self::LongSleeve => "long_sleeve",
            Self::ThermalBase => "thermal_base",
            Self::Vest => "vest",
            Self::LightJacket => "light_jacket",
            Self::InsulatedJacket => "insulated_jacket",
            Self::Windbreaker => "windbreaker",
            Self::RainShell => "rain_shell",
            Self::Shorts => "shorts",
            Self::HalfTights => "half_tights",
            Self::Tights => "tights",
            Self::ThermalTights => "thermal_tights",
            Self::WindPants => "wind_pants",
            Self::ArmSleeves => "arm_sleeves",
            Self::Cap => "cap",
            Self::BrimCap => "brim_cap",
            Self::Headband => "headband",
            Self::Beanie => "beanie",
            Self::Balaclava => "balaclava",
            Self::NeckGaiter => "neck_gaiter",
            Self::Sunglasses => "sunglasses",
            Self::Sunscreen => "sunscreen",
            Self::LightGloves => "light_gloves",
            Self::MediumGloves => "medium_gloves",
            Self::Mittens => "mittens",
            Self::MittensLiner => "mittens_liner",
            Self::LightSocks => "light_socks",
            Self::HeavySocks => "heavy_socks",
            Self::DoubleSocks => "double_socks",
            Self::WaterBottle => "water_bottle",
            Self::Electrolytes => "electrolytes",
            Self::EnergyGels => "energy_gels",
            Self::AntiChafe => "anti_chafe",
        }
    }

    /// Human-readable label shown in gear lists
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SportsBra => "Sports bra",
            Self::TankTop => "Tank top",
            Self::ShortSleeve => "Short-sleeve tech tee",
            Self::LongSleeve => "Long-sleeve tech shirt",
            Self::ThermalBase => "Thermal base layer",
            Self::Vest => "Running vest",
            Self::LightJacket => "Light running jacket",
            Self::InsulatedJacket => "Insulated jacket",
            Self::Windbreaker => "Windbreaker",
            Self::RainShell => "Rain shell",
            Self::Shorts => "Running shorts",
            Self::HalfTights => "3/4 tights",
            Self::Tights => "Running tights",
            Self::ThermalTights => "Thermal tights",
            Self::WindPants => "Wind pants",
            Self::ArmSleeves => "Arm sleeves",
            Self::Cap => "Running cap",
            Self::BrimCap => "Brimmed rain cap",
            Self::Headband => "Ear-warmer headband",
            Self::Beanie => "Beanie",
            Self::Balaclava => "Balaclava",
            Self::NeckGaiter => "Neck gaiter",
            Self::Sunglasses => "Sunglasses",
            Self::Sunscreen => "Sunscreen",
            Self::LightGloves => "Light gloves",
            Self::MediumGloves => "Midweight gloves",
            Self::Mittens => "Mittens",
            Self::MittensLiner => "Mittens + liner",
            Self::LightSocks => "Light socks",
            Self::HeavySocks => "Heavy wool socks",
            Self::DoubleSocks => "Double-layer socks",
            Self::WaterBottle => "Handheld water",
            Self::Electrolytes => "Electrolytes",
            Self::EnergyGels => "Energy gels",
            Self::AntiChafe => "Anti-chafe balm",
        }
    }

    /// Whether this key is one of the hand protection tiers
    #[must_use]
    pub const fn is_hand_item(self) -> bool {
        matches!(
            self,
            Self::LightGloves | Self::MediumGloves | Self::Mittens | Self::MittensLiner
        )
    }

    /// Whether this key is one of the sock tiers
    #[must_use]
    pub const fn is_sock(self) -> bool {
        matches!(self, Self::LightSocks | Self::HeavySocks | Self::DoubleSocks)
    }
}

impl fmt::Display for GearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a rendered gear list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearItem {
    /// Catalog key
    pub key: GearKey,
    /// Display label
    pub label: String,
    /// Recommended because the runner flagged cold hands
    pub cold_hands: bool,
}

impl GearItem {
    /// Build the display item for a catalog key
    #[must_use]
    pub fn new(key: GearKey) -> Self {
        Self {
            key,
            label: key.label().to_owned(),
            cold_hands: false,
        }
    }

    /// Mark the item as recommended due to cold-hands sensitivity
    #[must_use]
    pub fn with_cold_hands(mut self, cold_hands: bool) -> Self {
        self.cold_hands = cold_hands;
        self
    }
}

impl From<GearKey> for GearItem {
    fn from(key: GearKey) -> Self {
        Self::new(key)
    }
}
