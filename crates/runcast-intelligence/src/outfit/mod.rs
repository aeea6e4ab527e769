// ABOUTME: Outfit selector turning conditions and a runner profile into performance and comfort gear lists
// ABOUTME: Runs an ordered pipeline of named pure stages over an immutable gear set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Outfit Selector
//!
//! Selection happens in four phases:
//!
//! 1. Dressing temperatures: the feels-like reading is corrected into an
//!    effective temperature, then adjusted for the kind of run (and, for long
//!    runs, the next two forecast points).
//! 2. A unified gear set is built by `STAGES`, each a named `GearSet ->
//!    GearSet` transform applied in order.
//! 3. Performance and comfort variants are derived from the unified set and
//!    socks are applied to both.
//! 4. Exclusive groups are resolved once per list and each list is sorted by
//!    its own priority table.
//!
//! Every phase is a total function of the current inputs.

mod base_layers;
mod gear_set;
mod hands;
mod modifiers;
mod socks;
mod temperature;
mod variants;

pub use base_layers::base_layers;
pub use gear_set::GearSet;
pub use hands::{
    apply_hands_level, decide_hands, hands_comparison_f, hands_level_from_gear, HandsDecision,
    HandsLevel,
};
pub use modifiers::{arm_sleeves_state, is_wet, ArmSleeves};
pub use socks::{apply_sock_tier, sock_tier, SockTier};
pub use temperature::{adjusted_temperature_f, effective_temperature_f, look_ahead, LookAhead};
pub use variants::{
    order_items, resolve_conflicts, ExclusiveGroup, COMFORT_PRIORITY, EXCLUSIVE_GROUPS,
    PERFORMANCE_PRIORITY,
};

use runcast_core::{ForecastPoint, GearItem, RunProfile, WeatherSample};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Everything a stage may read; computed once per selection
#[derive(Debug, Clone)]
pub(crate) struct OutfitContext<'a> {
    pub(crate) sample: &'a WeatherSample,
    pub(crate) profile: &'a RunProfile,
    pub(crate) effective_f: f64,
    pub(crate) adjusted_f: f64,
    pub(crate) look_ahead: LookAhead,
    pub(crate) arm_sleeves: ArmSleeves,
    pub(crate) hands_comparison_f: f64,
    pub(crate) hands: HandsDecision,
    pub(crate) sock_tier: SockTier,
}

impl<'a> OutfitContext<'a> {
    fn new(
        sample: &'a WeatherSample,
        profile: &'a RunProfile,
        forecast: &[ForecastPoint],
    ) -> Self {
        let effective_f = effective_temperature_f(sample, profile);
        let look_ahead = if profile.activity.is_long_run() {
            look_ahead(sample, forecast)
        } else {
            LookAhead::current_only(sample)
        };
        let adjusted_f = adjusted_temperature_f(effective_f, profile.activity, &look_ahead);

        Self {
            sample,
            profile,
            effective_f,
            adjusted_f,
            look_ahead,
            arm_sleeves: arm_sleeves_state(adjusted_f, sample, profile.activity, &look_ahead),
            hands_comparison_f: hands_comparison_f(effective_f, profile),
            hands: decide_hands(effective_f, sample.wind_mph, profile),
            sock_tier: sock_tier(sample),
        }
    }
}

/// A named transform of the unified gear set
pub(crate) type Stage = fn(&OutfitContext<'_>, GearSet) -> GearSet;

fn base_layers_stage(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    base_layers(ctx.adjusted_f, ctx.profile.gender)
        .iter()
        .fold(gear, GearSet::with)
}

fn hands_stage(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    apply_hands_level(gear, ctx.hands.level)
}

fn socks_stage(ctx: &OutfitContext<'_>, gear: GearSet) -> GearSet {
    apply_sock_tier(gear, ctx.sock_tier)
}

/// Unified-set stages in application order
pub(crate) const STAGES: [(&str, Stage); 13] = [
    ("base_layers", base_layers_stage),
    ("light_jacket", modifiers::light_jacket),
    ("vest", modifiers::vest),
    ("rain", modifiers::rain),
    ("windbreaker", modifiers::windbreaker),
    ("sun", modifiers::sun),
    ("hydration", modifiers::hydration),
    ("arm_sleeves", modifiers::arm_sleeves),
    ("head_warmth", modifiers::head_warmth),
    ("extremities", modifiers::extremities),
    ("long_run", modifiers::long_run),
    ("hands", hands_stage),
    ("socks", socks_stage),
];

/// Gear recommendation with both variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitResult {
    /// Lean list, ordered for display
    pub performance: Vec<GearItem>,
    /// Warm list, ordered for display
    pub comfort: Vec<GearItem>,
    /// Hand protection level of the unified outfit
    pub hands_level: HandsLevel,
    /// Sock tier used in both lists
    pub sock_tier: SockTier,
    /// Effective dressing temperature (°F)
    pub effective_temp_f: f64,
    /// Activity-adjusted dressing temperature (°F)
    pub adjusted_temp_f: f64,
    /// Arm sleeve recommendation
    pub arm_sleeves: ArmSleeves,
}

fn build_unified(ctx: &OutfitContext<'_>) -> GearSet {
    STAGES.iter().fold(GearSet::new(), |gear, (name, stage)| {
        let next = stage(ctx, gear);
        trace!(stage = *name, items = next.len(), "Applied outfit stage");
        next
    })
}

/// Select performance and comfort outfits
///
/// Only the first two forecast points are consulted, and only for long runs.
#[must_use]
pub fn select_outfit(
    sample: &WeatherSample,
    profile: &RunProfile,
    forecast: &[ForecastPoint],
) -> OutfitResult {
    let ctx = OutfitContext::new(sample, profile, forecast);
    let unified = build_unified(&ctx);

    let performance = resolve_conflicts(apply_sock_tier(
        variants::performance(&ctx, &unified),
        ctx.sock_tier,
    ));
    let comfort = resolve_conflicts(apply_sock_tier(
        variants::comfort(&ctx, &unified),
        ctx.sock_tier,
    ));

    let cold_hands = ctx.hands.raised_by_cold_hands;
    let result = OutfitResult {
        performance: order_items(&performance, &PERFORMANCE_PRIORITY, cold_hands),
        comfort: order_items(&comfort, &COMFORT_PRIORITY, cold_hands),
        hands_level: hands_level_from_gear(unified.iter()),
        sock_tier: ctx.sock_tier,
        effective_temp_f: ctx.effective_f,
        adjusted_temp_f: ctx.adjusted_f,
        arm_sleeves: ctx.arm_sleeves,
    };

    debug!(
        activity = %profile.activity,
        effective_f = ctx.effective_f,
        adjusted_f = ctx.adjusted_f,
        hands_level = result.hands_level.as_u8(),
        performance_items = result.performance.len(),
        comfort_items = result.comfort.len(),
        "Selected outfit"
    );

    result
}
