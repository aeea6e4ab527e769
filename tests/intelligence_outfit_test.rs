// ABOUTME: Integration tests for performance and comfort outfit selection
// ABOUTME: Checks exclusivity across a condition grid, variant and modifier thresholds, and cold scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runcast::core::{ActivityKind, ForecastPoint, GearItem, GearKey, Gender, RunProfile, WeatherSample};
use runcast::intelligence::outfit::{ArmSleeves, HandsLevel, SockTier, EXCLUSIVE_GROUPS};
use runcast::intelligence::select_outfit;

fn keys(items: &[GearItem]) -> Vec<GearKey> {
    items.iter().map(|item| item.key).collect()
}

fn windy(apparent: f64, wind: f64) -> WeatherSample {
    WeatherSample::new(apparent, apparent, 50.0, wind)
}

fn calm(apparent: f64) -> WeatherSample {
    windy(apparent, 0.0)
}

fn performance(sample: &WeatherSample, profile: &RunProfile) -> Vec<GearKey> {
    keys(&select_outfit(sample, profile, &[]).performance)
}

fn comfort(sample: &WeatherSample, profile: &RunProfile) -> Vec<GearKey> {
    keys(&select_outfit(sample, profile, &[]).comfort)
}

fn easy() -> RunProfile {
    RunProfile::for_activity(ActivityKind::Easy)
}

fn workout() -> RunProfile {
    RunProfile::for_activity(ActivityKind::Workout)
}

fn condition_grid() -> Vec<WeatherSample> {
    let mut samples = Vec::new();
    for apparent in (-10..=95).step_by(5) {
        let apparent = f64::from(apparent);
        for wind in [0.0, 8.0, 18.0] {
            for (probability, amount) in [(0.0, 0.0), (70.0, 0.2)] {
                samples.push(
                    WeatherSample::new(apparent + 2.0, apparent, 60.0, wind)
                        .with_precipitation(probability, amount)
                        .with_uv_index(6.0),
                );
            }
        }
    }
    samples
}

fn profiles() -> Vec<RunProfile> {
    vec![
        RunProfile::for_activity(ActivityKind::Easy),
        RunProfile::for_activity(ActivityKind::Workout).with_gender(Gender::Female),
        RunProfile::for_activity(ActivityKind::Workout).with_cold_hands(true),
        RunProfile::for_activity(ActivityKind::Easy)
            .with_gender(Gender::Female)
            .with_cold_hands(true),
        RunProfile::for_activity(ActivityKind::LongRun)
            .with_cold_hands(true)
            .with_temp_sensitivity(2.0),
    ]
}

#[test]
fn test_lists_never_contain_exclusive_pairs() {
    let forecast = [ForecastPoint::new(70.0).with_uv_index(9.0)];
    for profile in profiles() {
        for sample in condition_grid() {
            let result = select_outfit(&sample, &profile, &forecast);
            for list in [keys(&result.performance), keys(&result.comfort)] {
                for group in &EXCLUSIVE_GROUPS {
                    let present = group
                        .members
                        .iter()
                        .filter(|member| list.contains(member))
                        .count();
                    assert!(
                        present <= 1,
                        "{present} {} items for {sample:?} and {profile:?}",
                        group.name
                    );
                }
                let socks = list.iter().filter(|key| key.is_sock()).count();
                assert_eq!(socks, 1, "expected one sock item for {sample:?}");
            }
        }
    }
}

#[test]
fn test_hands_level_never_rises_with_temperature() {
    for profile in profiles() {
        for wind in [0.0, 10.0, 20.0] {
            let mut previous = HandsLevel::MittensLiner;
            for apparent in (-20..=70).step_by(2) {
                let apparent = f64::from(apparent);
                let sample = WeatherSample::new(apparent, apparent, 50.0, wind);
                let level = select_outfit(&sample, &profile, &[]).hands_level;
                assert!(
                    level <= previous,
                    "hands level rose at {apparent}°F wind {wind}"
                );
                previous = level;
            }
        }
    }
}

#[test]
fn test_cold_windy_easy_run() {
    let sample = WeatherSample::new(22.0, 20.0, 50.0, 15.0).with_uv_index(1.0);
    let result = select_outfit(&sample, &RunProfile::default(), &[]);
    assert!((result.effective_temp_f - 17.5).abs() < 1e-9);
    for list in [keys(&result.performance), keys(&result.comfort)] {
        assert!(list.contains(&GearKey::NeckGaiter));
        assert!(!list.contains(&GearKey::Balaclava));
    }
    assert_eq!(result.sock_tier, SockTier::DoubleSocks);
    assert!(keys(&result.performance).contains(&GearKey::DoubleSocks));
}

#[test]
fn test_hot_sunny_run_has_no_warm_layers() {
    let sample = WeatherSample::new(85.0, 88.0, 40.0, 3.0).with_uv_index(9.0);
    let result = select_outfit(&sample, &RunProfile::default(), &[]);
    let performance = keys(&result.performance);
    assert_eq!(result.hands_level, HandsLevel::None);
    assert!(!performance.contains(&GearKey::InsulatedJacket));
    assert!(!performance.contains(&GearKey::Beanie));
    assert!(performance.contains(&GearKey::Shorts));
}

#[test]
fn test_selection_is_idempotent() {
    let profile = RunProfile::for_activity(ActivityKind::LongRun).with_cold_hands(true);
    let forecast = [ForecastPoint::new(30.0).with_precipitation(60.0, 0.1)];
    for sample in condition_grid() {
        assert_eq!(
            select_outfit(&sample, &profile, &forecast),
            select_outfit(&sample, &profile, &forecast)
        );
    }
}

#[test]
fn test_cold_hands_marks_items() {
    let sample = WeatherSample::new(38.0, 35.0, 50.0, 5.0);
    let plain = select_outfit(&sample, &RunProfile::default(), &[]);
    let cold = select_outfit(&sample, &RunProfile::default().with_cold_hands(true), &[]);
    assert!(cold.hands_level >= plain.hands_level);
}

#[test]
fn test_performance_hand_swaps_follow_comparison_temperature() {
    // Wind raises the unified level so each swap can be seen at its threshold
    let cases = [
        (windy(30.0, 20.0), Some(GearKey::Mittens)),
        (windy(31.0, 20.0), Some(GearKey::MediumGloves)),
        (windy(42.5, 15.0), Some(GearKey::MediumGloves)),
        (windy(43.5, 15.0), Some(GearKey::LightGloves)),
        (windy(50.0, 10.0), Some(GearKey::LightGloves)),
        (windy(51.0, 10.0), None),
    ];
    for (sample, expected) in cases {
        let hand = performance(&sample, &easy())
            .into_iter()
            .find(|key| key.is_hand_item());
        assert_eq!(hand, expected, "performance hands for {sample:?}");
    }

    assert!(comfort(&windy(51.0, 10.0), &easy()).contains(&GearKey::LightGloves));
}

#[test]
fn test_performance_lightens_insulated_jacket() {
    let at_five = performance(&calm(5.0), &easy());
    assert!(at_five.contains(&GearKey::InsulatedJacket));
    assert!(!at_five.contains(&GearKey::LightJacket));

    let at_six = performance(&calm(6.0), &easy());
    assert!(at_six.contains(&GearKey::LightJacket));
    assert!(!at_six.contains(&GearKey::InsulatedJacket));
    assert!(comfort(&calm(6.0), &easy()).contains(&GearKey::InsulatedJacket));

    // Adjusted to 5 °F, but workouts always go lighter
    let result = select_outfit(&calm(-5.0), &workout(), &[]);
    assert!((result.adjusted_temp_f - 5.0).abs() < 1e-9);
    assert!(keys(&result.performance).contains(&GearKey::LightJacket));
    assert!(!keys(&result.performance).contains(&GearKey::InsulatedJacket));
    assert!(keys(&result.comfort).contains(&GearKey::InsulatedJacket));
}

#[test]
fn test_performance_short_sleeve_above_fifty_two() {
    let at_52 = performance(&calm(52.0), &easy());
    assert!(at_52.contains(&GearKey::LongSleeve));
    assert!(!at_52.contains(&GearKey::ShortSleeve));

    let at_53 = performance(&calm(53.0), &easy());
    assert!(at_53.contains(&GearKey::ShortSleeve));
    assert!(!at_53.contains(&GearKey::LongSleeve));
    assert!(comfort(&calm(53.0), &easy()).contains(&GearKey::LongSleeve));
}

#[test]
fn test_optional_arm_sleeves_only_in_comfort() {
    let light_breeze = select_outfit(&windy(48.0, 9.0), &easy(), &[]);
    assert_eq!(light_breeze.arm_sleeves, ArmSleeves::Optional);
    assert!(!keys(&light_breeze.performance).contains(&GearKey::ArmSleeves));
    assert!(keys(&light_breeze.comfort).contains(&GearKey::ArmSleeves));

    let breezy = select_outfit(&windy(48.0, 10.0), &easy(), &[]);
    assert_eq!(breezy.arm_sleeves, ArmSleeves::Required);
    assert!(keys(&breezy.performance).contains(&GearKey::ArmSleeves));
    assert!(keys(&breezy.comfort).contains(&GearKey::ArmSleeves));
}

#[test]
fn test_comfort_outer_layer_bands() {
    let cases = [
        (35.0, Some(GearKey::LightJacket)),
        (36.0, Some(GearKey::Vest)),
        (42.0, Some(GearKey::Vest)),
        (43.0, None),
    ];
    for (apparent, expected) in cases {
        let outer = comfort(&calm(apparent), &easy())
            .into_iter()
            .find(|key| matches!(key, GearKey::LightJacket | GearKey::Vest));
        assert_eq!(outer, expected, "comfort outer layer at {apparent}°F");

        let lean = performance(&calm(apparent), &easy());
        assert!(!lean.contains(&GearKey::LightJacket) && !lean.contains(&GearKey::Vest));
    }
}

#[test]
fn test_comfort_neck_gaiter_at_or_below_twenty_five() {
    assert!(comfort(&calm(25.0), &easy()).contains(&GearKey::NeckGaiter));
    assert!(!performance(&calm(25.0), &easy()).contains(&GearKey::NeckGaiter));
    assert!(!comfort(&calm(26.0), &easy()).contains(&GearKey::NeckGaiter));

    let frigid = comfort(&calm(-2.0), &easy());
    assert!(frigid.contains(&GearKey::Balaclava));
    assert!(!frigid.contains(&GearKey::NeckGaiter));
}

#[test]
fn test_comfort_mittens_give_way_to_liner() {
    let at_five = comfort(&calm(5.0), &easy());
    assert!(at_five.contains(&GearKey::MittensLiner));
    assert!(!at_five.contains(&GearKey::Mittens));

    let at_six = comfort(&calm(6.0), &easy());
    assert!(at_six.contains(&GearKey::Mittens));
    assert!(!at_six.contains(&GearKey::MittensLiner));
}

#[test]
fn test_windbreaker_bands() {
    // (apparent °F, wind mph, windbreaker expected)
    let cases = [
        (60.0, 19.0, false),
        (60.0, 20.0, true),
        (55.0, 17.0, false),
        (54.0, 17.0, true),
        (52.0, 14.0, false),
        (52.0, 15.0, true),
        (50.0, 13.0, false),
        (49.0, 13.0, true),
        (46.0, 11.0, false),
        (46.0, 12.0, true),
        (41.0, 11.0, false),
        (40.0, 11.0, true),
        (37.0, 9.0, false),
        (37.0, 10.0, true),
        (35.0, 10.0, true),
        (34.0, 10.0, false),
        (30.0, 14.0, false),
        (30.0, 15.0, true),
        // Insulated jacket already blocks the wind
        (5.0, 20.0, false),
    ];
    for (apparent, wind, expected) in cases {
        let lean = performance(&windy(apparent, wind), &easy());
        assert_eq!(
            lean.contains(&GearKey::Windbreaker),
            expected,
            "windbreaker at {apparent}°F and {wind} mph"
        );
    }
}

#[test]
fn test_sun_protection_tiers() {
    let sunny = |uv: f64| performance(&calm(60.0).with_uv_index(uv), &easy());

    assert!(!sunny(2.9).contains(&GearKey::Sunglasses));

    let moderate = sunny(3.0);
    assert!(moderate.contains(&GearKey::Sunglasses));
    assert!(!moderate.contains(&GearKey::Cap));
    assert!(!moderate.contains(&GearKey::Sunscreen));
    assert!(!sunny(4.9).contains(&GearKey::Sunscreen));

    let strong = sunny(5.0);
    assert!(strong.contains(&GearKey::Sunglasses));
    assert!(strong.contains(&GearKey::Cap));
    assert!(strong.contains(&GearKey::Sunscreen));

    let night = performance(&calm(60.0).with_uv_index(8.0).with_daylight(false), &easy());
    for key in [GearKey::Sunglasses, GearKey::Cap, GearKey::Sunscreen] {
        assert!(!night.contains(&key), "{key} at night");
    }
}

#[test]
fn test_hydration_thresholds() {
    // Humidity 70 adds 2 °F to the dressing temperature
    let muggy = performance(&WeatherSample::new(63.0, 63.0, 70.0, 0.0), &easy());
    assert!(muggy.contains(&GearKey::WaterBottle));
    assert!(muggy.contains(&GearKey::AntiChafe));
    assert!(!muggy.contains(&GearKey::Electrolytes));

    let just_below = performance(&WeatherSample::new(62.5, 62.5, 70.0, 0.0), &easy());
    assert!(!just_below.contains(&GearKey::WaterBottle));

    let not_humid = performance(&WeatherSample::new(70.0, 70.0, 69.0, 0.0), &easy());
    assert!(!not_humid.contains(&GearKey::WaterBottle));

    assert!(!performance(&calm(74.9), &easy()).contains(&GearKey::WaterBottle));
    let hot = performance(&calm(75.0), &easy());
    assert!(hot.contains(&GearKey::WaterBottle));
    assert!(hot.contains(&GearKey::Electrolytes));
    assert!(!hot.contains(&GearKey::AntiChafe));
}

#[test]
fn test_wind_chill_balaclava_above_zero_dressing_temperature() {
    let result = select_outfit(&WeatherSample::new(10.0, 10.0, 50.0, 20.0), &workout(), &[]);
    assert!(result.adjusted_temp_f > 0.0);
    for list in [keys(&result.performance), keys(&result.comfort)] {
        assert!(list.contains(&GearKey::Balaclava));
        for key in [GearKey::Beanie, GearKey::Headband, GearKey::NeckGaiter] {
            assert!(!list.contains(&key), "{key} alongside balaclava");
        }
    }

    let sheltered = performance(&WeatherSample::new(20.0, 10.0, 50.0, 5.0), &workout());
    assert!(!sheltered.contains(&GearKey::Balaclava));
    assert!(sheltered.contains(&GearKey::Beanie));
}

#[test]
fn test_workout_dresses_ten_degrees_warmer() {
    let easy_run = select_outfit(&calm(40.0), &easy(), &[]);
    let hard_run = select_outfit(&calm(40.0), &workout(), &[]);
    assert!((easy_run.adjusted_temp_f - 40.0).abs() < 1e-9);
    assert!((hard_run.effective_temp_f - 40.0).abs() < 1e-9);
    assert!((hard_run.adjusted_temp_f - 50.0).abs() < 1e-9);
    assert!(keys(&easy_run.performance).contains(&GearKey::HalfTights));
    assert!(keys(&hard_run.performance).contains(&GearKey::Shorts));
}

#[test]
fn test_positive_sensitivity_dresses_lighter() {
    let warm_runner = select_outfit(&calm(40.0), &easy().with_temp_sensitivity(2.0), &[]);
    let cold_runner = select_outfit(&calm(40.0), &easy().with_temp_sensitivity(-2.0), &[]);
    assert!((warm_runner.effective_temp_f - 50.0).abs() < 1e-9);
    assert!((cold_runner.effective_temp_f - 30.0).abs() < 1e-9);
    assert!(keys(&warm_runner.performance).contains(&GearKey::Shorts));
    assert!(keys(&cold_runner.performance).contains(&GearKey::Tights));
}
