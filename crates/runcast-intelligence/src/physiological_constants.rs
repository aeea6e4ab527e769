// ABOUTME: Physiological and meteorological constants used by the runcast engines
// ABOUTME: Magnus coefficients, WBGT and heat index regressions, wind chill, and score penalty parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on meteorology and sports science guidance
//!
//! This module contains the fixed parameters used throughout the running
//! conditions engines. These are design constants, not runtime configuration:
//! changing any of them changes scores and gear lists.

/// Magnus formula coefficients for saturation vapour pressure over water
///
/// Reference: Alduchov, O.A. & Eskridge, R.E. (1996). Improved Magnus form
/// approximation of saturation vapor pressure. Journal of Applied Meteorology.
pub mod magnus {
    /// Dimensionless coefficient `a`
    pub const A: f64 = 17.62;

    /// Temperature coefficient `b` (°C)
    pub const B_CELSIUS: f64 = 243.12;

    /// Saturation vapour pressure at 0 °C (hPa)
    pub const BASE_PRESSURE_HPA: f64 = 6.112;

    /// Lower clamp applied to relative humidity before taking its logarithm
    pub const MIN_RELATIVE_HUMIDITY: f64 = 1e-6;
}

/// Dew point comfort tier upper bounds (°F, exclusive)
///
/// Reference: NWS dew point comfort guidance for the continental US
pub mod dew_point_comfort {
    /// Below this dew point air feels dry
    pub const DRY_MAX_F: f64 = 50.0;
    /// Below this dew point air feels comfortable
    pub const COMFORTABLE_MAX_F: f64 = 55.0;
    /// Below this dew point air feels slightly muggy
    pub const SLIGHTLY_MUGGY_MAX_F: f64 = 60.0;
    /// Below this dew point air feels moderately humid
    pub const MODERATE_MAX_F: f64 = 65.0;
    /// Below this dew point air feels muggy
    pub const MUGGY_MAX_F: f64 = 70.0;
    /// Below this dew point air feels very humid; at or above it is oppressive
    pub const VERY_HUMID_MAX_F: f64 = 75.0;
}

/// Simplified Wet Bulb Globe Temperature estimate
///
/// Reference: Australian Bureau of Meteorology, "About the approximation to the
/// WBGT used by the Bureau of Meteorology". Shade approximation with no
/// radiation or wind term.
pub mod wbgt {
    /// Air temperature coefficient
    pub const AIR_TEMP_COEFFICIENT: f64 = 0.567;
    /// Vapour pressure coefficient (per hPa)
    pub const VAPOR_PRESSURE_COEFFICIENT: f64 = 0.393;
    /// Constant offset (°C)
    pub const OFFSET_CELSIUS: f64 = 3.94;

    /// Below this WBGT (°F) the index is not meaningful for runners
    pub const MEANINGFUL_MIN_F: f64 = 60.0;
    /// Green flag lower bound
    pub const GREEN_MIN_F: f64 = 60.0;
    /// Yellow flag lower bound
    pub const YELLOW_MIN_F: f64 = 65.0;
    /// Red flag lower bound; hard efforts are in danger from here
    pub const RED_MIN_F: f64 = 73.0;
    /// Black flag lower bound (inclusive)
    pub const BLACK_MIN_F: f64 = 82.0;
}

/// NWS heat index (Rothfusz regression)
///
/// Reference: NWS Technical Attachment SR 90-23, with the adjustments from
/// <https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml>
pub mod heat_index {
    /// Below this temperature (°F) the heat index equals air temperature
    pub const MIN_TEMPERATURE_F: f64 = 80.0;

    /// Regression coefficients c1..c9
    pub const C1: f64 = -42.379;
    /// T coefficient
    pub const C2: f64 = 2.049_015_23;
    /// RH coefficient
    pub const C3: f64 = 10.143_331_27;
    /// T·RH coefficient
    pub const C4: f64 = -0.224_755_41;
    /// T² coefficient
    pub const C5: f64 = -0.006_837_83;
    /// RH² coefficient
    pub const C6: f64 = -0.054_817_17;
    /// T²·RH coefficient
    pub const C7: f64 = 0.001_228_74;
    /// T·RH² coefficient
    pub const C8: f64 = 0.000_852_82;
    /// T²·RH² coefficient
    pub const C9: f64 = -0.000_001_99;

    /// Low-humidity adjustment applies below this RH
    pub const LOW_HUMIDITY_THRESHOLD: f64 = 13.0;
    /// Low-humidity adjustment temperature band upper bound (°F)
    pub const LOW_HUMIDITY_MAX_TEMP_F: f64 = 112.0;
    /// High-humidity adjustment applies above this RH
    pub const HIGH_HUMIDITY_THRESHOLD: f64 = 85.0;
    /// High-humidity adjustment temperature band upper bound (°F)
    pub const HIGH_HUMIDITY_MAX_TEMP_F: f64 = 87.0;
}

/// NWS 2001 wind chill index
///
/// Reference: <https://www.weather.gov/safety/cold-wind-chill-chart>
pub mod wind_chill {
    /// Constant term
    pub const C1: f64 = 35.74;
    /// Temperature coefficient
    pub const C2: f64 = 0.6215;
    /// Wind coefficient
    pub const C3: f64 = 35.75;
    /// Temperature × wind coefficient
    pub const C4: f64 = 0.4275;
    /// Wind exponent
    pub const WIND_EXPONENT: f64 = 0.16;
    /// Index is defined at or below this temperature (°F)
    pub const MAX_TEMPERATURE_F: f64 = 50.0;
    /// Index is defined above this wind speed (mph)
    pub const MIN_WIND_MPH: f64 = 3.0;
}

/// Running score penalty model
///
/// The exponents and multipliers are fixed design parameters of the score;
/// they are tuned together and are not adjustable at call time.
pub mod running_score {
    /// Ideal apparent temperature for workouts (°F)
    pub const IDEAL_WORKOUT_F: f64 = 43.0;
    /// Ideal apparent temperature for long runs (°F)
    pub const IDEAL_LONG_RUN_F: f64 = 48.0;
    /// Ideal apparent temperature for easy runs (°F)
    pub const IDEAL_EASY_F: f64 = 50.0;

    /// Apparent temperature at which the warm penalty saturates (°F)
    pub const WARM_CEILING_F: f64 = 85.0;
    /// Minimum warm span (°F)
    pub const MIN_WARM_SPAN_F: f64 = 5.0;
    /// Warm penalty curve exponent
    pub const WARM_EXPONENT: f64 = 1.6;
    /// Warm penalty at saturation
    pub const WARM_MAX_PENALTY: f64 = 99.0;
    /// Cold curve width for workouts (°F)
    pub const COOL_WIDTH_WORKOUT_F: f64 = 22.0;
    /// Cold curve width for other runs (°F)
    pub const COOL_WIDTH_DEFAULT_F: f64 = 20.0;
    /// Cold penalty multiplier
    pub const COOL_MULTIPLIER: f64 = 28.0;

    /// Dew point penalty steps, aligned with the comfort tiers
    pub const DEW_POINT_STEPS: [f64; 7] = [0.0, 2.0, 5.0, 10.0, 18.0, 28.0, 40.0];

    /// Extra humidity penalty applies above this RH
    pub const HUMIDITY_THRESHOLD: f64 = 80.0;
    /// Extra humidity penalty applies above this apparent temperature (°F)
    pub const HUMIDITY_MIN_APPARENT_F: f64 = 60.0;
    /// Maximum extra humidity penalty
    pub const HUMIDITY_MAX_PENALTY: f64 = 8.0;

    /// Wind below this speed is free (mph)
    pub const WIND_FREE_MPH: f64 = 2.0;
    /// Wind curve width (mph)
    pub const WIND_WIDTH_MPH: f64 = 25.0;
    /// Wind penalty multiplier
    pub const WIND_MULTIPLIER: f64 = 40.0;

    /// Maximum precipitation-probability penalty
    pub const PRECIP_PROBABILITY_MAX: f64 = 15.0;
    /// Penalty per inch of precipitation
    pub const PRECIP_AMOUNT_PER_INCH: f64 = 160.0;
    /// Maximum precipitation-amount penalty
    pub const PRECIP_AMOUNT_MAX: f64 = 20.0;
    /// Flat ice penalty when it precipitates near freezing
    pub const ICE_PENALTY: f64 = 10.0;
    /// Ice penalty applies at or below this apparent temperature (°F)
    pub const ICE_MAX_APPARENT_F: f64 = 34.0;

    /// Base UV threshold
    pub const UV_THRESHOLD: f64 = 6.0;
    /// Base UV penalty per index point
    pub const UV_MULTIPLIER: f64 = 2.5;
    /// Base UV penalty cap
    pub const UV_MAX: f64 = 10.0;
    /// Workout UV surcharge in the heat
    pub const UV_WORKOUT_HEAT_BONUS: f64 = 5.0;
    /// Long-run UV threshold
    pub const UV_LONG_RUN_THRESHOLD: f64 = 5.0;
    /// Long-run UV penalty per index point
    pub const UV_LONG_RUN_MULTIPLIER: f64 = 3.0;
    /// Long-run UV penalty cap
    pub const UV_LONG_RUN_MAX: f64 = 15.0;
    /// Long-run UV surcharge in the heat
    pub const UV_LONG_RUN_HEAT_BONUS: f64 = 3.0;
    /// Apparent temperature where the UV heat surcharges start (°F)
    pub const UV_HEAT_MIN_APPARENT_F: f64 = 70.0;

    /// Cold synergy applies below this apparent temperature (°F)
    pub const COLD_SYNERGY_MAX_APPARENT_F: f64 = 35.0;
    /// Cold synergy slope
    pub const COLD_SYNERGY_SLOPE: f64 = 0.3;
    /// Wind factor applied to the cold synergy when windy
    pub const COLD_SYNERGY_WIND_FACTOR: f64 = 0.6;
    /// Wind speed above which cold synergy applies (mph)
    pub const COLD_SYNERGY_MIN_WIND_MPH: f64 = 10.0;
    /// Nominal maximum reported for the cold synergy breakdown part
    pub const COLD_SYNERGY_NOMINAL_MAX: f64 = 10.0;
    /// Heat synergy dew point threshold (°F)
    pub const HEAT_SYNERGY_DEW_POINT_F: f64 = 70.0;
    /// Heat synergy slope per dew point degree
    pub const HEAT_SYNERGY_DEW_POINT_SLOPE: f64 = 0.6;
    /// Extreme heat threshold (°F)
    pub const EXTREME_HEAT_APPARENT_F: f64 = 100.0;
    /// Extreme heat curve width (°F)
    pub const EXTREME_HEAT_WIDTH_F: f64 = 5.0;
    /// Extreme heat multiplier
    pub const EXTREME_HEAT_MULTIPLIER: f64 = 20.0;
    /// Nominal maximum reported for the heat synergy breakdown part
    pub const HEAT_SYNERGY_NOMINAL_MAX: f64 = 20.0;

    /// The summed penalty is capped here before inversion
    pub const MAX_TOTAL_PENALTY: f64 = 99.0;
}
