// ABOUTME: Runcast CLI - command-line access to the running-conditions engines
// ABOUTME: Parses arguments, layers profile flags over environment defaults, and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Dew point and comfort for 75°F at 60% humidity
//! runcast-cli dew-point --temp 75 --humidity 60
//!
//! # Heat stress flag for a workout
//! runcast-cli heat-stress --temp 88 --humidity 70 --wind 5 --activity workout
//!
//! # Score and outfit for a sample read from a file
//! runcast-cli score --input sample.json
//! runcast-cli outfit --input sample.json --forecast next_hours.json --cold-hands
//!
//! # Full report from stdin
//! cat sample.json | runcast-cli report --input -
//!
//! # Evaluate an hourly series and pick the best hour
//! runcast-cli hourly --input hours.json --activity long-run
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use runcast::config::{ProfileOverrides, RuncastConfig};
use runcast::core::{ActivityKind, Gender, RunProfile, TemperatureUnit};
use runcast::errors::AppResult;
use runcast::logging;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "runcast-cli",
    about = "Weather to running decisions",
    long_about = "Dew point comfort, heat stress risk, a 0-100 running score, and what to wear, computed from a weather reading and a runner profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    profile: ProfileArgs,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Profile flags; each one overrides its `RUNCAST_*` environment default
#[derive(Args)]
struct ProfileArgs {
    /// Kind of run (workout, long-run, easy)
    #[arg(long, global = true)]
    activity: Option<ActivityKind>,

    /// Runner gender (female, male, unspecified)
    #[arg(long, global = true)]
    gender: Option<Gender>,

    /// Runner's hands run cold
    #[arg(long, global = true)]
    cold_hands: bool,

    /// Temperature sensitivity from -3 (runs cold) to 3 (runs warm)
    #[arg(long, global = true, allow_negative_numbers = true)]
    temp_sensitivity: Option<f64>,

    /// Display unit for formatted temperatures (fahrenheit, celsius)
    #[arg(long, global = true)]
    unit: Option<TemperatureUnit>,
}

impl ProfileArgs {
    fn overrides(&self) -> ProfileOverrides {
        ProfileOverrides {
            activity: self.activity,
            gender: self.gender,
            cold_hands: self.cold_hands,
            temp_sensitivity: self.temp_sensitivity,
            temperature_unit: self.unit,
        }
    }

    fn resolve(&self) -> AppResult<RunProfile> {
        let config = RuncastConfig::from_env()?.with_overrides(self.overrides())?;
        debug!(?config, "Resolved runner profile");
        Ok(config.to_profile())
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Dew point and comfort tier for a temperature and humidity
    DewPoint {
        /// Air temperature (°F)
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,

        /// Relative humidity (0-100)
        #[arg(long)]
        humidity: f64,
    },

    /// WBGT estimate, heat index, and heat stress flag
    HeatStress {
        /// Air temperature (°F)
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,

        /// Relative humidity (0-100)
        #[arg(long)]
        humidity: f64,

        /// Wind speed (mph)
        #[arg(long, default_value = "0")]
        wind: f64,

        /// Barometric pressure (hPa)
        #[arg(long)]
        pressure: Option<f64>,

        /// Global solar radiation (W/m²)
        #[arg(long)]
        solar_radiation: Option<f64>,

        /// Cloud cover (0-100)
        #[arg(long)]
        cloud_cover: Option<f64>,
    },

    /// Running score with its breakdown
    Score {
        /// Weather sample JSON file, or `-` for stdin
        #[arg(long)]
        input: String,
    },

    /// Performance and comfort outfits
    Outfit {
        /// Weather sample JSON file, or `-` for stdin
        #[arg(long)]
        input: String,

        /// Forecast point array JSON file for the hours ahead
        #[arg(long)]
        forecast: Option<String>,
    },

    /// Every engine's result for one sample
    Report {
        /// Weather sample JSON file, or `-` for stdin
        #[arg(long)]
        input: String,

        /// Forecast point array JSON file for the hours ahead
        #[arg(long)]
        forecast: Option<String>,
    },

    /// Evaluate an hourly series and pick the best hour to run
    Hourly {
        /// Weather sample array JSON file, or `-` for stdin
        #[arg(long)]
        input: String,
    },
}

fn run(cli: Cli) -> AppResult<()> {
    let profile = cli.profile.resolve()?;

    match cli.command {
        Command::DewPoint { temp, humidity } => commands::dew_point(temp, humidity, &profile),
        Command::HeatStress {
            temp,
            humidity,
            wind,
            pressure,
            solar_radiation,
            cloud_cover,
        } => commands::heat_stress(
            &commands::HeatStressArgs {
                temp,
                humidity,
                wind,
                pressure,
                solar_radiation,
                cloud_cover,
            },
            &profile,
        ),
        Command::Score { input } => commands::score(&input, &profile),
        Command::Outfit { input, forecast } => {
            commands::outfit(&input, forecast.as_deref(), &profile)
        }
        Command::Report { input, forecast } => {
            commands::report(&input, forecast.as_deref(), &profile)
        }
        Command::Hourly { input } => commands::hourly(&input, &profile),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(init_error) = logging::init_from_env(cli.verbose) {
        eprintln!("{init_error}");
        return ExitCode::from(init_error.exit_code());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(app_error) => {
            error!(code = ?app_error.code, "{app_error}");
            ExitCode::from(app_error.exit_code())
        }
    }
}
