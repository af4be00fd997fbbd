//! tt-geo: command-line geographic coordinate calculator.
//!
//! Coordinates are written as `lat,lng`, e.g. `40.7128,-74.0060`.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use trantech_geo::{Coordinate, CoordinateFormat};
use trantech_telemetry::TelemetryConfig;

mod commands;
mod config;

use commands::{bounds, format, measure, nearest, validate};
use config::Config;

/// Geographic coordinate calculator
#[derive(Parser)]
#[command(name = "tt-geo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a coordinate is valid
    Validate {
        /// `lat,lng` text or a JSON object with latitude/longitude fields
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Great-circle distance between two coordinates
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Initial compass bearing from one coordinate to another
    Bearing {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Great-circle midpoint between two coordinates
    Midpoint {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Format a coordinate as decimal or degrees-minutes-seconds
    Format {
        #[arg(allow_hyphen_values = true)]
        coordinate: Coordinate,

        /// Output style (decimal, dms); defaults to the configured style
        #[arg(short, long)]
        style: Option<CoordinateFormat>,
    },

    /// Check whether a coordinate lies inside a bounding box
    Bounds {
        #[arg(allow_hyphen_values = true)]
        coordinate: Coordinate,

        /// North-east corner
        #[arg(long, allow_hyphen_values = true)]
        north_east: Coordinate,

        /// South-west corner
        #[arg(long, allow_hyphen_values = true)]
        south_west: Coordinate,
    },

    /// Rank located items by distance from an origin
    Nearest {
        #[arg(allow_hyphen_values = true)]
        origin: Coordinate,

        /// JSON file with an array of {id, location} items
        #[arg(short, long)]
        file: PathBuf,

        /// Only keep items within this many kilometers
        #[arg(short, long)]
        radius: Option<f64>,

        /// Maximum number of results (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Restrict to items inside this box (requires --south-west)
        #[arg(long, allow_hyphen_values = true, requires = "south_west")]
        north_east: Option<Coordinate>,

        /// Restrict to items inside this box (requires --north-east)
        #[arg(long, allow_hyphen_values = true, requires = "north_east")]
        south_west: Option<Coordinate>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let telemetry = TelemetryConfig {
        log_level: if cli.verbose {
            "debug".to_string()
        } else {
            config.schema.log.level.clone()
        },
        json: config.schema.log.json,
        ..TelemetryConfig::default()
    };
    if let Err(e) = trantech_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow(), e);
    }

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let json = cli.json;
    let result = match cli.command {
        Commands::Validate { input } => validate::run(&input, json),
        Commands::Distance { from, to } => measure::run_distance(&from, &to, json),
        Commands::Bearing { from, to } => measure::run_bearing(&from, &to, json),
        Commands::Midpoint { from, to } => measure::run_midpoint(&from, &to, json),
        Commands::Format { coordinate, style } => {
            let style = style.unwrap_or(config.schema.format.style);
            format::run(&coordinate, style, json)
        }
        Commands::Bounds { coordinate, north_east, south_west } => {
            bounds::run(&coordinate, &north_east, &south_west, json)
        }
        Commands::Nearest { origin, file, radius, limit, north_east, south_west } => {
            let options = nearest::Options {
                radius_km: radius,
                limit: limit.unwrap_or(config.schema.nearest.max_results),
                bounds: north_east.zip(south_west),
            };
            nearest::run(&origin, &file, &options, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
