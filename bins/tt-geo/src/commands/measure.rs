//! Distance, bearing and midpoint commands

use super::print_json;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use std::process::ExitCode;
use trantech_cli::output::Status;
use trantech_geo::{
    calculate_bearing, calculate_distance, compass_point, find_midpoint, format_coordinates,
    Coordinate, CoordinateFormat,
};

/// Run distance command
pub fn run_distance(from: &Coordinate, to: &Coordinate, json: bool) -> Result<ExitCode> {
    let distance = calculate_distance(from, to)?;

    if json {
        print_json(&json!({ "from": from, "to": to, "distance": distance }))?;
        return Ok(ExitCode::SUCCESS);
    }

    Status::header("Distance");
    print_endpoints(from, to)?;
    Status::field("Kilometers", &distance.kilometers.to_string().green().to_string());
    Status::field("Miles", &distance.miles.to_string());
    Status::field("Meters", &distance.meters.to_string());
    println!();

    Ok(ExitCode::SUCCESS)
}

/// Run bearing command
pub fn run_bearing(from: &Coordinate, to: &Coordinate, json: bool) -> Result<ExitCode> {
    let bearing = calculate_bearing(from, to)?;
    let compass = compass_point(bearing);

    if json {
        print_json(&json!({ "from": from, "to": to, "bearing": bearing, "compass": compass }))?;
        return Ok(ExitCode::SUCCESS);
    }

    Status::header("Bearing");
    print_endpoints(from, to)?;
    Status::field(
        "Bearing",
        &format!("{}° ({})", bearing.to_string().green(), compass.cyan()),
    );
    println!();

    Ok(ExitCode::SUCCESS)
}

/// Run midpoint command
pub fn run_midpoint(from: &Coordinate, to: &Coordinate, json: bool) -> Result<ExitCode> {
    let midpoint = find_midpoint(from, to)?;

    if json {
        print_json(&json!({ "from": from, "to": to, "midpoint": midpoint }))?;
        return Ok(ExitCode::SUCCESS);
    }

    Status::header("Midpoint");
    print_endpoints(from, to)?;
    Status::field(
        "Midpoint",
        &format_coordinates(&midpoint, CoordinateFormat::Decimal)?.green().to_string(),
    );
    Status::field("DMS", &format_coordinates(&midpoint, CoordinateFormat::Dms)?);
    println!();

    Ok(ExitCode::SUCCESS)
}

fn print_endpoints(from: &Coordinate, to: &Coordinate) -> Result<()> {
    Status::field("From", &format_coordinates(from, CoordinateFormat::Decimal)?);
    Status::field("To", &format_coordinates(to, CoordinateFormat::Decimal)?);
    Ok(())
}
