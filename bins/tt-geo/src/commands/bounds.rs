//! Bounds command - bounding box containment

use super::print_json;
use anyhow::Result;
use serde_json::json;
use std::process::ExitCode;
use trantech_cli::output::Status;
use trantech_geo::{BoundingBox, Coordinate};

/// Run bounds command
///
/// Exits with failure when the coordinate lies outside the box, so the
/// command composes in shell conditionals.
pub fn run(
    coordinate: &Coordinate,
    north_east: &Coordinate,
    south_west: &Coordinate,
    json: bool,
) -> Result<ExitCode> {
    let bbox = BoundingBox::new(*north_east, *south_west);
    if north_east.longitude < south_west.longitude {
        Status::warning("East edge lies west of the west edge; boxes do not wrap the antimeridian");
    }

    let inside = bbox.contains(coordinate)?;

    if json {
        print_json(&json!({ "coordinate": coordinate, "bounds": bbox, "within": inside }))?;
    } else if inside {
        Status::success("Inside bounds");
    } else {
        Status::info("Outside bounds");
    }

    Ok(if inside { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
