//! Format command - print a coordinate as decimal or DMS text

use super::print_json;
use anyhow::Result;
use serde_json::json;
use std::process::ExitCode;
use trantech_geo::{format_coordinates, Coordinate, CoordinateFormat};

/// Run format command
pub fn run(coordinate: &Coordinate, style: CoordinateFormat, json: bool) -> Result<ExitCode> {
    let text = format_coordinates(coordinate, style)?;

    if json {
        print_json(&json!({ "coordinate": coordinate, "style": style, "text": text }))?;
    } else {
        println!("{}", text);
    }

    Ok(ExitCode::SUCCESS)
}
