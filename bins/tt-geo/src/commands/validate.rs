//! Validate command - check a coordinate against the valid ranges

use super::print_json;
use anyhow::Result;
use serde_json::{json, Value};
use std::process::ExitCode;
use trantech_cli::output::Status;
use trantech_geo::{is_valid_coordinates, Coordinate};

/// Run validate command
///
/// Accepts `lat,lng` text or a JSON object. Exits with failure when invalid.
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let valid = check(input);
    tracing::debug!(input, valid, "Validated coordinate");

    if json {
        print_json(&json!({ "input": input, "valid": valid }))?;
    } else if valid {
        Status::success(&format!("{} is a valid coordinate", input));
    } else {
        Status::error(&format!("{} is not a valid coordinate", input));
    }

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn check(input: &str) -> bool {
    if let Ok(coord) = input.parse::<Coordinate>() {
        return coord.is_valid();
    }

    serde_json::from_str::<Value>(input)
        .map(|value| is_valid_coordinates(&value))
        .unwrap_or(false)
}
