//! Nearest command - rank located items by distance from an origin

use super::print_json;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use trantech_cli::output::{format_count, format_duration, format_kilometers, Status};
use trantech_geo::batch::{
    calculate_distances_sorted, calculate_distances_within_radius, filter_items_within_bounds,
};
use trantech_geo::{BoundingBox, Coordinate, ItemDistance, LocationItem};
use trantech_telemetry::{timed_span, Timer};

/// Filters applied to a nearest search
#[derive(Debug, Clone)]
pub struct Options {
    pub radius_km: Option<f64>,
    pub limit: usize,
    /// (north-east, south-west)
    pub bounds: Option<(Coordinate, Coordinate)>,
}

/// JSON output for nearest
#[derive(Debug, Serialize)]
struct JsonNearestOutput<'a> {
    origin: &'a Coordinate,
    total_items: usize,
    count: usize,
    results: Vec<ItemDistance>,
}

/// Run nearest command
pub fn run(origin: &Coordinate, file: &Path, options: &Options, json: bool) -> Result<ExitCode> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let items: Vec<LocationItem> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse items in {}", file.display()))?;

    let timer = Timer::start("nearest");
    let results = rank(origin, &items, options)?;
    let elapsed = timer.stop();

    if json {
        print_json(&JsonNearestOutput {
            origin,
            total_items: items.len(),
            count: results.len(),
            results,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    Status::header("Nearest items");

    if results.is_empty() {
        Status::info("No items matched");
        return Ok(ExitCode::SUCCESS);
    }

    println!("  {:<10} {}", "ID".dimmed(), "Distance".dimmed());
    println!("  {}", "─".repeat(30).dimmed());
    for result in &results {
        println!("  {:<10} {}", result.id, format_kilometers(result.distance));
    }

    println!();
    println!(
        "  Ranked {} of {} in {}",
        format_count(results.len(), "item", "items").green(),
        items.len(),
        format_duration(elapsed)
    );
    println!();

    Ok(ExitCode::SUCCESS)
}

fn rank(origin: &Coordinate, items: &[LocationItem], options: &Options) -> Result<Vec<ItemDistance>> {
    timed_span!("rank", items = items.len());

    let filtered;
    let items = match options.bounds {
        Some((north_east, south_west)) => {
            let bbox = BoundingBox::new(north_east, south_west);
            filtered = filter_items_within_bounds(items, &bbox)?
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            &filtered[..]
        }
        None => items,
    };

    let mut results = match options.radius_km {
        Some(radius) => calculate_distances_within_radius(origin, items, radius)?,
        None => calculate_distances_sorted(origin, items, None)?,
    };
    // Items with unknown locations are never "near"
    results.retain(|r| r.distance.is_finite());
    results.truncate(options.limit);

    Ok(results)
}
