//! Batch distance calculations with optional parallelism.
//!
//! Computes distances from one origin to many located items, e.g. to rank
//! nearby listings for a user.

use crate::{
    calculate_distance, parse_location, Argument, BoundingBox, Coordinate, Result,
};
use serde::{Deserialize, Serialize};

/// Distance from the origin to a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDistance {
    /// The item ID
    pub id: i64,
    /// Distance in kilometers, rounded to 3 decimals (Infinity if location is invalid)
    pub distance: f64,
}

/// Input item for batch distance calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationItem {
    /// Item ID
    pub id: i64,
    /// Location as GeoJSON, WKT or a `{latitude, longitude}` object
    pub location: serde_json::Value,
}

/// Calculate distances from `origin` to every item.
///
/// Output order matches input order.
///
/// # Errors
/// [`GeoError::InvalidInput`](crate::GeoError::InvalidInput) for the first
/// argument if `origin` is invalid. Bad item locations never fail the batch.
///
/// # Example
/// ```
/// use trantech_geo::{calculate_distances, Coordinate, LocationItem};
/// use serde_json::json;
///
/// let items = vec![
///     LocationItem { id: 1, location: json!({"coordinates": [2.3522, 48.8566]}) },
///     LocationItem { id: 2, location: json!("POINT(-74.0060 40.7128)") },
/// ];
///
/// let results = calculate_distances(&Coordinate::new(51.5074, -0.1278), &items).unwrap();
/// assert_eq!(results.len(), 2);
/// ```
pub fn calculate_distances(origin: &Coordinate, items: &[LocationItem]) -> Result<Vec<ItemDistance>> {
    origin.validate(Argument::First)?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(items
            .par_iter()
            .map(|item| calculate_single_distance(origin, item))
            .collect())
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok(items
            .iter()
            .map(|item| calculate_single_distance(origin, item))
            .collect())
    }
}

/// Calculate distances and return items sorted by distance (closest first).
///
/// Items with invalid locations sort last. `max_results` of `None` keeps all.
pub fn calculate_distances_sorted(
    origin: &Coordinate,
    items: &[LocationItem],
    max_results: Option<usize>,
) -> Result<Vec<ItemDistance>> {
    let mut results = calculate_distances(origin, items)?;

    sort_by_distance(&mut results);

    if let Some(max) = max_results {
        results.truncate(max);
    }

    Ok(results)
}

/// Calculate distances and keep only items within `radius_km`, closest first.
pub fn calculate_distances_within_radius(
    origin: &Coordinate,
    items: &[LocationItem],
    radius_km: f64,
) -> Result<Vec<ItemDistance>> {
    let mut results = calculate_distances(origin, items)?;

    results.retain(|r| r.distance <= radius_km);
    sort_by_distance(&mut results);

    Ok(results)
}

/// Returns the ids of items whose location lies inside `bbox`, in input order.
///
/// Ids are not required to be unique; use [`filter_items_within_bounds`] to
/// keep the matching items themselves.
///
/// # Errors
/// [`GeoError::InvalidInput`](crate::GeoError::InvalidInput) if either corner
/// of the box is invalid. Items with invalid locations are skipped.
pub fn filter_within_bounds(items: &[LocationItem], bbox: &BoundingBox) -> Result<Vec<i64>> {
    Ok(filter_items_within_bounds(items, bbox)?
        .into_iter()
        .map(|item| item.id)
        .collect())
}

/// Returns the items whose own location lies inside `bbox`, in input order.
///
/// # Errors
/// [`GeoError::InvalidInput`](crate::GeoError::InvalidInput) if either corner
/// of the box is invalid. Items with invalid locations are skipped.
pub fn filter_items_within_bounds<'a>(
    items: &'a [LocationItem],
    bbox: &BoundingBox,
) -> Result<Vec<&'a LocationItem>> {
    bbox.validate()?;

    Ok(items
        .iter()
        .filter(|item| {
            valid_location(item).is_some_and(|coord| bbox.contains_unchecked(&coord))
        })
        .collect())
}

fn sort_by_distance(results: &mut [ItemDistance]) {
    // total_cmp puts Infinity after every finite distance
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

fn valid_location(item: &LocationItem) -> Option<Coordinate> {
    match parse_location(&item.location) {
        Some(coord) if coord.is_valid() => Some(coord),
        _ => {
            tracing::debug!(id = item.id, location = %item.location, "Skipping invalid location");
            None
        }
    }
}

#[inline]
fn calculate_single_distance(origin: &Coordinate, item: &LocationItem) -> ItemDistance {
    let distance = valid_location(item)
        .and_then(|coord| calculate_distance(origin, &coord).ok())
        .map(|d| d.kilometers)
        .unwrap_or(f64::INFINITY);

    ItemDistance {
        id: item.id,
        distance,
    }
}
