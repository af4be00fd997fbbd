//! Location parsing utilities.
//!
//! Supports parsing coordinates from:
//! - GeoJSON format: `{"type": "Point", "coordinates": [lng, lat]}`
//! - WKT format: `POINT(lng lat)`
//! - Plain objects: `{"latitude": lat, "longitude": lng}`
//! - Text: `"lat, lng"` via [`str::parse`]

use crate::{Argument, Coordinate, GeoError, Result};
use serde_json::Value;
use std::str::FromStr;

/// Parse a location from a JSON value.
///
/// No range check is applied; combine with [`Coordinate::is_valid`].
///
/// # Returns
/// * `Some(Coordinate)` if parsing succeeds
/// * `None` if the value is null or cannot be parsed
///
/// # Example
/// ```
/// use trantech_geo::parse_location;
/// use serde_json::json;
///
/// // GeoJSON format
/// let geojson = json!({"type": "Point", "coordinates": [-0.1278, 51.5074]});
/// let coord = parse_location(&geojson).unwrap();
/// assert!((coord.latitude - 51.5074).abs() < 0.0001);
///
/// // WKT format
/// let wkt = json!("POINT(-0.1278 51.5074)");
/// let coord = parse_location(&wkt).unwrap();
/// assert!((coord.latitude - 51.5074).abs() < 0.0001);
/// ```
pub fn parse_location(value: &Value) -> Option<Coordinate> {
    if value.is_null() {
        return None;
    }

    if value.is_object() {
        // GeoJSON object
        if let Some(coords) = value.get("coordinates").and_then(|c| c.as_array()) {
            if coords.len() >= 2 {
                let lng = coords[0].as_f64()?;
                let lat = coords[1].as_f64()?;
                return Some(Coordinate::new(lat, lng));
            }
        }
        return coordinate_from_object(value);
    }

    if let Some(wkt) = value.as_str() {
        return parse_wkt_point(wkt).ok();
    }

    None
}

/// Returns true if `value` is an object with numeric `latitude` and
/// `longitude` fields that pass [`Coordinate::is_valid`].
///
/// Null, missing fields and non-numeric fields (such as strings) are all
/// invalid.
///
/// # Example
/// ```
/// use trantech_geo::is_valid_coordinates;
/// use serde_json::json;
///
/// assert!(is_valid_coordinates(&json!({"latitude": 90, "longitude": -180})));
/// assert!(!is_valid_coordinates(&json!({"latitude": "invalid", "longitude": 0})));
/// assert!(!is_valid_coordinates(&json!(null)));
/// ```
pub fn is_valid_coordinates(value: &Value) -> bool {
    coordinate_from_object(value).is_some_and(|c| c.is_valid())
}

fn coordinate_from_object(value: &Value) -> Option<Coordinate> {
    let lat = value.get("latitude")?.as_f64()?;
    let lng = value.get("longitude")?.as_f64()?;
    Some(Coordinate::new(lat, lng))
}

/// Parse a WKT POINT string.
///
/// Format: `POINT(longitude latitude)`
pub fn parse_wkt_point(wkt: &str) -> Result<Coordinate> {
    let wkt = wkt.trim();

    if !wkt.starts_with("POINT(") && !wkt.starts_with("POINT (") {
        return Err(GeoError::InvalidWkt(format!("Expected POINT, got: {}", wkt)));
    }

    let start = wkt.find('(').ok_or_else(|| GeoError::InvalidWkt("Missing '('".into()))?;
    let end = wkt.find(')').ok_or_else(|| GeoError::InvalidWkt("Missing ')'".into()))?;

    if start >= end {
        return Err(GeoError::InvalidWkt("Invalid parentheses".into()));
    }

    let parts: Vec<&str> = wkt[start + 1..end].split_whitespace().collect();

    if parts.len() != 2 {
        return Err(GeoError::InvalidWkt(format!(
            "Expected 2 coordinates, got {}",
            parts.len()
        )));
    }

    let lng: f64 = parts[0]
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid longitude: {}", parts[0])))?;
    let lat: f64 = parts[1]
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid latitude: {}", parts[1])))?;

    Ok(Coordinate::new(lat, lng))
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parses `"lat, lng"` (whitespace around the comma optional).
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or(GeoError::InvalidInput(Argument::Any))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidInput(Argument::Any))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidInput(Argument::Any))?;
        Ok(Coordinate::new(lat, lng))
    }
}
