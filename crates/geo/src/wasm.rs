//! WASM bindings for the geo crate.
//!
//! These bindings allow the geo crate to be used from JavaScript/TypeScript
//! in both browser and Deno environments. Failures surface as string
//! `JsValue`s carrying the same messages as [`GeoError`](crate::GeoError).

use crate::{
    batch::LocationItem, calculate_bearing, calculate_distance, calculate_distances,
    find_midpoint, format_coordinates, Coordinate, CoordinateFormat,
};
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Check whether a latitude/longitude pair is valid.
#[wasm_bindgen]
pub fn is_valid(lat: f64, lng: f64) -> bool {
    Coordinate::new(lat, lng).is_valid()
}

/// Calculate distance between two coordinates.
///
/// # Returns
/// JSON string `{"kilometers", "miles", "meters"}`
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<String, JsValue> {
    let result = calculate_distance(&Coordinate::new(lat1, lng1), &Coordinate::new(lat2, lng2))
        .map_err(to_js)?;
    serde_json::to_string(&result).map_err(to_js)
}

/// Initial bearing in degrees from the first point to the second.
#[wasm_bindgen]
pub fn bearing(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64, JsValue> {
    calculate_bearing(&Coordinate::new(lat1, lng1), &Coordinate::new(lat2, lng2)).map_err(to_js)
}

/// Great-circle midpoint.
///
/// # Returns
/// JSON string `{"latitude", "longitude"}`
#[wasm_bindgen]
pub fn midpoint(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<String, JsValue> {
    let mid = find_midpoint(&Coordinate::new(lat1, lng1), &Coordinate::new(lat2, lng2))
        .map_err(to_js)?;
    serde_json::to_string(&mid).map_err(to_js)
}

/// Format a coordinate; `format` is `"decimal"` or `"dms"`.
#[wasm_bindgen]
pub fn format_coordinate(lat: f64, lng: f64, format: &str) -> Result<String, JsValue> {
    let format: CoordinateFormat = format.parse().map_err(to_js)?;
    format_coordinates(&Coordinate::new(lat, lng), format).map_err(to_js)
}

/// Bounding box containment, edges inclusive.
#[wasm_bindgen]
pub fn is_within_bounds(
    lat: f64,
    lng: f64,
    ne_lat: f64,
    ne_lng: f64,
    sw_lat: f64,
    sw_lng: f64,
) -> Result<bool, JsValue> {
    crate::is_within_bounds(
        &Coordinate::new(lat, lng),
        &Coordinate::new(ne_lat, ne_lng),
        &Coordinate::new(sw_lat, sw_lng),
    )
    .map_err(to_js)
}

/// Calculate distances from a user location to multiple items.
///
/// # Arguments
/// * `items_json` - JSON array of `{id, location}` objects
///
/// # Returns
/// JSON array of `{id, distance}`; unparsable locations get `null` distance
#[wasm_bindgen]
pub fn calculate_item_distances(user_lat: f64, user_lng: f64, items_json: &str) -> Result<String, JsValue> {
    item_distances_json(&Coordinate::new(user_lat, user_lng), items_json).map_err(to_js)
}

fn item_distances_json(origin: &Coordinate, items_json: &str) -> crate::Result<String> {
    let items: Vec<LocationItem> = serde_json::from_str(items_json)?;
    let results = calculate_distances(origin, &items)?;
    Ok(serde_json::to_string(&results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoError;

    #[test]
    fn test_item_distances_json() {
        let json = item_distances_json(
            &Coordinate::new(51.5074, -0.1278),
            r#"[{"id": 1, "location": "POINT(2.3522 48.8566)"}, {"id": 2, "location": null}]"#,
        )
        .unwrap();
        assert!(json.contains(r#""id":1"#));
        assert!(json.contains(r#""distance":null"#));
    }

    #[test]
    fn test_item_distances_bad_json() {
        let err = item_distances_json(&Coordinate::new(0.0, 0.0), "[{").unwrap_err();
        assert!(matches!(err, GeoError::JsonError(_)));
    }
}
