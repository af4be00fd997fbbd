//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::{round_to, validate_pair, Coordinate, Result};
use serde::{Deserialize, Serialize};

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Statute miles per kilometer.
pub const KM_TO_MILES: f64 = 0.621371;

/// One distance expressed in three units, each rounded on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Kilometers, rounded to 3 decimals
    pub kilometers: f64,
    /// Statute miles, rounded to 3 decimals
    pub miles: f64,
    /// Meters, rounded to the nearest integer
    pub meters: u64,
}

impl DistanceResult {
    /// Builds a rounded result from an unrounded kilometer value.
    pub fn from_kilometers(km: f64) -> Self {
        Self {
            kilometers: round_to(km, 3),
            miles: round_to(km * KM_TO_MILES, 3),
            meters: (km * 1000.0).round() as u64,
        }
    }
}

/// Calculates the great-circle distance between two validated coordinates.
///
/// # Errors
/// [`GeoError::InvalidInput`](crate::GeoError::InvalidInput) naming the first
/// or second argument, checked in that order.
///
/// # Example
/// ```
/// use trantech_geo::{calculate_distance, Coordinate};
///
/// let new_york = Coordinate::new(40.7128, -74.0060);
/// let los_angeles = Coordinate::new(34.0522, -118.2437);
///
/// let distance = calculate_distance(&new_york, &los_angeles).unwrap();
/// assert!(distance.kilometers > 3900.0 && distance.kilometers < 4000.0);
/// ```
pub fn calculate_distance(from: &Coordinate, to: &Coordinate) -> Result<DistanceResult> {
    validate_pair(from, to)?;
    Ok(DistanceResult::from_kilometers(haversine_distance(from, to)))
}

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Unvalidated and unrounded; use [`calculate_distance`] at API boundaries.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in meters
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}
