//! Geographic coordinate utilities for Trantech.
//!
//! This crate provides:
//! - Coordinate validation
//! - Haversine distance in kilometers, miles and meters
//! - Initial bearing and great-circle midpoint
//! - Decimal and degrees-minutes-seconds formatting
//! - Bounding box containment
//! - Location parsing (GeoJSON, WKT, `{latitude, longitude}` objects)
//! - Batch processing with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use trantech_geo::{calculate_distance, Coordinate};
//!
//! let london = Coordinate::new(51.5074, -0.1278);
//! let paris = Coordinate::new(48.8566, 2.3522);
//!
//! let distance = calculate_distance(&london, &paris).unwrap();
//! assert!(distance.kilometers > 340.0 && distance.kilometers < 350.0);
//! ```

mod bearing;
mod bounds;
mod error;
mod format;
mod haversine;
mod midpoint;
mod parse;
pub mod batch;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{calculate_distances, ItemDistance, LocationItem};
pub use bearing::{calculate_bearing, compass_point};
pub use bounds::{is_within_bounds, BoundingBox};
pub use error::{Argument, GeoError, GeoErrorCode, Result};
pub use format::{format_coordinates, CoordinateFormat};
pub use haversine::{
    calculate_distance, haversine_distance, haversine_distance_meters, DistanceResult,
    EARTH_RADIUS_KM, EARTH_RADIUS_M, KM_TO_MILES,
};
pub use midpoint::find_midpoint;
pub use parse::{is_valid_coordinates, parse_location, parse_wkt_point};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range check happens here; use [`Coordinate::is_valid`] or one of
    /// the validating operations.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both values are finite and within range.
    ///
    /// Boundaries are inclusive, so the poles and the antimeridian are valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Checks validity, reporting `arg` as the offending argument.
    #[inline]
    pub(crate) fn validate(&self, arg: Argument) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoError::InvalidInput(arg))
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Validates an ordered pair, checking the first coordinate before the second.
#[inline]
pub(crate) fn validate_pair(first: &Coordinate, second: &Coordinate) -> Result<()> {
    first.validate(Argument::First)?;
    second.validate(Argument::Second)
}

/// Rounds `value` to `decimals` places.
#[inline]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
