//! Initial bearing between two coordinates.

use crate::{round_to, validate_pair, Coordinate, Result};

/// Sixteen-wind compass rose, clockwise from north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Calculates the initial compass bearing from `from` towards `to`.
///
/// The result is in degrees, rounded to 2 decimals, within `[0, 360)`:
/// 0 is north, 90 east, 180 south and 270 west.
///
/// # Errors
/// [`GeoError::InvalidInput`](crate::GeoError::InvalidInput) naming the first
/// or second argument.
///
/// # Example
/// ```
/// use trantech_geo::{calculate_bearing, Coordinate};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let east = Coordinate::new(0.0, 10.0);
/// assert_eq!(calculate_bearing(&origin, &east).unwrap(), 90.0);
/// ```
pub fn calculate_bearing(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    validate_pair(from, to)?;

    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();
    let d_lon = lon2 - lon1;

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    let bearing = round_to(bearing, 2);

    // 359.996 rounds up to a full turn
    Ok(if bearing >= 360.0 { 0.0 } else { bearing })
}

/// Names the sixteen-wind compass point closest to `bearing` degrees.
///
/// Any finite angle is accepted and normalised first.
pub fn compass_point(bearing: f64) -> &'static str {
    let normalized = bearing.rem_euclid(360.0);
    let index = ((normalized / 22.5).round() as usize) % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}
