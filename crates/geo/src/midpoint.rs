//! Great-circle midpoint.

use crate::{round_to, validate_pair, Coordinate, Result};

/// Finds the point halfway between two coordinates along their great circle.
///
/// Latitude and longitude are each rounded to 6 decimals. When the pair
/// straddles the antimeridian the longitude is wrapped back into
/// `[-180, 180]`. Unwrapped implementations of the same formula report such
/// midpoints outside that range (e.g. `180.2` where this returns `-179.8`);
/// both name the same point.
///
/// # Errors
/// [`GeoError::InvalidInput`](crate::GeoError::InvalidInput) naming the first
/// or second argument.
///
/// # Example
/// ```
/// use trantech_geo::{find_midpoint, Coordinate};
///
/// let mid = find_midpoint(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 10.0)).unwrap();
/// assert!((mid.longitude - 5.0).abs() < 1e-4);
/// ```
pub fn find_midpoint(a: &Coordinate, b: &Coordinate) -> Result<Coordinate> {
    validate_pair(a, b)?;

    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();
    let d_lon = lon2 - lon1;

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let lat3 = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
    let lon3 = lon1 + by.atan2(lat1.cos() + bx);

    Ok(Coordinate::new(
        round_to(lat3.to_degrees(), 6),
        wrap_longitude(round_to(lon3.to_degrees(), 6)),
    ))
}

/// Wraps an already rounded longitude into `[-180, 180]`.
///
/// Rounding first keeps `180.00000000000003` from flipping to `-180`.
#[inline]
fn wrap_longitude(lon: f64) -> f64 {
    if lon > 180.0 {
        round_to(lon - 360.0, 6)
    } else if lon < -180.0 {
        round_to(lon + 360.0, 6)
    } else {
        lon
    }
}
