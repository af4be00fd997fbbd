//! Axis-aligned bounding box containment.
//!
//! Boxes are flat latitude/longitude rectangles. A box whose east edge lies
//! west of its west edge (one meant to span the antimeridian) is not wrapped;
//! it simply contains nothing off its own edges.

use crate::{Argument, Coordinate, Result};
use serde::{Deserialize, Serialize};

/// Rectangle given by its north-east and south-west corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north_east: Coordinate,
    pub south_west: Coordinate,
}

impl BoundingBox {
    pub const fn new(north_east: Coordinate, south_west: Coordinate) -> Self {
        Self { north_east, south_west }
    }

    /// Returns true if `coord` lies inside or on the edge of the box.
    ///
    /// # Errors
    /// [`GeoError::InvalidInput`](crate::GeoError::InvalidInput) with the
    /// generic "Invalid coordinates" message if any corner or `coord` is invalid.
    pub fn contains(&self, coord: &Coordinate) -> Result<bool> {
        is_within_bounds(coord, &self.north_east, &self.south_west)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.north_east.validate(Argument::Any)?;
        self.south_west.validate(Argument::Any)
    }

    #[inline]
    pub(crate) fn contains_unchecked(&self, coord: &Coordinate) -> bool {
        coord.latitude <= self.north_east.latitude
            && coord.latitude >= self.south_west.latitude
            && coord.longitude <= self.north_east.longitude
            && coord.longitude >= self.south_west.longitude
    }
}

/// Checks whether `coord` lies within the box spanned by `north_east` and
/// `south_west`, edges inclusive.
///
/// # Example
/// ```
/// use trantech_geo::{is_within_bounds, Coordinate};
///
/// let ne = Coordinate::new(50.0, 10.0);
/// let sw = Coordinate::new(40.0, 0.0);
/// assert!(is_within_bounds(&Coordinate::new(45.0, 5.0), &ne, &sw).unwrap());
/// assert!(!is_within_bounds(&Coordinate::new(51.0, 5.0), &ne, &sw).unwrap());
/// ```
pub fn is_within_bounds(
    coord: &Coordinate,
    north_east: &Coordinate,
    south_west: &Coordinate,
) -> Result<bool> {
    let bbox = BoundingBox::new(*north_east, *south_west);
    coord.validate(Argument::Any)?;
    bbox.validate()?;
    Ok(bbox.contains_unchecked(coord))
}
