//! Human-readable coordinate formatting.
//!
//! Two styles are supported:
//! - Decimal: `40.712800, -74.006000`
//! - Degrees, minutes, seconds: `40°42'46.08"N 74°0'21.6"W`

use crate::{round_to, Argument, Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output style for [`format_coordinates`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFormat {
    /// Two fixed-point numbers with 6 decimals
    #[default]
    Decimal,
    /// Degrees, minutes and seconds with hemisphere letters
    Dms,
}

impl CoordinateFormat {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateFormat::Decimal => "decimal",
            CoordinateFormat::Dms => "dms",
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(CoordinateFormat::Decimal),
            "dms" => Ok(CoordinateFormat::Dms),
            other => Err(GeoError::InvalidFormat(other.to_string())),
        }
    }
}

/// Formats a coordinate as text.
///
/// # Errors
/// [`GeoError::InvalidInput`] with the generic "Invalid coordinates" message.
///
/// # Example
/// ```
/// use trantech_geo::{format_coordinates, Coordinate, CoordinateFormat};
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// assert_eq!(
///     format_coordinates(&nyc, CoordinateFormat::Decimal).unwrap(),
///     "40.712800, -74.006000"
/// );
/// ```
pub fn format_coordinates(coord: &Coordinate, format: CoordinateFormat) -> Result<String> {
    coord.validate(Argument::Any)?;

    Ok(match format {
        // `+ 0.0` turns -0.0 into 0.0 so it never prints with a sign
        CoordinateFormat::Decimal => format!(
            "{:.6}, {:.6}",
            coord.latitude + 0.0,
            coord.longitude + 0.0
        ),
        CoordinateFormat::Dms => {
            let lat_dir = if coord.latitude >= 0.0 { 'N' } else { 'S' };
            let lon_dir = if coord.longitude >= 0.0 { 'E' } else { 'W' };
            format!(
                "{}{} {}{}",
                Dms::from_degrees(coord.latitude),
                lat_dir,
                Dms::from_degrees(coord.longitude),
                lon_dir
            )
        }
    })
}

/// Unsigned degrees/minutes/seconds split of one angle.
struct Dms {
    degrees: u32,
    minutes: u32,
    seconds: f64,
}

impl Dms {
    fn from_degrees(value: f64) -> Self {
        let abs = value.abs();
        let degrees = abs.floor();
        let minutes = ((abs - degrees) * 60.0).floor();
        let seconds = round_to(((abs - degrees) * 60.0 - minutes) * 60.0, 2);

        Self {
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
        }
    }
}

impl fmt::Display for Dms {
    // `{}` on f64 prints the shortest exact form: 0, 7.5, 12.34
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'{}\"", self.degrees, self.minutes, self.seconds)
    }
}
