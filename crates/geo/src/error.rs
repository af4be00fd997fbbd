//! Error types for the geo crate.

use std::fmt;
use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Which argument of an operation failed coordinate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// First coordinate of an ordered pair
    First,
    /// Second coordinate of an ordered pair
    Second,
    /// A lone coordinate, or one of an unordered set
    Any,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::First => write!(f, "Invalid first coordinate"),
            Argument::Second => write!(f, "Invalid second coordinate"),
            Argument::Any => write!(f, "Invalid coordinates"),
        }
    }
}

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A coordinate is NaN, infinite or out of range
    #[error("{0}")]
    InvalidInput(Argument),

    /// Invalid WKT format
    #[error("Invalid WKT format: {0}")]
    InvalidWkt(String),

    /// Unknown coordinate output format
    #[error("Unknown coordinate format: {0} (expected \"decimal\" or \"dms\")")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with downstream error reporting.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid WKT format
    InvalidWkt = 10001,
    /// Invalid coordinate values
    InvalidCoordinate = 10002,
    /// JSON parsing error
    JsonParsing = 10003,
    /// Unknown output format
    InvalidFormat = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidWkt(_) => GeoErrorCode::InvalidWkt,
            GeoError::InvalidInput(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
            GeoError::InvalidFormat(_) => GeoErrorCode::InvalidFormat,
        }
    }

    /// Returns the offending argument when this is a validation failure.
    pub fn argument(&self) -> Option<Argument> {
        match self {
            GeoError::InvalidInput(arg) => Some(*arg),
            _ => None,
        }
    }
}
