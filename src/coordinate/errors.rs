//! Custom error types for coordinate validation

use std::fmt;

use super::hemisphere::Hemisphere;
use super::maidenhead::GridStage;

/// Errors raised when a coordinate cannot be constructed or converted
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Latitude outside -90..=90
    LatitudeOutOfRange(f64),
    /// Longitude outside -180..=180
    LongitudeOutOfRange(f64),
    /// A minutes or seconds value outside 0..60
    MinutesSecondsOutOfRange {
        /// Which of the four values failed
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Latitude degrees outside 0..=90
    LatitudeDegreesOutOfRange(f64),
    /// Longitude degrees outside 0..=180
    LongitudeDegreesOutOfRange(f64),
    /// Latitude hemisphere other than N or S
    InvalidLatitudeHemisphere(Hemisphere),
    /// Longitude hemisphere other than E or W
    InvalidLongitudeHemisphere(Hemisphere),
    /// Text that is not one of N, S, E, W
    UnknownHemisphere(String),
    /// Grid locator whose length is not 2, 4, 6 or 8
    InvalidGridLength(usize),
    /// Grid locator pair outside the alphabet of its stage
    InvalidGridCharacters {
        stage: GridStage,
        pair: String,
    },
    /// Locator precision outside 1..=4 character pairs
    PrecisionOutOfRange(usize),
    /// Coordinate text that matches none of the accepted notations
    InvalidCoordinateText(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::LatitudeOutOfRange(v) =>
                write!(f, "Latitude must be between -90 and +90 degrees, got {}", v),
            ValidationError::LongitudeOutOfRange(v) =>
                write!(f, "Longitude must be between -180 and +180 degrees, got {}", v),
            ValidationError::MinutesSecondsOutOfRange { field, value } =>
                write!(f, "Minutes and seconds must be in [0, 60), {} is {}", field, value),
            ValidationError::LatitudeDegreesOutOfRange(v) =>
                write!(f, "Latitude degrees must be between 0 and 90, got {}", v),
            ValidationError::LongitudeDegreesOutOfRange(v) =>
                write!(f, "Longitude degrees must be between 0 and 180, got {}", v),
            ValidationError::InvalidLatitudeHemisphere(h) =>
                write!(f, "Latitude hemisphere must be 'N' or 'S', got '{}'", h),
            ValidationError::InvalidLongitudeHemisphere(h) =>
                write!(f, "Longitude hemisphere must be 'E' or 'W', got '{}'", h),
            ValidationError::UnknownHemisphere(s) =>
                write!(f, "Unknown hemisphere '{}', expected one of N, S, E, W", s),
            ValidationError::InvalidGridLength(len) =>
                write!(f, "Grid must be 2, 4, 6, or 8 characters, got {}", len),
            ValidationError::InvalidGridCharacters { stage, pair } =>
                write!(f, "Invalid {} characters '{}' (expected {})", stage.name(), pair, stage.alphabet()),
            ValidationError::PrecisionOutOfRange(p) =>
                write!(f, "Precision must be between 1 and 4 character pairs, got {}", p),
            ValidationError::InvalidCoordinateText(s) =>
                write!(f, "Cannot parse coordinate from '{}'", s),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for coordinate operations
pub type ValidationResult<T> = Result<T, ValidationError>;
