//! Free-function interface to the coordinate conversions
//!
//! These mirror the associated functions on [`Coordinate`] for callers that
//! prefer a flat API.

use crate::coordinate::{Coordinate, Dms, Hemisphere, ValidationResult};

/// Create a coordinate from decimal degrees
pub fn from_decimal_degrees(lat: f64, lon: f64) -> ValidationResult<Coordinate> {
    Coordinate::from_decimal_degrees(lat, lon)
}

/// Create a coordinate from degrees, minutes and seconds
///
/// Pass [`Hemisphere::DEFAULT_LATITUDE`] and [`Hemisphere::DEFAULT_LONGITUDE`]
/// for the usual N/W defaults.
#[allow(clippy::too_many_arguments)]
pub fn from_deg_min_sec(
    lat_deg: f64,
    lat_min: f64,
    lat_sec: f64,
    lon_deg: f64,
    lon_min: f64,
    lon_sec: f64,
    lat_hemisphere: Hemisphere,
    lon_hemisphere: Hemisphere,
) -> ValidationResult<Coordinate> {
    Coordinate::from_deg_min_sec(lat_deg, lat_min, lat_sec,
                                 lon_deg, lon_min, lon_sec,
                                 lat_hemisphere, lon_hemisphere)
}

/// Create a coordinate from a Maidenhead grid locator
pub fn from_maidenhead(grid: &str) -> ValidationResult<Coordinate> {
    Coordinate::from_maidenhead(grid)
}

/// Convert a coordinate to `(latitude, longitude)` in DMS
pub fn to_deg_min_sec(coordinate: &Coordinate) -> (Dms, Dms) {
    coordinate.to_deg_min_sec()
}

/// Convert a coordinate to a grid locator of `precision` character pairs
pub fn to_maidenhead(coordinate: &Coordinate, precision: usize) -> ValidationResult<String> {
    coordinate.to_maidenhead(precision)
}
