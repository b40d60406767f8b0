//! Coordinate structure for representing a point on the globe

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::dms::Dms;
use super::errors::{ValidationError, ValidationResult};
use super::hemisphere::Hemisphere;
use super::maidenhead;

/// A validated geographic position in decimal degrees
///
/// Latitude is positive north, longitude positive east. Values can only be
/// created through the `from_*` constructors, which enforce
/// `-90 <= lat <= 90` and `-180 <= lon <= 180`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees
    ///
    /// # Arguments
    /// * `lat` - Latitude in decimal degrees (-90 to +90)
    /// * `lon` - Longitude in decimal degrees (-180 to +180)
    pub fn from_decimal_degrees(lat: f64, lon: f64) -> ValidationResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::LongitudeOutOfRange(lon));
        }
        Ok(Coordinate { lat, lon })
    }

    /// Create a coordinate from degrees, minutes and seconds
    ///
    /// All four minute and second values are checked before the degrees, so
    /// any malformed part rejects the whole input. The hemisphere replaces
    /// the sign: `S` negates the latitude, `W` the longitude.
    ///
    /// # Arguments
    /// * `lat_deg` - Latitude degrees (0 to 90)
    /// * `lat_min` - Latitude minutes (0 to <60)
    /// * `lat_sec` - Latitude seconds (0 to <60)
    /// * `lon_deg` - Longitude degrees (0 to 180)
    /// * `lon_min` - Longitude minutes (0 to <60)
    /// * `lon_sec` - Longitude seconds (0 to <60)
    /// * `lat_hemisphere` - North or South
    /// * `lon_hemisphere` - East or West
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
    ) -> ValidationResult<Self> {
        let minutes_seconds = [
            ("latitude minutes", lat_min),
            ("latitude seconds", lat_sec),
            ("longitude minutes", lon_min),
            ("longitude seconds", lon_sec),
        ];
        if let Some(&(field, value)) = minutes_seconds.iter()
            .find(|(_, v)| !(0.0..60.0).contains(v)) {
            return Err(ValidationError::MinutesSecondsOutOfRange { field, value });
        }
        if !(0.0..=90.0).contains(&lat_deg) {
            return Err(ValidationError::LatitudeDegreesOutOfRange(lat_deg));
        }
        if !(0.0..=180.0).contains(&lon_deg) {
            return Err(ValidationError::LongitudeDegreesOutOfRange(lon_deg));
        }
        if !lat_hemisphere.is_latitude() {
            return Err(ValidationError::InvalidLatitudeHemisphere(lat_hemisphere));
        }
        if lon_hemisphere.is_latitude() {
            return Err(ValidationError::InvalidLongitudeHemisphere(lon_hemisphere));
        }

        let lat = Dms::new(lat_deg, lat_min, lat_sec, lat_hemisphere).to_decimal();
        let lon = Dms::new(lon_deg, lon_min, lon_sec, lon_hemisphere).to_decimal();

        debug!("Converted {}°{}'{}\"{} {}°{}'{}\"{} to lat={}, lon={}",
               lat_deg, lat_min, lat_sec, lat_hemisphere,
               lon_deg, lon_min, lon_sec, lon_hemisphere, lat, lon);

        Ok(Coordinate { lat, lon })
    }

    /// Create a coordinate from a latitude and a longitude DMS value
    pub fn from_dms(lat: &Dms, lon: &Dms) -> ValidationResult<Self> {
        Coordinate::from_deg_min_sec(
            lat.degrees, lat.minutes, lat.seconds,
            lon.degrees, lon.minutes, lon.seconds,
            lat.hemisphere, lon.hemisphere,
        )
    }

    /// Create a coordinate from a Maidenhead grid locator
    ///
    /// The result is the south-west corner of the named cell.
    ///
    /// # Arguments
    /// * `grid` - Locator of 2, 4, 6 or 8 characters, case-insensitive
    pub fn from_maidenhead(grid: &str) -> ValidationResult<Self> {
        let (lat, lon) = maidenhead::decode(grid)?;
        Ok(Coordinate { lat, lon })
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Convert to degrees, minutes and seconds
    ///
    /// # Returns
    /// `(latitude, longitude)`, with truncated degrees and minutes
    pub fn to_deg_min_sec(&self) -> (Dms, Dms) {
        (Dms::from_decimal(self.lat, true), Dms::from_decimal(self.lon, false))
    }

    /// Convert to a Maidenhead grid locator
    ///
    /// # Arguments
    /// * `precision` - Number of character pairs (1-4):
    ///   1 = field, 2 = square, 3 = subsquare, 4 = extended square
    ///
    /// Latitude 90 falls in the top row (field letter `R`), so the north pole
    /// encodes as `JR09AX09` at full precision.
    pub fn to_maidenhead(&self, precision: usize) -> ValidationResult<String> {
        maidenhead::encode(self.lat, self.lon, precision)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f.precision().unwrap_or(6);
        write!(f, "{:.places$}, {:.places$}", self.lat, self.lon, places = places)
    }
}

impl FromStr for Coordinate {
    type Err = ValidationError;

    /// Parse `"lat,lon"` in decimal degrees or a DMS pair such as
    /// `37°54'06.08"N 121°56'18.32"W`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::coordinate_utils::parse_coordinate(
            s, Hemisphere::DEFAULT_LATITUDE, Hemisphere::DEFAULT_LONGITUDE)
    }
}
