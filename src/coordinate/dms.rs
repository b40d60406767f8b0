//! Degrees/minutes/seconds representation

use std::fmt;

use super::hemisphere::Hemisphere;

/// Default number of decimals shown for seconds
pub const DEFAULT_SECONDS_DECIMALS: u32 = 2;

/// One axis of a coordinate in degrees, minutes and seconds
///
/// The values are unsigned; the sign lives in the hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole or fractional degrees
    pub degrees: f64,
    /// Minutes, 0 <= minutes < 60
    pub minutes: f64,
    /// Seconds, 0 <= seconds < 60
    pub seconds: f64,
    /// Hemisphere letter
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Create a new DMS value
    pub fn new(degrees: f64, minutes: f64, seconds: f64, hemisphere: Hemisphere) -> Self {
        Dms { degrees, minutes, seconds, hemisphere }
    }

    /// Create a latitude in the default (northern) hemisphere
    pub fn latitude(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Dms::new(degrees, minutes, seconds, Hemisphere::DEFAULT_LATITUDE)
    }

    /// Create a longitude in the default (western) hemisphere
    pub fn longitude(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Dms::new(degrees, minutes, seconds, Hemisphere::DEFAULT_LONGITUDE)
    }

    /// Replace the hemisphere
    pub fn with_hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.hemisphere = hemisphere;
        self
    }

    /// Split a signed decimal value into degrees, minutes and seconds
    ///
    /// Degrees and minutes are truncated, not rounded, so seconds may come
    /// out as 59.999... for values that sit on a minute boundary. Use
    /// [`Dms::rounded`] before display.
    ///
    /// # Arguments
    /// * `value` - Signed decimal degrees
    /// * `is_latitude` - Selects N/S rather than E/W
    pub fn from_decimal(value: f64, is_latitude: bool) -> Self {
        let hemisphere = if is_latitude {
            Hemisphere::for_latitude(value)
        } else {
            Hemisphere::for_longitude(value)
        };

        let value = value.abs();
        let degrees = value.floor();
        let minutes_float = (value - degrees) * 60.0;
        let minutes = minutes_float.floor();
        let seconds = (minutes_float - minutes) * 60.0;

        Dms { degrees, minutes, seconds, hemisphere }
    }

    /// Combine the parts into signed decimal degrees
    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.degrees + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.hemisphere.is_negative() { -magnitude } else { magnitude }
    }

    /// Round seconds to `places` decimals, carrying into minutes and degrees
    ///
    /// Minutes are assumed to be whole, as produced by [`Dms::from_decimal`].
    pub fn rounded(&self, places: u32) -> Self {
        let factor = 10f64.powi(places as i32);
        let mut seconds = (self.seconds * factor).round() / factor;
        let mut minutes = self.minutes;
        let mut degrees = self.degrees;

        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1.0;
        }
        if minutes >= 60.0 {
            minutes -= 60.0;
            degrees += 1.0;
        }

        Dms { degrees, minutes, seconds, hemisphere: self.hemisphere }
    }

    /// Format as `DD°MM'SS.ss"H` with `places` decimals of seconds
    pub fn format(&self, places: u32) -> String {
        let r = self.rounded(places);
        let places = places as usize;
        let width = if places > 0 { places + 3 } else { 2 };
        format!("{}°{:02}'{:0width$.places$}\"{}",
                r.degrees, r.minutes, r.seconds, r.hemisphere,
                width = width, places = places)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f.precision().map(|p| p as u32).unwrap_or(DEFAULT_SECONDS_DECIMALS);
        write!(f, "{}", self.format(places))
    }
}
