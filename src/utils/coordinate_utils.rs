//! Coordinate utility functions
//!
//! Utilities for reading coordinates written as text, either as a decimal
//! `lat,lon` pair or as degrees/minutes/seconds with hemisphere letters.
//! Accepted DMS spellings include `37°54'06.08"N`, `37 54 6.08 N` and
//! `37:54:06.08N`; the hemisphere letter may be omitted, in which case the
//! caller's default applies.

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::coordinate::{Coordinate, Dms, Hemisphere, ValidationError, ValidationResult};

// One DMS axis: degrees, minutes, seconds, optional hemisphere (4 groups)
const DMS_AXIS: &str = r#"(\d+(?:\.\d+)?)(?:\s*[°d:]\s*|\s+)(\d+(?:\.\d+)?)(?:\s*['′m:]\s*|\s+)(\d+(?:\.\d+)?)(?:\s*(?:"|″|''))?\s*([NSEWnsew])?"#;
const NUMBER: &str = r"([+-]?\d+(?:\.\d+)?)";

lazy_static! {
    static ref DECIMAL_PAIR: Regex =
        Regex::new(&format!(r"^\s*{}\s*(?:,|;|\s)\s*{}\s*$", NUMBER, NUMBER)).unwrap();
    static ref DMS_SINGLE: Regex =
        Regex::new(&format!(r"^\s*{}\s*$", DMS_AXIS)).unwrap();
    static ref DMS_PAIR: Regex =
        Regex::new(&format!(r"^\s*{}(?:\s*[,;]\s*|\s+){}\s*$", DMS_AXIS, DMS_AXIS)).unwrap();
}

/// Parse a coordinate in any of the accepted notations
///
/// # Arguments
/// * `text` - `"lat,lon"` in decimal degrees, or two DMS axes
/// * `lat_default` - Hemisphere for a latitude written without a letter
/// * `lon_default` - Hemisphere for a longitude written without a letter
pub fn parse_coordinate(text: &str, lat_default: Hemisphere, lon_default: Hemisphere)
                        -> ValidationResult<Coordinate> {
    if DECIMAL_PAIR.is_match(text) {
        parse_decimal_pair(text)
    } else {
        parse_dms_pair(text, lat_default, lon_default)
    }
}

/// Parse `"lat,lon"` in decimal degrees
pub fn parse_decimal_pair(text: &str) -> ValidationResult<Coordinate> {
    let caps = DECIMAL_PAIR.captures(text)
        .ok_or_else(|| ValidationError::InvalidCoordinateText(text.to_string()))?;

    let lat = parse_number(&caps, 1, text)?;
    let lon = parse_number(&caps, 2, text)?;
    debug!("Parsed decimal pair '{}' as lat={}, lon={}", text, lat, lon);

    Coordinate::from_decimal_degrees(lat, lon)
}

/// Parse a latitude axis followed by a longitude axis in DMS notation
pub fn parse_dms_pair(text: &str, lat_default: Hemisphere, lon_default: Hemisphere)
                      -> ValidationResult<Coordinate> {
    let caps = DMS_PAIR.captures(text)
        .ok_or_else(|| ValidationError::InvalidCoordinateText(text.to_string()))?;

    let lat = dms_from_captures(&caps, 1, lat_default, text)?;
    let lon = dms_from_captures(&caps, 5, lon_default, text)?;
    debug!("Parsed DMS pair '{}' as {:?} / {:?}", text, lat, lon);

    Coordinate::from_dms(&lat, &lon)
}

/// Parse a single DMS axis such as `121°56'18.32"W`
///
/// Only the syntax is checked here; ranges are validated when the axis is
/// turned into a [`Coordinate`].
pub fn parse_dms_axis(text: &str, default_hemisphere: Hemisphere) -> ValidationResult<Dms> {
    let caps = DMS_SINGLE.captures(text)
        .ok_or_else(|| ValidationError::InvalidCoordinateText(text.to_string()))?;
    dms_from_captures(&caps, 1, default_hemisphere, text)
}

/// Build a DMS value from four consecutive capture groups starting at `first`
fn dms_from_captures(caps: &Captures, first: usize, default_hemisphere: Hemisphere, text: &str)
                     -> ValidationResult<Dms> {
    let degrees = parse_number(caps, first, text)?;
    let minutes = parse_number(caps, first + 1, text)?;
    let seconds = parse_number(caps, first + 2, text)?;
    let hemisphere = match caps.get(first + 3) {
        Some(m) => m.as_str().parse::<Hemisphere>()?,
        None => default_hemisphere,
    };

    Ok(Dms::new(degrees, minutes, seconds, hemisphere))
}

fn parse_number(caps: &Captures, group: usize, text: &str) -> ValidationResult<f64> {
    caps.get(group)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| ValidationError::InvalidCoordinateText(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_pair() {
        let c = parse_decimal_pair("37.901687598628186, -121.93842262029649").unwrap();
        assert_eq!(c.lat(), 37.901687598628186);
        assert_eq!(c.lon(), -121.93842262029649);

        let c = parse_decimal_pair("-33.5 151").unwrap();
        assert_eq!((c.lat(), c.lon()), (-33.5, 151.0));
    }

    #[test]
    fn test_parse_decimal_pair_out_of_range() {
        assert_eq!(parse_decimal_pair("91,0"), Err(ValidationError::LatitudeOutOfRange(91.0)));
    }

    #[test]
    fn test_parse_dms_axis_notations() {
        let expected = Dms::new(37.0, 54.0, 6.08, Hemisphere::North);
        assert_eq!(parse_dms_axis("37°54'06.08\"N", Hemisphere::South).unwrap(), expected);
        assert_eq!(parse_dms_axis("37 54 6.08 N", Hemisphere::South).unwrap(), expected);
        assert_eq!(parse_dms_axis("37:54:06.08n", Hemisphere::South).unwrap(), expected);
    }

    #[test]
    fn test_parse_dms_axis_default_hemisphere() {
        let dms = parse_dms_axis("121 56 18.32", Hemisphere::West).unwrap();
        assert_eq!(dms.hemisphere, Hemisphere::West);
        assert_eq!(dms.degrees, 121.0);
    }

    #[test]
    fn test_parse_dms_pair() {
        let c = parse_dms_pair("37°54'06.08\"N 121°56'18.32\"W", Hemisphere::North, Hemisphere::East)
            .unwrap();
        assert!((c.lat() - 37.901688888888889).abs() < 1e-9);
        assert!((c.lon() + 121.93842222222222).abs() < 1e-9);
    }

    #[test]
    fn test_parse_dms_pair_swapped_hemispheres() {
        let result = parse_dms_pair("121 56 18 W 37 54 6 N", Hemisphere::North, Hemisphere::West);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_dms_axis_lowercase_south() {
        let dms = parse_dms_axis("33 52 7.68 s", Hemisphere::North).unwrap();
        assert_eq!(dms.hemisphere, Hemisphere::South);
        assert_eq!(dms.seconds, 7.68);
    }

    #[test]
    fn test_parse_coordinate_lowercase_hemispheres() {
        let c = parse_coordinate("33 52 7.68 s 151 12 33.48 e", Hemisphere::North, Hemisphere::West)
            .unwrap();
        assert!((c.lat() + 33.8688).abs() < 1e-9);
        assert!((c.lon() - 151.2093).abs() < 1e-9);
    }

    #[test]
    fn test_parse_coordinate_rejects_garbage() {
        let result = parse_coordinate("somewhere", Hemisphere::North, Hemisphere::West);
        assert_eq!(result, Err(ValidationError::InvalidCoordinateText("somewhere".to_string())));
    }
}
