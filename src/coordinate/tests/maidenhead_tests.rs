//! Tests for grid locator encoding and decoding

extern crate std;

use crate::coordinate::maidenhead::{self, GridStage};
use crate::coordinate::{Coordinate, ValidationError};
use super::test_utils::assert_close;

#[test]
fn test_output_length_matches_precision() {
    let c = Coordinate::from_decimal_degrees(-33.8688, 151.2093).unwrap();
    for precision in 1..=4 {
        std::assert_eq!(c.to_maidenhead(precision).unwrap().len(), 2 * precision);
    }
    std::assert_eq!(c.to_maidenhead(3).unwrap(), "QF56OD");
}

#[test]
fn test_precision_out_of_range() {
    let c = Coordinate::from_decimal_degrees(0.0, 0.0).unwrap();
    std::assert_eq!(c.to_maidenhead(0), Err(ValidationError::PrecisionOutOfRange(0)));
    std::assert_eq!(c.to_maidenhead(5), Err(ValidationError::PrecisionOutOfRange(5)));
}

#[test]
fn test_encode_extremes() {
    let encode = |lat, lon| Coordinate::from_decimal_degrees(lat, lon).unwrap().to_maidenhead(4).unwrap();
    std::assert_eq!(encode(-90.0, -180.0), "AA00AA00");
    std::assert_eq!(encode(0.0, 0.0), "JJ00AA00");
    // Longitude 180 wraps onto -180
    std::assert_eq!(encode(0.0, 180.0), "AJ00AA00");
    // The north pole stays in the top row
    std::assert_eq!(encode(90.0, 0.0), "JR09AX09");
}

#[test]
fn test_known_locators() {
    let encode = |lat, lon, p| Coordinate::from_decimal_degrees(lat, lon).unwrap().to_maidenhead(p).unwrap();
    std::assert_eq!(encode(51.5, -0.166666666666666, 3), "IO91WM");
    std::assert_eq!(encode(41.714775, -72.727260, 3), "FN31PR");
}

#[test]
fn test_decode_lower_left_corner() {
    let c = Coordinate::from_maidenhead("AA").unwrap();
    std::assert_eq!((c.lat(), c.lon()), (-90.0, -180.0));

    let c = Coordinate::from_maidenhead("JN58td25").unwrap();
    assert_close(c.lat(), -90.0 + 130.0 + 8.0 + 3.0 * 2.5 / 60.0 + 5.0 * 15.0 / 3600.0);
    assert_close(c.lon(), -180.0 + 180.0 + 10.0 + 19.0 * 5.0 / 60.0 + 2.0 * 30.0 / 3600.0);
}

#[test]
fn test_decode_is_case_insensitive() {
    std::assert_eq!(Coordinate::from_maidenhead("cm97av76").unwrap(),
                    Coordinate::from_maidenhead("CM97AV76").unwrap());
}

#[test]
fn test_decode_rejects_bad_lengths() {
    for grid in ["", "A", "AAA", "AA00A", "AA00AA0", "AA00AA00A", "AA00AA00AA"] {
        std::assert_eq!(Coordinate::from_maidenhead(grid),
                        Err(ValidationError::InvalidGridLength(grid.len())));
    }
}

#[test]
fn test_decode_rejects_bad_characters() {
    let cases = [
        ("SA", GridStage::Field, "SA"),
        ("A1", GridStage::Field, "A1"),
        ("AAA0", GridStage::Square, "A0"),
        ("AA00YA", GridStage::Subsquare, "YA"),
        ("AA00A5", GridStage::Subsquare, "A5"),
        ("AA00AAA0", GridStage::ExtendedSquare, "A0"),
    ];

    for (grid, stage, pair) in cases {
        std::assert_eq!(
            Coordinate::from_maidenhead(grid),
            Err(ValidationError::InvalidGridCharacters { stage, pair: pair.to_string() }),
            "grid {}", grid
        );
    }
}

#[test]
fn test_decode_then_encode_round_trip() {
    let fields = ["AA", "CM", "JN", "QF", "RR", "IO"];
    let squares = ["00", "97", "58", "99"];
    let letters: Vec<char> = ('A'..='X').collect();

    for field in fields {
        std::assert_eq!(Coordinate::from_maidenhead(field).unwrap().to_maidenhead(1).unwrap(), field);
        for square in squares {
            let grid4 = format!("{}{}", field, square);
            std::assert_eq!(Coordinate::from_maidenhead(&grid4).unwrap().to_maidenhead(2).unwrap(), grid4);

            for &x in &letters {
                for &y in &letters {
                    let grid6 = format!("{}{}{}", grid4, x, y);
                    let c = Coordinate::from_maidenhead(&grid6).unwrap();
                    std::assert_eq!(c.to_maidenhead(3).unwrap(), grid6);

                    let grid8 = format!("{}{}", grid6, (x as u8 - b'A') % 10);
                    let grid8 = format!("{}{}", grid8, (y as u8 - b'A') % 10);
                    let c = Coordinate::from_maidenhead(&grid8).unwrap();
                    std::assert_eq!(c.to_maidenhead(4).unwrap(), grid8);
                }
            }
        }
    }
}

#[test]
fn test_cell_size_and_center() {
    std::assert_eq!(maidenhead::cell_size(1).unwrap(), (20.0, 10.0));
    std::assert_eq!(maidenhead::cell_size(2).unwrap(), (2.0, 1.0));
    std::assert!(maidenhead::cell_size(0).is_err());

    let (lat, lon) = maidenhead::cell_center("CM97").unwrap();
    std::assert_eq!((lat, lon), (37.5, -121.0));

    let (lat, lon) = maidenhead::cell_center("CM97AV").unwrap();
    let corner = Coordinate::from_maidenhead("CM97AV").unwrap();
    assert_close(lat - corner.lat(), 1.25 / 60.0);
    assert_close(lon - corner.lon(), 2.5 / 60.0);
}
