//! Maidenhead grid locator encoding and decoding
//!
//! A locator is a sequence of character pairs, each pair refining the cell
//! named by the previous one. Within a pair the first character is the
//! longitude and the second the latitude:
//!
//! | Stage           | Characters | Cell size (lon × lat) |
//! |-----------------|------------|-----------------------|
//! | Field           | `A`..`R`   | 20° × 10°             |
//! | Square          | `0`..`9`   | 2° × 1°               |
//! | Subsquare       | `A`..`X`   | 5' × 2.5'             |
//! | Extended square | `0`..`9`   | 30" × 15"             |

use log::debug;

use super::errors::{ValidationError, ValidationResult};

/// Smallest supported precision in character pairs
pub const MIN_PRECISION: usize = 1;
/// Largest supported precision in character pairs
pub const MAX_PRECISION: usize = 4;
/// Precision used when the caller does not ask for one
pub const DEFAULT_PRECISION: usize = 4;

// Extended-square cells per degree along each axis
const LON_UNITS_PER_DEGREE: f64 = 120.0;
const LAT_UNITS_PER_DEGREE: f64 = 240.0;
// Extended-square cells around the globe (360° lon, 180° lat)
const TOTAL_UNITS: u64 = 43_200;
// Absorbs the rounding error of a decoded corner sitting on a cell edge
const UNIT_TOLERANCE: f64 = 1e-6;

/// One refinement level of a grid locator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridStage {
    Field,
    Square,
    Subsquare,
    ExtendedSquare,
}

impl GridStage {
    /// All stages, coarsest first
    pub const ALL: [GridStage; 4] = [
        GridStage::Field,
        GridStage::Square,
        GridStage::Subsquare,
        GridStage::ExtendedSquare,
    ];

    /// Stage reached by a locator of `precision` character pairs
    pub fn from_precision(precision: usize) -> ValidationResult<Self> {
        match precision {
            1 => Ok(GridStage::Field),
            2 => Ok(GridStage::Square),
            3 => Ok(GridStage::Subsquare),
            4 => Ok(GridStage::ExtendedSquare),
            _ => Err(ValidationError::PrecisionOutOfRange(precision)),
        }
    }

    /// Human-readable stage name
    pub fn name(&self) -> &'static str {
        match self {
            GridStage::Field => "field",
            GridStage::Square => "square",
            GridStage::Subsquare => "subsquare",
            GridStage::ExtendedSquare => "extended square",
        }
    }

    /// Characters accepted at this stage, for error messages
    pub fn alphabet(&self) -> &'static str {
        match self {
            GridStage::Field => "A-R",
            GridStage::Square | GridStage::ExtendedSquare => "0-9",
            GridStage::Subsquare => "A-X",
        }
    }

    /// Number of cells a parent cell is divided into along each axis
    fn divisions(&self) -> u32 {
        match self {
            GridStage::Field => 18,
            GridStage::Square | GridStage::ExtendedSquare => 10,
            GridStage::Subsquare => 24,
        }
    }

    /// Cell size in extended-square units (identical for both axes)
    fn units(&self) -> u64 {
        match self {
            GridStage::Field => 2400,
            GridStage::Square => 240,
            GridStage::Subsquare => 10,
            GridStage::ExtendedSquare => 1,
        }
    }

    fn uses_letters(&self) -> bool {
        matches!(self, GridStage::Field | GridStage::Subsquare)
    }

    /// Cell width in degrees of longitude
    pub fn lon_size(&self) -> f64 {
        match self {
            GridStage::Field => 20.0,
            GridStage::Square => 2.0,
            GridStage::Subsquare => 5.0 / 60.0,
            GridStage::ExtendedSquare => 30.0 / 3600.0,
        }
    }

    /// Cell height in degrees of latitude
    pub fn lat_size(&self) -> f64 {
        match self {
            GridStage::Field => 10.0,
            GridStage::Square => 1.0,
            GridStage::Subsquare => 2.5 / 60.0,
            GridStage::ExtendedSquare => 15.0 / 3600.0,
        }
    }

    /// Cell index of an upper-case character, if it belongs to this stage
    fn index_of(&self, c: char) -> Option<u32> {
        let index = if self.uses_letters() {
            if !c.is_ascii_uppercase() {
                return None;
            }
            c as u32 - 'A' as u32
        } else {
            c.to_digit(10)?
        };

        if index < self.divisions() { Some(index) } else { None }
    }

    /// Character for a cell index at this stage
    fn symbol(&self, index: u32) -> char {
        if self.uses_letters() {
            char::from(b'A' + index as u8)
        } else {
            char::from(b'0' + index as u8)
        }
    }
}

/// Decode a grid locator into the lower-left corner of its cell
///
/// # Arguments
/// * `grid` - Locator of 2, 4, 6 or 8 characters, any case
///
/// # Returns
/// `(lat, lon)` of the south-west corner of the smallest decoded cell
pub fn decode(grid: &str) -> ValidationResult<(f64, f64)> {
    let chars: Vec<char> = grid.to_ascii_uppercase().chars().collect();
    if chars.is_empty() || chars.len() > 2 * MAX_PRECISION || chars.len() % 2 != 0 {
        return Err(ValidationError::InvalidGridLength(chars.len()));
    }

    let mut lon = -180.0;
    let mut lat = -90.0;

    for (stage, pair) in GridStage::ALL.iter().zip(chars.chunks(2)) {
        let (lon_index, lat_index) = match (stage.index_of(pair[0]), stage.index_of(pair[1])) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(ValidationError::InvalidGridCharacters {
                    stage: *stage,
                    pair: pair.iter().collect(),
                })
            }
        };

        lon += f64::from(lon_index) * stage.lon_size();
        lat += f64::from(lat_index) * stage.lat_size();
    }

    debug!("Decoded grid '{}' to lat={}, lon={}", grid, lat, lon);
    Ok((lat, lon))
}

/// Encode a position as a grid locator
///
/// Longitude is wrapped into [0, 360) after shifting by 180°, latitude is
/// clamped to [-90, 90] and shifted by 90°. Both are then counted in
/// extended-square units and each stage takes its digit from what the
/// coarser stages left over. Latitude 90 lands in the last row; longitude
/// 180 wraps to the first column, the same as -180.
///
/// # Arguments
/// * `lat` - Latitude in decimal degrees
/// * `lon` - Longitude in decimal degrees
/// * `precision` - Number of character pairs, 1 to 4
pub fn encode(lat: f64, lon: f64, precision: usize) -> ValidationResult<String> {
    GridStage::from_precision(precision)?;

    let lon_shifted = (lon + 180.0).rem_euclid(360.0);
    let lat_shifted = lat.clamp(-90.0, 90.0) + 90.0;

    let lon_units = to_units(lon_shifted, LON_UNITS_PER_DEGREE);
    let lat_units = to_units(lat_shifted, LAT_UNITS_PER_DEGREE);

    let mut result = String::with_capacity(2 * precision);
    for stage in GridStage::ALL.iter().take(precision) {
        let divisions = u64::from(stage.divisions());
        let lon_index = (lon_units / stage.units()) % divisions;
        let lat_index = (lat_units / stage.units()) % divisions;
        result.push(stage.symbol(lon_index as u32));
        result.push(stage.symbol(lat_index as u32));
    }

    debug!("Encoded lat={}, lon={} at precision {} as '{}'", lat, lon, precision, result);
    Ok(result)
}

/// Size of a cell at `precision` as `(lon_degrees, lat_degrees)`
pub fn cell_size(precision: usize) -> ValidationResult<(f64, f64)> {
    let stage = GridStage::from_precision(precision)?;
    Ok((stage.lon_size(), stage.lat_size()))
}

/// Center of the cell named by `grid` as `(lat, lon)`
pub fn cell_center(grid: &str) -> ValidationResult<(f64, f64)> {
    let (lat, lon) = decode(grid)?;
    let (width, height) = cell_size(grid.chars().count() / 2)?;
    Ok((lat + height / 2.0, lon + width / 2.0))
}

/// Count whole extended-square cells in a shifted axis value
fn to_units(shifted: f64, units_per_degree: f64) -> u64 {
    let units = (shifted * units_per_degree + UNIT_TOLERANCE).floor();
    if units <= 0.0 {
        0
    } else {
        (units as u64).min(TOTAL_UNITS - 1)
    }
}
