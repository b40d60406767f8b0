//! Hemisphere letters used by the DMS notation

use std::fmt;
use std::str::FromStr;

use super::errors::{ValidationError, ValidationResult};

/// A hemisphere indicator replacing the sign of a DMS value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Hemisphere assumed for a latitude when none is given
    pub const DEFAULT_LATITUDE: Hemisphere = Hemisphere::North;
    /// Hemisphere assumed for a longitude when none is given
    pub const DEFAULT_LONGITUDE: Hemisphere = Hemisphere::West;

    /// Parse a hemisphere letter, ignoring case
    pub fn from_char(c: char) -> ValidationResult<Self> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            'E' => Ok(Hemisphere::East),
            'W' => Ok(Hemisphere::West),
            _ => Err(ValidationError::UnknownHemisphere(c.to_string())),
        }
    }

    /// The upper-case letter for this hemisphere
    pub fn as_char(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// True for North and South
    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }

    /// True for the hemispheres that carry a negative decimal sign
    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    /// Hemisphere of a signed latitude; zero is North
    pub fn for_latitude(value: f64) -> Self {
        if value < 0.0 { Hemisphere::South } else { Hemisphere::North }
    }

    /// Hemisphere of a signed longitude; zero is East
    pub fn for_longitude(value: f64) -> Self {
        if value < 0.0 { Hemisphere::West } else { Hemisphere::East }
    }
}

impl FromStr for Hemisphere {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Hemisphere::from_char(c),
            _ => Err(ValidationError::UnknownHemisphere(s.to_string())),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
