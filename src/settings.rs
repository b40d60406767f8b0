//! Settings for locator output and DMS input
//!
//! Defaults are read from the embedded `gridloc.toml`. A settings file with
//! the same layout can override any subset of the keys.

use std::fmt;
use std::fs;
use std::io;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;

use crate::coordinate::maidenhead::{DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};
use crate::coordinate::{Hemisphere, DEFAULT_SECONDS_DECIMALS};

// Largest number of seconds decimals worth printing for an f64
const MAX_SECONDS_DECIMALS: u32 = 9;

lazy_static! {
    // Parse the embedded defaults on first use
    static ref DEFAULT_SETTINGS: Settings = {
        let content = include_str!("../gridloc.toml");
        Settings::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse embedded settings: {}", e);
            Settings::default()
        })
    };
}

/// Errors raised while loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    IoError(io::Error),
    /// Content is not valid TOML
    ParseError(String),
    /// A key holds a value of the wrong type or out of range
    InvalidValue {
        key: &'static str,
        message: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "I/O error: {}", e),
            SettingsError::ParseError(msg) => write!(f, "Failed to parse TOML: {}", msg),
            SettingsError::InvalidValue { key, message } =>
                write!(f, "Invalid value for '{}': {}", key, message),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<io::Error> for SettingsError {
    fn from(error: io::Error) -> Self {
        SettingsError::IoError(error)
    }
}

/// Tool settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Locator precision in character pairs
    pub precision: usize,
    /// Hemisphere for a latitude written without a letter
    pub lat_hemisphere: Hemisphere,
    /// Hemisphere for a longitude written without a letter
    pub lon_hemisphere: Hemisphere,
    /// Decimals shown for DMS seconds
    pub seconds_decimals: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            precision: DEFAULT_PRECISION,
            lat_hemisphere: Hemisphere::DEFAULT_LATITUDE,
            lon_hemisphere: Hemisphere::DEFAULT_LONGITUDE,
            seconds_decimals: DEFAULT_SECONDS_DECIMALS,
        }
    }
}

impl Settings {
    /// The embedded default settings
    pub fn defaults() -> &'static Settings {
        &DEFAULT_SETTINGS
    }

    /// Load settings from a TOML file; missing keys keep the embedded defaults
    pub fn from_file(path: &str) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        debug!("Loaded settings from {}", path);
        Settings::defaults().clone().merge(&content)
    }

    /// Apply the keys present in `content` on top of these settings
    pub fn merge(mut self, content: &str) -> Result<Self, SettingsError> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e: toml::de::Error| SettingsError::ParseError(e.to_string()))?;

        if let Some(value) = lookup(&toml_value, "maidenhead", "precision") {
            let precision = value.as_integer()
                .filter(|p| (MIN_PRECISION as i64..=MAX_PRECISION as i64).contains(p))
                .ok_or_else(|| SettingsError::InvalidValue {
                    key: "maidenhead.precision",
                    message: format!("expected an integer from {} to {}, got {}",
                                     MIN_PRECISION, MAX_PRECISION, value),
                })?;
            self.precision = precision as usize;
        }

        if let Some(value) = lookup(&toml_value, "dms", "lat_hemisphere") {
            self.lat_hemisphere = parse_hemisphere(value, "dms.lat_hemisphere", true)?;
        }

        if let Some(value) = lookup(&toml_value, "dms", "lon_hemisphere") {
            self.lon_hemisphere = parse_hemisphere(value, "dms.lon_hemisphere", false)?;
        }

        if let Some(value) = lookup(&toml_value, "dms", "seconds_decimals") {
            let decimals = value.as_integer()
                .filter(|d| (0..=MAX_SECONDS_DECIMALS as i64).contains(d))
                .ok_or_else(|| SettingsError::InvalidValue {
                    key: "dms.seconds_decimals",
                    message: format!("expected an integer from 0 to {}, got {}",
                                     MAX_SECONDS_DECIMALS, value),
                })?;
            self.seconds_decimals = decimals as u32;
        }

        Ok(self)
    }
}

impl FromStr for Settings {
    type Err = SettingsError;

    /// Parse settings from a TOML string; missing keys keep built-in values
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Settings::default().merge(content)
    }
}

/// Helper to fetch `[table] key` from a TOML document
fn lookup<'v>(toml_value: &'v toml::Value, table: &str, key: &str) -> Option<&'v toml::Value> {
    toml_value.get(table).and_then(|t| t.get(key))
}

fn parse_hemisphere(value: &toml::Value, key: &'static str, latitude: bool)
                    -> Result<Hemisphere, SettingsError> {
    match value.as_str().and_then(|s| Hemisphere::from_str(s).ok()) {
        Some(hemisphere) if hemisphere.is_latitude() == latitude => Ok(hemisphere),
        _ => Err(SettingsError::InvalidValue {
            key,
            message: format!("expected {}, got {}",
                             if latitude { "\"N\" or \"S\"" } else { "\"E\" or \"W\"" }, value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let settings = Settings::defaults();
        assert_eq!(settings.precision, 4);
        assert_eq!(settings.lat_hemisphere, Hemisphere::North);
        assert_eq!(settings.lon_hemisphere, Hemisphere::West);
        assert_eq!(settings.seconds_decimals, 2);
    }

    #[test]
    fn test_partial_override() {
        let settings = "[maidenhead]\nprecision = 3\n".parse::<Settings>().unwrap();
        assert_eq!(settings.precision, 3);
        assert_eq!(settings.lon_hemisphere, Hemisphere::West);
    }

    #[test]
    fn test_hemisphere_override() {
        let settings: Settings = "[dms]\nlat_hemisphere = \"s\"\nlon_hemisphere = \"E\"\n"
            .parse()
            .unwrap();
        assert_eq!(settings.lat_hemisphere, Hemisphere::South);
        assert_eq!(settings.lon_hemisphere, Hemisphere::East);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            "[maidenhead]\nprecision = 5\n".parse::<Settings>(),
            Err(SettingsError::InvalidValue { key: "maidenhead.precision", .. })
        ));
        assert!(matches!(
            "[dms]\nlat_hemisphere = \"E\"\n".parse::<Settings>(),
            Err(SettingsError::InvalidValue { key: "dms.lat_hemisphere", .. })
        ));
        assert!(matches!(
            "[dms\n".parse::<Settings>(),
            Err(SettingsError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::from_file("does-not-exist/gridloc.toml"),
            Err(SettingsError::IoError(_))
        ));
    }
}
