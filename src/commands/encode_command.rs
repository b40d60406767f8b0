//! Coordinate to grid locator command
//!
//! This module implements the command that reads a coordinate in decimal
//! degrees or DMS notation and prints its Maidenhead locator.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::errors::{CommandError, CommandResult};
use crate::coordinate::Coordinate;
use crate::settings::Settings;
use crate::utils::coordinate_utils::parse_coordinate;

/// Command for encoding a coordinate as a grid locator
pub struct EncodeCommand<'a> {
    /// Coordinate to encode
    coordinate: Coordinate,
    /// Locator precision in character pairs
    precision: usize,
    /// Settings for DMS formatting
    settings: &'a Settings,
}

impl<'a> EncodeCommand<'a> {
    /// Create a new encode command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Defaults for precision and hemispheres
    ///
    /// # Returns
    /// A new EncodeCommand instance or an error
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> CommandResult<Self> {
        let input = args.get_many::<String>("input")
            .map(|values| values.cloned().collect::<Vec<_>>().join(" "))
            .ok_or_else(|| CommandError::Usage("Missing coordinate".to_string()))?;

        let coordinate = parse_coordinate(&input, settings.lat_hemisphere, settings.lon_hemisphere)?;
        let precision = args.get_one::<usize>("precision")
            .copied()
            .unwrap_or(settings.precision);

        debug!("Encode input '{}' parsed as {}", input, coordinate);

        Ok(EncodeCommand {
            coordinate,
            precision,
            settings,
        })
    }
}

impl<'a> Command for EncodeCommand<'a> {
    fn render(&self) -> CommandResult<String> {
        info!("Encoding {} at precision {}", self.coordinate, self.precision);

        let locator = self.coordinate.to_maidenhead(self.precision)?;
        let (lat, lon) = self.coordinate.to_deg_min_sec();
        let places = self.settings.seconds_decimals;

        Ok([
            format!("locator: {}", locator),
            format!("decimal: {}", self.coordinate),
            format!("dms: {} {}", lat.format(places), lon.format(places)),
        ].join("\n"))
    }
}
