//! Grid locator to coordinate command
//!
//! This module implements the command that reads a Maidenhead locator and
//! prints the cell it names.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::errors::{CommandError, CommandResult};
use crate::coordinate::{maidenhead, Coordinate};
use crate::settings::Settings;

/// Command for decoding a grid locator
pub struct DecodeCommand<'a> {
    /// Locator as given, upper-cased
    grid: String,
    /// South-west corner of the cell
    corner: Coordinate,
    /// Settings for DMS formatting
    settings: &'a Settings,
}

impl<'a> DecodeCommand<'a> {
    /// Create a new decode command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Settings for output formatting
    ///
    /// # Returns
    /// A new DecodeCommand instance or an error
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> CommandResult<Self> {
        let inputs: Vec<&String> = args.get_many::<String>("input")
            .map(|values| values.collect())
            .unwrap_or_default();

        let grid = match inputs.as_slice() {
            [grid] => grid.trim().to_ascii_uppercase(),
            [] => return Err(CommandError::Usage("Missing grid locator".to_string())),
            _ => return Err(CommandError::Usage(
                format!("Expected a single grid locator, got {} values", inputs.len()))),
        };

        let corner = Coordinate::from_maidenhead(&grid)?;
        debug!("Decode input '{}' has corner {}", grid, corner);

        Ok(DecodeCommand {
            grid,
            corner,
            settings,
        })
    }
}

impl<'a> Command for DecodeCommand<'a> {
    fn render(&self) -> CommandResult<String> {
        info!("Decoding {}", self.grid);

        let (center_lat, center_lon) = maidenhead::cell_center(&self.grid)?;
        let (width, height) = maidenhead::cell_size(self.grid.len() / 2)?;
        let (lat, lon) = self.corner.to_deg_min_sec();
        let places = self.settings.seconds_decimals;

        Ok([
            format!("locator: {}", self.grid),
            format!("corner: {}", self.corner),
            format!("center: {:.6}, {:.6}", center_lat, center_lon),
            format!("cell: {:.6}° x {:.6}°", width, height),
            format!("dms: {} {}", lat.format(places), lon.format(places)),
        ].join("\n"))
    }
}
