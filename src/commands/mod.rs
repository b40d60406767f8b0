//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod errors;
pub mod encode_command;
pub mod decode_command;

pub use command_traits::{Command, CommandFactory};
pub use errors::{CommandError, CommandResult};
pub use encode_command::EncodeCommand;
pub use decode_command::DecodeCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::coordinate::maidenhead::{MAX_PRECISION, MIN_PRECISION};
use crate::settings::Settings;

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("gridloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert between decimal degrees, DMS and Maidenhead grid locators")
        .arg(
            Arg::new("input")
                .help("Coordinate (\"LAT,LON\" or DMS pair) or, with --decode, a grid locator")
                .required(true)
                .num_args(1..)
                .allow_negative_numbers(true)
                .index(1),
        )
        .arg(
            Arg::new("decode")
                .short('d')
                .long("decode")
                .help("Decode a grid locator instead of encoding a coordinate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Locator precision in character pairs (1-4)")
                .value_name("PAIRS")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML settings file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Resolve the settings for a run: the `--config` file if given, else the
/// embedded defaults
pub fn load_settings(args: &ArgMatches) -> CommandResult<Settings> {
    match args.get_one::<String>("config") {
        Some(path) => Ok(Settings::from_file(path)?),
        None => Ok(Settings::defaults().clone()),
    }
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GridlocCommandFactory;

impl GridlocCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GridlocCommandFactory
    }
}

impl Default for GridlocCommandFactory {
    fn default() -> Self {
        GridlocCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for GridlocCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &'a Settings)
                      -> CommandResult<Box<dyn Command + 'a>> {
        if let Some(&precision) = args.get_one::<usize>("precision") {
            if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
                return Err(crate::coordinate::ValidationError::PrecisionOutOfRange(precision).into());
            }
        }

        if args.get_flag("decode") {
            Ok(Box::new(DecodeCommand::new(args, settings)?))
        } else {
            // Default to encoding
            Ok(Box::new(EncodeCommand::new(args, settings)?))
        }
    }
}
