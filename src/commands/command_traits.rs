//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, enabling a clean separation of concerns.

use std::io::{self, Write};

use crate::commands::errors::CommandResult;
use crate::settings::Settings;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Produce the text the command prints
    ///
    /// # Returns
    /// Output lines joined by newlines, or an error
    fn render(&self) -> CommandResult<String>;

    /// Execute the command, writing its output to stdout
    fn execute(&self) -> CommandResult<()> {
        let output = self.render()?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
///
/// This trait defines the interface for command factories
/// which can parse CLI arguments and create the appropriate Command.
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Defaults for anything the arguments leave open
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, settings: &'a Settings)
                      -> CommandResult<Box<dyn Command + 'a>>;
}
