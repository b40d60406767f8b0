//! Error types for command-line operations

use std::fmt;
use std::io;

use crate::coordinate::ValidationError;
use crate::settings::SettingsError;

/// Errors raised while building or running a command
#[derive(Debug)]
pub enum CommandError {
    /// Input rejected by coordinate validation
    Validation(ValidationError),
    /// Settings could not be loaded
    Settings(SettingsError),
    /// I/O error while writing output
    IoError(io::Error),
    /// Arguments that do not form a valid invocation
    Usage(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Validation(e) => write!(f, "{}", e),
            CommandError::Settings(e) => write!(f, "Settings error: {}", e),
            CommandError::IoError(e) => write!(f, "I/O error: {}", e),
            CommandError::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Validation(e) => Some(e),
            CommandError::Settings(e) => Some(e),
            CommandError::IoError(e) => Some(e),
            CommandError::Usage(_) => None,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(error: ValidationError) -> Self {
        CommandError::Validation(error)
    }
}

impl From<SettingsError> for CommandError {
    fn from(error: SettingsError) -> Self {
        CommandError::Settings(error)
    }
}

impl From<io::Error> for CommandError {
    fn from(error: io::Error) -> Self {
        CommandError::IoError(error)
    }
}

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;
