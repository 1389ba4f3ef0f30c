//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror`. The `Display`
//! text of a `CommandError` is the message shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can recover from by replying with a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Phone number is not ten digits. Reported like a missing argument.
    #[error("Give me name and phone please.")]
    InvalidPhone(String),

    /// Birthday is not a real `DD.MM.YYYY` date. Reported like a phone error.
    #[error("Give me name and phone please.")]
    InvalidDateFormat(String),

    /// Too few (or, for fixed-arity commands, too many) arguments
    #[error("Give me name and phone please.")]
    WrongArgumentCount { expected: usize, got: usize },

    /// The command needs at least one argument and got none
    #[error("Incomplete command. Please provide necessary arguments.")]
    MissingArgument,

    /// No record is filed under the given name (`change`, `phone`)
    #[error("Contact not found: {0}")]
    UnknownContact(String),

    /// No record is filed under the given name (birthday commands)
    #[error("Contact {0} not found.")]
    BirthdayContactNotFound(String),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
            ValidationError::InvalidDateFormat(date) => Self::InvalidDateFormat(date),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A `.env` file exists but could not be read
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
