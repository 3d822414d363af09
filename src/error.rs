//! Error types for command aliases.
//!
//! Defines the error enum shared by the registry, the configuration layer and
//! the host adapters.

use thiserror::Error;

/// Main error type for alias operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    /// The alias is empty, contains whitespace or has disallowed characters.
    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAliasFormat { alias: String, reason: &'static str },

    /// The alias collides with the name of the command it is attached to.
    #[error("Alias '{alias}' cannot be the same as command name '{command}'")]
    AliasEqualsCommand { alias: String, command: String },

    /// The alias already belongs to a command.
    #[error("Alias '{alias}' is already registered for command '{existing_owner}'")]
    AliasAlreadyRegistered {
        alias: String,
        existing_owner: String,
    },

    /// The host application has no command with this name.
    #[error("Command '{0}' does not exist")]
    UnknownCommand(String),

    /// A command name is already taken by another command or an alias.
    #[error("Command name '{0}' is already in use")]
    DuplicateCommand(String),

    /// Configuration errors (invalid config file, bad display template, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AliasError {
    /// Creates an unknown-command error for the given name.
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand(name.into())
    }

    /// Creates a duplicate-command error for the given name.
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::DuplicateCommand(name.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidAliasFormat { .. }
            | Self::AliasEqualsCommand { .. }
            | Self::AliasAlreadyRegistered { .. } => "Alias Error",
            Self::UnknownCommand(_) | Self::DuplicateCommand(_) => "Command Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using AliasError.
pub type Result<T> = std::result::Result<T, AliasError>;
