//! Command aliases - alternate names for command-line subcommands.
//!
//! The [`aliases`] module keeps the alias registry and resolves typed names
//! to canonical commands; [`help`] formats alias lists for help output; and
//! [`cli`] wires both into a clap application.

pub mod aliases;
pub mod cli;
pub mod config;
pub mod error;
pub mod help;

pub use aliases::{AliasRegistry, CommandResolver, CommandSource};
pub use cli::AliasedCli;
pub use config::AliasConfig;
pub use error::{AliasError, Result};
pub use help::{DisplayConfig, HelpRenderer, PlainHelpRenderer};
