//! Configuration for alias handling.
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! case_sensitive = false
//! show_aliases_in_help = true
//! alias_display_format = "[{aliases}]"
//! alias_separator = " | "
//! max_inline_aliases = 2
//! ```

use crate::aliases::AliasRegistry;
use crate::error::{AliasError, Result};
use crate::help::DisplayConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Alias behavior and help display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    /// Whether aliases are matched case-sensitively.
    #[serde(default = "default_true")]
    pub case_sensitive: bool,

    /// Whether aliases are listed next to commands in help output.
    #[serde(default = "default_true")]
    pub show_aliases_in_help: bool,

    /// Template for the alias column; must contain `{aliases}` once.
    #[serde(default = "default_display_format")]
    pub alias_display_format: String,

    /// Separator between aliases in help output.
    #[serde(default = "default_separator")]
    pub alias_separator: String,

    /// Aliases shown inline before the rest are summarized as `+N more`.
    #[serde(default = "default_max_inline")]
    pub max_inline_aliases: usize,
}

fn default_true() -> bool {
    true
}

fn default_display_format() -> String {
    "({aliases})".to_string()
}

fn default_separator() -> String {
    ", ".to_string()
}

fn default_max_inline() -> usize {
    3
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            case_sensitive: default_true(),
            show_aliases_in_help: default_true(),
            alias_display_format: default_display_format(),
            alias_separator: default_separator(),
            max_inline_aliases: default_max_inline(),
        }
    }
}

impl AliasConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No alias config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AliasError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AliasError::config(format!("Invalid alias config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            AliasError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the options that serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.display_config().map(|_| ())
    }

    /// Builds the immutable display options used by the help formatter.
    pub fn display_config(&self) -> Result<DisplayConfig> {
        DisplayConfig::new(
            self.alias_display_format.clone(),
            self.alias_separator.clone(),
            self.max_inline_aliases,
            self.show_aliases_in_help,
        )
    }

    /// Creates an empty registry using the configured case mode.
    pub fn registry(&self) -> AliasRegistry {
        AliasRegistry::new(self.case_sensitive)
    }
}
