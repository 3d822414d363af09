//! Alias registry.
//!
//! Owns the two-way mapping between commands and their aliases. Every
//! mutation goes through [`AliasRegistry::register`] or
//! [`AliasRegistry::remove`], which keep both sides in step:
//! each alias listed under a command maps back to exactly that command, and
//! each mapped alias is listed under exactly one command.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use super::normalize::normalize;
use crate::error::{AliasError, Result};

/// Snapshot of every command that has at least one alias.
pub type AliasSnapshot = BTreeMap<String, Vec<String>>;

/// Unicode word characters, dashes and underscores.
fn alias_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w-]+$").expect("alias pattern is valid"))
}

/// Checks the format of an alias without touching any registry state.
pub fn validate_alias(alias: &str) -> Result<()> {
    let reason = if alias.is_empty() {
        "alias must be a non-empty string"
    } else if alias.chars().any(char::is_whitespace) {
        "alias cannot contain whitespace"
    } else if !alias_pattern().is_match(alias) {
        "alias must only contain letters, digits, dashes and underscores"
    } else {
        return Ok(());
    };

    Err(AliasError::InvalidAliasFormat {
        alias: alias.to_string(),
        reason,
    })
}

/// Bidirectional alias bookkeeping for one application instance.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    case_sensitive: bool,
    /// Command name -> aliases in registration order.
    aliases_by_command: HashMap<String, Vec<String>>,
    /// Normalized alias -> command name.
    command_by_alias: HashMap<String, String>,
    /// Bumped on every successful mutation.
    generation: u64,
}

impl AliasRegistry {
    /// Creates an empty registry.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            aliases_by_command: HashMap::new(),
            command_by_alias: HashMap::new(),
            generation: 0,
        }
    }

    /// Returns whether alias comparisons are case sensitive.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns a counter that changes whenever the registry is mutated.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.command_by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.command_by_alias.is_empty()
    }

    fn key(&self, name: &str) -> String {
        normalize(name, self.case_sensitive)
    }

    /// Checks whether `alias` could be registered for `command` right now.
    ///
    /// Runs the same checks as [`register`](Self::register), in the same
    /// order, without mutating anything.
    pub fn check(&self, command: &str, alias: &str) -> Result<()> {
        validate_alias(alias)?;

        let alias_key = self.key(alias);
        if alias_key == self.key(command) {
            return Err(AliasError::AliasEqualsCommand {
                alias: alias.to_string(),
                command: command.to_string(),
            });
        }

        if let Some(owner) = self.command_by_alias.get(&alias_key) {
            return Err(AliasError::AliasAlreadyRegistered {
                alias: alias.to_string(),
                existing_owner: owner.clone(),
            });
        }

        Ok(())
    }

    /// Registers `alias` for `command`.
    ///
    /// Either both mappings are updated or, on error, nothing changes.
    pub fn register(&mut self, command: &str, alias: &str) -> Result<()> {
        self.check(command, alias)?;

        let alias_key = self.key(alias);
        self.command_by_alias.insert(alias_key, command.to_string());
        self.aliases_by_command
            .entry(command.to_string())
            .or_default()
            .push(alias.to_string());
        self.generation += 1;

        tracing::debug!(command, alias, "Registered alias");
        Ok(())
    }

    /// Resolves an alias to the name of the command that owns it.
    ///
    /// Primary command names are not aliases and resolve to `None`; callers
    /// check their own command table first.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.command_by_alias
            .get(&self.key(name))
            .map(String::as_str)
    }

    /// Removes an alias. Returns `false` if it was not registered.
    pub fn remove(&mut self, alias: &str) -> bool {
        let alias_key = self.key(alias);
        let Some(command) = self.command_by_alias.remove(&alias_key) else {
            return false;
        };

        let case_sensitive = self.case_sensitive;
        if let Some(aliases) = self.aliases_by_command.get_mut(&command) {
            aliases.retain(|a| normalize(a, case_sensitive) != alias_key);
            if aliases.is_empty() {
                self.aliases_by_command.remove(&command);
            }
        }
        self.generation += 1;

        tracing::debug!(command = %command, alias, "Removed alias");
        true
    }

    /// Returns a copy of the aliases registered for `command`, in
    /// registration order.
    pub fn list_aliases(&self, command: &str) -> Vec<String> {
        self.aliases_by_command
            .get(command)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns a copy of every command that has at least one alias.
    pub fn list_all(&self) -> AliasSnapshot {
        self.aliases_by_command
            .iter()
            .map(|(command, aliases)| (command.clone(), aliases.clone()))
            .collect()
    }

    /// Returns true if `name` is a registered alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.command_by_alias.contains_key(&self.key(name))
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new(true)
    }
}
