//! Alias support for clap applications.
//!
//! [`AliasedCli`] wraps a root [`clap::Command`] and keeps the alias registry
//! next to it. Aliases are resolved before clap sees the arguments, so a
//! subcommand parses identically whichever name the user typed. Clap's own
//! alias machinery is not used: every alias is a key in the registry that
//! points at the one canonical subcommand.
//!
//! Nested groups are themselves [`AliasedCli`] values with their own
//! registries, and the generated `--help` lists each level's aliases.

use std::collections::BTreeMap;
use std::ffi::OsString;

use clap::{ArgMatches, Command};

use crate::aliases::{normalize, AliasRegistry, AliasSnapshot, CommandResolver, CommandSource};
use crate::config::AliasConfig;
use crate::error::{AliasError, Result};
use crate::help::{
    format_table, help_summary, DisplayConfig, HelpEntry, HelpRenderer, PlainHelpRenderer,
};

/// Heading used for the alias-aware commands section.
pub const COMMANDS_HEADING: &str = "Commands";

/// Name of the help subcommand clap generates for commands with subcommands.
const HELP_COMMAND: &str = "help";

/// About text clap gives its generated help subcommand.
const HELP_COMMAND_ABOUT: &str = "Print this message or the help of the given subcommand(s)";

impl CommandSource for Command {
    /// Primary subcommand name.
    type Handle = String;

    fn list_commands(&self) -> Vec<(String, String)> {
        self.get_subcommands()
            .map(|sub| (sub.get_name().to_string(), sub.get_name().to_string()))
            .collect()
    }
}

/// A clap command with alias-aware dispatch and help.
#[derive(Debug, Clone)]
pub struct AliasedCli {
    root: Command,
    registry: AliasRegistry,
    resolver: CommandResolver<String>,
    display: DisplayConfig,
    /// Nested groups by primary subcommand name.
    groups: BTreeMap<String, AliasedCli>,
}

impl AliasedCli {
    /// Wraps `root` using the given alias options.
    pub fn new(root: Command, config: &AliasConfig) -> Result<Self> {
        Ok(Self {
            root,
            registry: config.registry(),
            resolver: CommandResolver::new(),
            display: config.display_config()?,
            groups: BTreeMap::new(),
        })
    }

    /// Returns the wrapped command as defined, without alias-aware help.
    pub fn root(&self) -> &Command {
        &self.root
    }

    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    /// Returns true if clap will generate a `help` subcommand at this level.
    fn generates_help_command(&self) -> bool {
        !self.root.is_disable_help_subcommand_set()
            && self.root.get_subcommands().next().is_some()
            && self.root.find_subcommand(HELP_COMMAND).is_none()
    }

    /// Returns the subcommand whose name normalizes to the same key as `name`.
    fn subcommand_named(&self, name: &str) -> Option<&str> {
        let key = normalize(name, self.registry.case_sensitive());
        self.root
            .get_subcommands()
            .map(Command::get_name)
            .find(|existing| normalize(existing, self.registry.case_sensitive()) == key)
    }

    /// Rejects aliases that would shadow another subcommand, including the
    /// help subcommand clap adds at build time.
    fn check_alias_against_commands(&self, command: &str, alias: &str) -> Result<()> {
        let shadowed = match self.subcommand_named(alias) {
            Some(existing) if existing != command => Some(existing),
            Some(_) => None,
            None if normalize(alias, self.registry.case_sensitive()) == HELP_COMMAND
                && !self.root.is_disable_help_subcommand_set() =>
            {
                Some(HELP_COMMAND)
            }
            None => None,
        };

        match shadowed {
            Some(existing) => Err(AliasError::AliasEqualsCommand {
                alias: alias.to_string(),
                command: existing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Adds a subcommand together with its aliases.
    ///
    /// Either the subcommand and all of its aliases are added, or nothing is.
    pub fn command(&mut self, subcommand: Command, aliases: &[&str]) -> Result<()> {
        let name = subcommand.get_name().to_string();
        if self.subcommand_named(&name).is_some() || self.registry.is_alias(&name) {
            return Err(AliasError::duplicate_command(name));
        }

        let mut added: Vec<&str> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let result = self
                .check_alias_against_commands(&name, alias)
                .and_then(|()| self.registry.register(&name, alias));
            if let Err(e) = result {
                for registered in &added {
                    self.registry.remove(registered);
                }
                return Err(e);
            }
            added.push(*alias);
        }

        let root = std::mem::replace(&mut self.root, Command::new(""));
        self.root = root.subcommand(subcommand);
        self.resolver.invalidate();

        tracing::debug!(command = %name, aliases = added.len(), "Added command");
        Ok(())
    }

    /// Adds a nested group that keeps its own aliases.
    ///
    /// `aliases` name the group itself at this level.
    pub fn group(&mut self, child: AliasedCli, aliases: &[&str]) -> Result<()> {
        let name = child.root.get_name().to_string();
        self.command(child.root.clone(), aliases)?;
        self.groups.insert(name, child);
        Ok(())
    }

    /// Returns a nested group by primary name or alias.
    pub fn group_mut(&mut self, name: &str) -> Option<&mut AliasedCli> {
        let primary = self.registry.resolve(name).unwrap_or(name).to_string();
        self.groups.get_mut(&primary)
    }

    /// Adds an alias to an existing subcommand.
    pub fn add_alias(&mut self, command: &str, alias: &str) -> Result<()> {
        if self.root.find_subcommand(command).is_none() {
            return Err(AliasError::unknown_command(command));
        }
        self.check_alias_against_commands(command, alias)?;
        self.registry.register(command, alias)
    }

    /// Removes an alias. Returns `false` if it was not registered.
    pub fn remove_alias(&mut self, alias: &str) -> bool {
        self.registry.remove(alias)
    }

    /// Returns the aliases of one subcommand in registration order.
    pub fn aliases(&self, command: &str) -> Vec<String> {
        self.registry.list_aliases(command)
    }

    /// Returns every subcommand that has aliases.
    pub fn list_aliases(&self) -> AliasSnapshot {
        self.registry.list_all()
    }

    /// Looks up a subcommand by primary name or alias.
    pub fn get_command(&mut self, name: &str) -> Option<&Command> {
        let canonical = self
            .resolver
            .get_command(&self.root, &self.registry, name)?;
        self.root.find_subcommand(canonical)
    }

    /// Returns true if `token` is an option of this command that consumes the
    /// next argument as its value.
    fn option_takes_value(&self, token: &str) -> bool {
        let arg = if let Some(long) = token.strip_prefix("--") {
            if long.contains('=') {
                return false;
            }
            self.root.get_arguments().find(|a| a.get_long() == Some(long))
        } else if let Some(short) = token.strip_prefix('-') {
            let mut chars = short.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.root.get_arguments().find(|a| a.get_short() == Some(c)),
                _ => None,
            }
        } else {
            None
        };

        arg.is_some_and(|a| a.get_action().takes_values())
    }

    /// Finds the index of the subcommand token in `args`, scanning from
    /// `start`.
    fn subcommand_position(&self, args: &[OsString], start: usize) -> Option<usize> {
        let mut i = start;
        while i < args.len() {
            let token = args[i].to_str()?;
            if token == "--" {
                return None;
            }
            if !token.starts_with('-') || token == "-" {
                return Some(i);
            }
            i += if self.option_takes_value(token) { 2 } else { 1 };
        }
        None
    }

    /// Replaces `args[position]` with its primary name if it resolves.
    ///
    /// Returns the primary name.
    fn resolve_token(&mut self, args: &mut [OsString], position: usize) -> Option<String> {
        let token = args.get(position)?.to_str()?.to_string();
        let primary = self.get_command(&token)?.get_name().to_string();
        if primary != token {
            tracing::debug!(alias = %token, command = %primary, "Resolved alias");
            args[position] = primary.clone().into();
        }
        Some(primary)
    }

    /// Resolves the subcommand path at or after `start`, descending into
    /// nested groups.
    fn rewrite_from(&mut self, args: &mut [OsString], start: usize) {
        let Some(position) = self.subcommand_position(args, start) else {
            return;
        };

        if self.generates_help_command() && args[position].to_str() == Some(HELP_COMMAND) {
            self.rewrite_help_path(args, position + 1);
            return;
        }

        if let Some(primary) = self.resolve_token(args, position) {
            if let Some(child) = self.groups.get_mut(&primary) {
                child.rewrite_from(args, position + 1);
            }
        }
    }

    /// Resolves the command names following `help`.
    fn rewrite_help_path(&mut self, args: &mut [OsString], position: usize) {
        if let Some(primary) = self.resolve_token(args, position) {
            if let Some(child) = self.groups.get_mut(&primary) {
                child.rewrite_help_path(args, position + 1);
            }
        }
    }

    /// Replaces aliased subcommand tokens with their primary names.
    ///
    /// Everything else is passed through untouched.
    pub fn rewrite_args<I, T>(&mut self, args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        self.rewrite_from(&mut args, 1);
        args
    }

    /// Returns the clap command with alias-aware help installed at every
    /// level.
    pub fn prepared_command(&self) -> Command {
        let mut command = self.root.clone().help_template(self.help_template());
        for (name, child) in &self.groups {
            let prepared = child.prepared_command();
            command = command.mut_subcommand(name, move |_| prepared);
        }
        command
    }

    /// Resolves aliases in `args`, then parses them with clap.
    pub fn try_get_matches_from<I, T>(
        &mut self,
        args: I,
    ) -> std::result::Result<ArgMatches, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = self.rewrite_args(args);
        self.prepared_command().try_get_matches_from(args)
    }

    /// Builds help entries for the visible subcommands, in definition order.
    pub fn help_entries(&self) -> Vec<HelpEntry> {
        let mut entries: Vec<HelpEntry> = self
            .root
            .get_subcommands()
            .filter(|sub| !sub.is_hide_set())
            .map(|sub| HelpEntry {
                label: sub.get_name().to_string(),
                help: sub.get_about().map(|about| help_summary(&about.to_string())),
            })
            .collect();

        if self.generates_help_command() {
            entries.push(HelpEntry::new(HELP_COMMAND, Some(HELP_COMMAND_ABOUT)));
        }
        entries
    }

    /// Renders the alias-aware commands section with `renderer`.
    pub fn render_commands_help(&self, renderer: &dyn HelpRenderer) -> String {
        let table = format_table(&self.help_entries(), &self.registry, &self.display);
        renderer.render_commands(COMMANDS_HEADING, &table)
    }

    /// Builds a clap help template whose commands section lists aliases.
    fn help_template(&self) -> String {
        let mut template =
            String::from("{before-help}{about-with-newline}\n{usage-heading} {usage}\n");

        let commands = self.render_commands_help(&PlainHelpRenderer::default());
        if !commands.is_empty() {
            template.push('\n');
            template.push_str(&commands);
        }
        if self.root.get_positionals().next().is_some() {
            template.push_str("\nArguments:\n{positionals}\n");
        }
        template.push_str("\nOptions:\n{options}{after-help}");
        template
    }
}
