//! Command lookup with alias indirection.
//!
//! The resolver caches the host's command table the first time it is asked
//! for a command and consults the [`AliasRegistry`] to map aliases onto
//! primary names. The cache is rebuilt whenever the registry has changed
//! since it was built, or after an explicit [`CommandResolver::invalidate`].

use std::collections::HashMap;

use super::registry::AliasRegistry;

/// Read-only view of the commands a host application knows about.
pub trait CommandSource {
    /// Opaque reference to a host command.
    type Handle: Clone;

    /// Lists every known command as (primary name, handle).
    fn list_commands(&self) -> Vec<(String, Self::Handle)>;
}

/// Cached command table plus the registry generation it was built against.
#[derive(Debug, Clone)]
struct CommandTable<H> {
    commands: HashMap<String, H>,
    generation: u64,
}

/// Two-level command lookup: alias indirection, then the host command table.
#[derive(Debug, Clone)]
pub struct CommandResolver<H> {
    table: Option<CommandTable<H>>,
}

impl<H: Clone> CommandResolver<H> {
    /// Creates a resolver with no cached table.
    pub fn new() -> Self {
        Self { table: None }
    }

    /// Returns true once the command table has been built.
    pub fn is_built(&self) -> bool {
        self.table.is_some()
    }

    /// Drops the cached command table so the next lookup rebuilds it.
    ///
    /// Hosts call this after adding or removing commands.
    pub fn invalidate(&mut self) {
        if self.table.take().is_some() {
            tracing::debug!("Command table invalidated");
        }
    }

    fn ensure_built<S>(&mut self, source: &S, registry: &AliasRegistry) -> &CommandTable<H>
    where
        S: CommandSource<Handle = H>,
    {
        let stale = self
            .table
            .as_ref()
            .map_or(true, |table| table.generation != registry.generation());

        if stale {
            self.table = None;
        }

        self.table.get_or_insert_with(|| {
            let commands: HashMap<String, H> = source.list_commands().into_iter().collect();
            tracing::debug!(commands = commands.len(), "Built command table");
            CommandTable {
                commands,
                generation: registry.generation(),
            }
        })
    }

    /// Looks up a command by primary name or alias.
    pub fn get_command<S>(&mut self, source: &S, registry: &AliasRegistry, name: &str) -> Option<H>
    where
        S: CommandSource<Handle = H>,
    {
        let effective = registry.resolve(name).unwrap_or(name);
        let table = self.ensure_built(source, registry);
        table.commands.get(effective).cloned()
    }
}

impl<H: Clone> Default for CommandResolver<H> {
    fn default() -> Self {
        Self::new()
    }
}
