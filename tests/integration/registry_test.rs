//! Registry and resolver behavior as seen by a host application.

use command_aliases::{AliasError, AliasRegistry, CommandResolver, CommandSource};
use pretty_assertions::assert_eq;

use super::init_logging;

/// Minimal host with a growable command table.
#[derive(Default)]
struct Host {
    commands: Vec<&'static str>,
}

impl CommandSource for Host {
    type Handle = &'static str;

    fn list_commands(&self) -> Vec<(String, &'static str)> {
        self.commands.iter().map(|c| (c.to_string(), *c)).collect()
    }
}

#[test]
fn test_bijectivity() {
    init_logging();
    let mut registry = AliasRegistry::new(false);
    let pairs = [("list", "ls"), ("list", "l"), ("delete", "rm"), ("create", "new")];
    for (command, alias) in pairs {
        registry.register(command, alias).unwrap();
    }

    for (command, alias) in pairs {
        assert_eq!(registry.resolve(alias), Some(command));
        assert!(registry.list_aliases(command).contains(&alias.to_string()));
        assert_eq!(registry.resolve(command), None);
    }
}

#[test]
fn test_exclusive_ownership() {
    let mut registry = AliasRegistry::new(false);
    registry.register("list", "ls").unwrap();

    match registry.register("delete", "ls") {
        Err(AliasError::AliasAlreadyRegistered { existing_owner, .. }) => {
            assert_eq!(existing_owner, "list")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_remove_then_reregister() {
    let mut registry = AliasRegistry::new(false);
    registry.register("list", "ls").unwrap();

    assert!(registry.remove("ls"));
    assert!(!registry.remove("ls"));
    assert_eq!(registry.resolve("ls"), None);

    registry.register("delete", "ls").unwrap();
    assert_eq!(registry.resolve("ls"), Some("delete"));
    assert_eq!(
        registry.list_all().into_iter().collect::<Vec<_>>(),
        vec![("delete".to_string(), vec!["ls".to_string()])]
    );
}

#[test]
fn test_case_modes() {
    let mut insensitive = AliasRegistry::new(false);
    insensitive.register("list", "ls").unwrap();
    assert!(insensitive.register("delete", "LS").is_err());

    let mut sensitive = AliasRegistry::new(true);
    sensitive.register("list", "ls").unwrap();
    sensitive.register("delete", "LS").unwrap();
    assert_eq!(sensitive.resolve("ls"), Some("list"));
    assert_eq!(sensitive.resolve("LS"), Some("delete"));
}

#[test]
fn test_unicode_alias_round_trip() {
    let mut registry = AliasRegistry::new(false);
    registry.register("list", "列表").unwrap();
    assert_eq!(registry.resolve("列表"), Some("list"));
}

#[test]
fn test_resolver_dispatch_with_dynamic_registration() {
    init_logging();
    let mut host = Host {
        commands: vec!["list", "delete"],
    };
    let mut registry = AliasRegistry::new(false);
    registry.register("list", "ls").unwrap();
    let mut resolver = CommandResolver::new();

    assert_eq!(resolver.get_command(&host, &registry, "ls"), Some("list"));
    assert_eq!(resolver.get_command(&host, &registry, "delete"), Some("delete"));
    assert_eq!(resolver.get_command(&host, &registry, "sync"), None);

    // Plugin-style registration after the table was first built.
    host.commands.push("sync");
    registry.register("sync", "s").unwrap();

    assert_eq!(resolver.get_command(&host, &registry, "s"), Some("sync"));
    assert_eq!(resolver.get_command(&host, &registry, "S"), Some("sync"));
}
