//! Loading alias options from disk.

use command_aliases::{AliasConfig, AliasedCli, PlainHelpRenderer};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = AliasConfig::load_from_file(&dir.path().join("aliases.toml")).unwrap();
    assert_eq!(config, AliasConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aliases.toml");
    fs::write(
        &path,
        r#"
case_sensitive = false
alias_display_format = "[{aliases}]"
alias_separator = " / "
max_inline_aliases = 1
"#,
    )
    .unwrap();

    let config = AliasConfig::load_from_file(&path).unwrap();
    assert!(!config.case_sensitive);
    assert_eq!(config.max_inline_aliases, 1);

    let mut cli = AliasedCli::new(clap::Command::new("app"), &config).unwrap();
    cli.command(clap::Command::new("list"), &["ls", "l"]).unwrap();
    let help = cli.render_commands_help(&PlainHelpRenderer::default());
    assert!(help.starts_with("Commands:\n  list   [ls / +1 more]\n"));
}

#[test]
fn test_invalid_file_names_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aliases.toml");
    fs::write(&path, "max_inline_aliases = \"three\"").unwrap();

    let err = AliasConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("aliases.toml"));
}

#[test]
fn test_bad_template_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aliases.toml");
    fs::write(&path, "alias_display_format = \"no placeholder\"").unwrap();

    assert!(AliasConfig::load_from_file(&path).is_err());
}
