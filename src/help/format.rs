//! Help text formatting for commands with aliases.
//!
//! Produces plain display labels such as `list     (ls, l)` aligned into
//! columns by terminal width. Markup and colors are left to the
//! [`HelpRenderer`](super::HelpRenderer).

use unicode_width::UnicodeWidthChar;

use crate::error::{AliasError, Result};

/// Placeholder replaced by the joined alias text in a display template.
pub const ALIASES_PLACEHOLDER: &str = "{aliases}";

/// Gap between the command name column and the alias column.
const COLUMN_GAP: &str = "   ";

/// Immutable display options for alias lists in help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    format: String,
    separator: String,
    max_inline: usize,
    show_aliases: bool,
}

impl DisplayConfig {
    /// Creates a display config.
    ///
    /// `format` must contain [`ALIASES_PLACEHOLDER`] exactly once.
    pub fn new(
        format: impl Into<String>,
        separator: impl Into<String>,
        max_inline: usize,
        show_aliases: bool,
    ) -> Result<Self> {
        let format = format.into();
        match format.matches(ALIASES_PLACEHOLDER).count() {
            1 => {}
            0 => {
                return Err(AliasError::config(format!(
                    "alias display format '{format}' must contain {ALIASES_PLACEHOLDER}"
                )))
            }
            _ => {
                return Err(AliasError::config(format!(
                    "alias display format '{format}' must contain {ALIASES_PLACEHOLDER} only once"
                )))
            }
        }

        Ok(Self {
            format,
            separator: separator.into(),
            max_inline,
            show_aliases,
        })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn max_inline(&self) -> usize {
        self.max_inline
    }

    pub fn show_aliases(&self) -> bool {
        self.show_aliases
    }

    /// Renders the alias column text for one command.
    pub fn alias_text<S: AsRef<str>>(&self, aliases: &[S]) -> String {
        let joined = truncate(aliases, self.max_inline, &self.separator);
        self.format.replacen(ALIASES_PLACEHOLDER, &joined, 1)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: "({aliases})".to_string(),
            separator: ", ".to_string(),
            max_inline: 3,
            show_aliases: true,
        }
    }
}

/// Joins up to `max_inline` aliases and summarizes the rest as `+N more`.
///
/// ```
/// use command_aliases::help::truncate;
///
/// assert_eq!(truncate(&["a", "b", "c", "d"], 2, ", "), "a, b, +2 more");
/// assert_eq!(truncate(&["a", "b"], 0, ", "), "+2 more");
/// ```
pub fn truncate<S: AsRef<str>>(aliases: &[S], max_inline: usize, separator: &str) -> String {
    if aliases.is_empty() {
        return String::new();
    }

    let shown = aliases.len().min(max_inline);
    let joined = aliases[..shown]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator);

    let hidden = aliases.len() - shown;
    if hidden == 0 {
        return joined;
    }

    if shown == 0 {
        format!("+{hidden} more")
    } else {
        format!("{joined}{separator}+{hidden} more")
    }
}

/// Returns the number of terminal columns `text` occupies.
///
/// Wide characters (CJK etc.) count as two columns. If any character has no
/// defined width, such as a control character, the code point count is used
/// instead.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .try_fold(0usize, |width, c| c.width().map(|w| width + w))
        .unwrap_or_else(|| text.chars().count())
}

/// Pads `text` with spaces up to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// A command as listed in help output: its name and optional help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Primary command name, or the aligned name-plus-aliases label after
    /// formatting.
    pub label: String,
    /// Short help text, if any.
    pub help: Option<String>,
}

impl HelpEntry {
    pub fn new(label: impl Into<String>, help: Option<impl Into<String>>) -> Self {
        Self {
            label: label.into(),
            help: help.map(Into::into),
        }
    }
}

/// Formatted rows plus the width of the widest label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasTable {
    pub rows: Vec<HelpEntry>,
    pub max_label_width: usize,
}

/// Lookup of aliases by command name.
///
/// Implemented for the registry itself and for its snapshots so help can be
/// rendered from either.
pub trait AliasLookup {
    fn aliases_for(&self, command: &str) -> Vec<String>;
}

impl AliasLookup for crate::aliases::AliasSnapshot {
    fn aliases_for(&self, command: &str) -> Vec<String> {
        self.get(command).cloned().unwrap_or_default()
    }
}

impl AliasLookup for crate::aliases::AliasRegistry {
    fn aliases_for(&self, command: &str) -> Vec<String> {
        self.list_aliases(command)
    }
}

/// Builds aligned help labels for `commands`, preserving their order.
///
/// Commands with aliases get `name   (aliases)` with both columns padded to
/// the widest entry in this call; commands without aliases keep their bare
/// name.
pub fn format_table<L: AliasLookup + ?Sized>(
    commands: &[HelpEntry],
    aliases: &L,
    config: &DisplayConfig,
) -> AliasTable {
    let alias_texts: Vec<Option<String>> = commands
        .iter()
        .map(|entry| {
            if !config.show_aliases() {
                return None;
            }
            let list = aliases.aliases_for(&entry.label);
            (!list.is_empty()).then(|| config.alias_text(&list))
        })
        .collect();

    let max_name_width = commands
        .iter()
        .map(|entry| display_width(&entry.label))
        .max()
        .unwrap_or(0);
    let max_alias_width = alias_texts
        .iter()
        .flatten()
        .map(|text| display_width(text))
        .max()
        .unwrap_or(0);

    let rows: Vec<HelpEntry> = commands
        .iter()
        .zip(&alias_texts)
        .map(|(entry, alias_text)| {
            let label = match alias_text {
                Some(text) => format!(
                    "{}{COLUMN_GAP}{}",
                    pad(&entry.label, max_name_width),
                    pad(text, max_alias_width)
                ),
                None => entry.label.clone(),
            };
            HelpEntry {
                label,
                help: entry.help.clone(),
            }
        })
        .collect();

    let max_label_width = rows
        .iter()
        .map(|row| display_width(&row.label))
        .max()
        .unwrap_or(0);

    AliasTable {
        rows,
        max_label_width,
    }
}
