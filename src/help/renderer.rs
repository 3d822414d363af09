//! Help renderer hook.
//!
//! The host application decides how the formatted command table is drawn.
//! [`PlainHelpRenderer`] covers the common case of uncolored terminal text.

use super::format::{display_width, AliasTable};

/// Turns a formatted command table into final help output.
pub trait HelpRenderer {
    /// Renders one titled section of commands.
    fn render_commands(&self, title: &str, table: &AliasTable) -> String;
}

/// Renders `Title:` followed by indented, column-aligned rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainHelpRenderer {
    /// Spaces before each row.
    pub indent: usize,
    /// Spaces between the label column and the help text.
    pub gap: usize,
}

impl Default for PlainHelpRenderer {
    fn default() -> Self {
        Self { indent: 2, gap: 2 }
    }
}

impl HelpRenderer for PlainHelpRenderer {
    fn render_commands(&self, title: &str, table: &AliasTable) -> String {
        if table.rows.is_empty() {
            return String::new();
        }

        let indent = " ".repeat(self.indent);
        let lines = table
            .rows
            .iter()
            .map(|row| match row.help.as_deref().filter(|h| !h.is_empty()) {
                Some(help) => {
                    let fill = table.max_label_width.saturating_sub(display_width(&row.label));
                    format!(
                        "{indent}{}{}{}{help}",
                        row.label,
                        " ".repeat(fill),
                        " ".repeat(self.gap)
                    )
                }
                None => format!("{indent}{}", row.label.trim_end()),
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("{title}:\n{lines}\n")
    }
}

/// Returns the first paragraph of a command's help text on one line.
///
/// Text after a form feed is treated as hidden, and line breaks inside the
/// paragraph are collapsed to single spaces.
pub fn help_summary(help: &str) -> String {
    let visible = help.split('\x0c').next().unwrap_or_default();
    let paragraph = visible.trim().split("\n\n").next().unwrap_or_default();
    paragraph.split_whitespace().collect::<Vec<_>>().join(" ")
}
