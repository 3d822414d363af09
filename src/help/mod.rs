//! Alias-aware help output.
//!
//! [`format`] builds plain, column-aligned labels; [`renderer`] is the hook
//! through which the host application draws them.

pub mod format;
pub mod renderer;

pub use format::{
    display_width, format_table, truncate, AliasLookup, AliasTable, DisplayConfig, HelpEntry,
    ALIASES_PLACEHOLDER,
};
pub use renderer::{help_summary, HelpRenderer, PlainHelpRenderer};
