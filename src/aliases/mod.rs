//! Alias bookkeeping and command resolution.
//!
//! The registry owns the alias mappings; the resolver layers them over the
//! host application's own command table.

pub mod normalize;
pub mod registry;
pub mod resolver;

pub use normalize::normalize;
pub use registry::{validate_alias, AliasRegistry, AliasSnapshot};
pub use resolver::{CommandResolver, CommandSource};
