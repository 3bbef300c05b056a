//! Domain Services
//!
//! The compiler passes, leaf first: shortcut parsing, modifier and group
//! registration, the canonical table, resolution and assembly.

mod assembler;
mod groups;
mod modifiers;
mod resolver;
mod shortcut;
mod table;

pub use assembler::{assemble, GroupLevels, KeyBlock};
pub use groups::{GroupRegistry, BASE_GROUP};
pub use modifiers::{Modifier, ModifierRegistry, ModifierSpec, OneOrMany, NO_MODIFIER};
pub use resolver::{ResolveContext, Resolver};
pub use shortcut::{is_identifier, ShortcutExpr};
pub use table::KeyTable;
