//! xkbgen - YAML to XKB keymap compiler
//!
//! A layout is written as a tree of modifiers, groups, per-key overrides and
//! row shorthand. xkbgen resolves it into one symbol/action table indexed by
//! (physical key, group, level) and renders that table as an `xkb_keymap`
//! document for `xkbcomp`.

pub mod application;
pub mod codegen;
pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{Compilation, KeymapPipeline};
pub use config::{Config, LayoutDocument, TemplateConfig};
pub use domain::entities::{Action, KeyEntry, KeyIndex, KeyToken, SpecNode};
pub use domain::services::{KeyTable, ModifierRegistry, Resolver};
pub use error::{XkbgenError, XkbgenResult};
