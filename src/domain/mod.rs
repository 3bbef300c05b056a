//! Domain Layer
//!
//! The layout compiler proper: key entries, registries and the resolution
//! engine. Nothing here touches the file system.
//!
//! ## Structure
//!
//! - `entities/` - Key tokens, key entries, specification nodes
//! - `value_objects/` - Modifier kinds, level classes, conflict warnings
//! - `services/` - Shortcut parser, registries, canonical table, resolver, assembler

pub mod entities;
pub mod services;
pub mod value_objects;
