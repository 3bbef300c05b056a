//! Configuration module for xkbgen
//!
//! Two inputs:
//! 1. The layout document (YAML), see [`layout`]
//! 2. The emit configuration (TOML), layered as CLI flags > `XKBGEN_*`
//!    environment variables > config file > built-in defaults

pub mod layout;
mod loader;
mod types;

pub use layout::LayoutDocument;
pub use loader::ConfigWarning;
pub use types::{Config, TemplateConfig};
