//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::XkbgenResult;

use super::loader::{self, ConfigWarning};

/// Includes and layout of the generated `xkb_keymap` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// `xkb_keycodes` include
    pub keycodes: String,
    /// `xkb_types` include; must provide the ONE/TWO/FOUR/EIGHT_LEVEL types
    pub types: String,
    /// `xkb_compat` include
    pub compat: String,
    /// `xkb_geometry` include, omitted when unset
    pub geometry: Option<String>,
    /// One indentation step
    pub indent: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            keycodes: "evdev".to_string(),
            types: "complete".to_string(),
            compat: "complete".to_string(),
            geometry: None,
            indent: "  ".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub template: TemplateConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring warnings.
    pub fn load(path: &Path) -> XkbgenResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect warnings for unknown keys.
    pub fn load_with_warnings(path: &Path) -> XkbgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `path` if given, else defaults; then apply `XKBGEN_*` overrides.
    pub fn load_or_default(path: Option<&Path>) -> XkbgenResult<(Self, Vec<ConfigWarning>)> {
        let (config, warnings) = match path {
            Some(path) => Self::load_with_warnings(path)?,
            None => (Self::default(), Vec::new()),
        };
        Ok((loader::with_env_overrides(config), warnings))
    }
}
