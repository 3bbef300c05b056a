//! Error types for xkbgen
//!
//! Every variant is fatal: compilation stops before anything is emitted.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xkbgen operations
pub type XkbgenResult<T> = Result<T, XkbgenError>;

/// Main error type for xkbgen operations
#[derive(Error, Debug)]
pub enum XkbgenError {
    /// Shortcut or identifier does not match the expected grammar
    #[error("invalid shortcut '{shortcut}'")]
    Syntax { shortcut: String },

    /// Modifier name was never declared in MODIFIERS
    #[error("no modifier named '{name}'")]
    UnknownModifier { name: String },

    /// Group name was never declared in GROUPS
    #[error("unknown group '{name}'")]
    UnknownGroup { name: String },

    /// Value has the wrong shape for where it appears
    #[error("{message}")]
    Structural { message: String },

    /// Symbolic key reference with no base-layer key producing that symbol
    #[error("can't resolve key '{key}': no key produces it in the BASE layer")]
    UnresolvedReference { key: String },

    /// Modifier declared twice
    #[error("modifier '{name}' is already defined")]
    DuplicateModifier { name: String },

    /// Group declared twice
    #[error("group '{name}' is already defined")]
    DuplicateGroup { name: String },

    /// Key uses a level that needs more than eight levels
    #[error("key {key} uses level {level}, at most 8 levels are supported")]
    LevelOverflow { key: String, level: u32 },

    /// Specification node of an unsupported kind
    #[error("specification for {context} has unsupported type {found}")]
    Type { context: String, found: String },

    /// Input file could not be read
    #[error("can't read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML configuration error
    #[error("invalid config {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl XkbgenError {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        XkbgenError::Structural {
            message: message.into(),
        }
    }
}
