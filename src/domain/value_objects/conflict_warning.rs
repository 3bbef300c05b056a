//! Conflict warning value object.

use std::fmt;

use crate::domain::entities::KeyIndex;

/// Which half of an entry was overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Symbol,
    Action,
}

impl fmt::Display for ConflictField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictField::Symbol => f.write_str("symbol"),
            ConflictField::Action => f.write_str("action"),
        }
    }
}

/// Non-fatal warning: a set value was replaced by a different one.
///
/// The new value is kept; override sections rely on this shadowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictWarning {
    pub index: KeyIndex,
    pub field: ConflictField,
    pub previous: String,
    pub replacement: String,
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "replacing {} {:?} for {} with {:?}",
            self.field, self.previous, self.index, self.replacement
        )
    }
}
