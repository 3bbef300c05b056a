//! Canonical key table
//!
//! Holds exactly one [`KeyEntry`] per (key, group, level). Every write goes
//! through [`KeyTable::canonicalize`], which merges into the existing entry:
//! - Symbol and action merge independently
//! - An absent incoming value never clears a present one
//! - A different present value replaces the old one and records a warning

use std::collections::HashMap;

use indexmap::IndexMap;
use log::warn;

use crate::domain::entities::{KeyEntry, KeyIndex};
use crate::domain::value_objects::{ConflictField, ConflictWarning};

#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    entries: IndexMap<KeyIndex, KeyEntry>,
    base_layer: HashMap<String, String>,
    warnings: Vec<ConflictWarning>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `entry` into the table and return the stored entry.
    ///
    /// Group 0, level 0 symbols are indexed for symbolic key lookups.
    pub fn canonicalize(&mut self, entry: KeyEntry) -> &KeyEntry {
        let KeyEntry {
            index,
            symbol,
            action,
        } = entry;

        let stored = self
            .entries
            .entry(index.clone())
            .or_insert_with(|| KeyEntry::new(index));

        if let Some(symbol) = symbol {
            if let Some(previous) = stored.symbol.as_ref().filter(|s| **s != symbol) {
                let conflict = ConflictWarning {
                    index: stored.index.clone(),
                    field: ConflictField::Symbol,
                    previous: previous.clone(),
                    replacement: symbol.clone(),
                };
                warn!("{conflict}");
                self.warnings.push(conflict);
            }
            stored.symbol = Some(symbol);
        }

        if let Some(action) = action {
            if let Some(previous) = stored.action.as_ref().filter(|a| **a != action) {
                let conflict = ConflictWarning {
                    index: stored.index.clone(),
                    field: ConflictField::Action,
                    previous: previous.to_string(),
                    replacement: action.to_string(),
                };
                warn!("{conflict}");
                self.warnings.push(conflict);
            }
            stored.action = Some(action);
        }

        if stored.index.group == 0 && stored.index.level == 0 {
            if let Some(symbol) = &stored.symbol {
                self.base_layer
                    .insert(symbol.clone(), stored.index.key.clone());
            }
        }

        stored
    }

    /// Physical key producing `symbol` at group 0, level 0.
    pub fn base_key_for(&self, symbol: &str) -> Option<&str> {
        self.base_layer.get(symbol).map(String::as_str)
    }

    pub fn get(&self, index: &KeyIndex) -> Option<&KeyEntry> {
        self.entries.get(index)
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &KeyEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn warnings(&self) -> &[ConflictWarning] {
        &self.warnings
    }
}
