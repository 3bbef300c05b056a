//! Group registry
//!
//! Group 0 is the implicit BASE group. Every other group is declared by a
//! latch: a key + level whose action switches into it.

use indexmap::IndexMap;
use log::info;

use crate::domain::entities::{Action, KeyEntry, KeyIndex, KeyToken};
use crate::error::{XkbgenError, XkbgenResult};

use super::modifiers::ModifierRegistry;
use super::table::KeyTable;

/// Name of the always-active group.
pub const BASE_GROUP: &str = "BASE";

#[derive(Debug, Clone)]
pub struct GroupRegistry {
    groups: IndexMap<String, u32>,
}

impl Default for GroupRegistry {
    fn default() -> Self {
        let mut groups = IndexMap::new();
        groups.insert(BASE_GROUP.to_string(), 0);
        Self { groups }
    }
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare group `name`, latched by `shortcut` (e.g. `altgr+<AB05>`).
    pub fn register_latch(
        &mut self,
        table: &mut KeyTable,
        modifiers: &ModifierRegistry,
        name: &str,
        shortcut: &str,
    ) -> XkbgenResult<u32> {
        if self.groups.contains_key(name) {
            return Err(XkbgenError::DuplicateGroup {
                name: name.to_string(),
            });
        }
        let (level, key) = modifiers.resolve(shortcut)?;
        let key = match key {
            Some(KeyToken::Physical(key)) => key,
            _ => {
                return Err(XkbgenError::structural(format!(
                    "latch for group '{name}' is missing an XKB key code ('{shortcut}')"
                )))
            }
        };

        let group = self.groups.len() as u32;
        self.groups.insert(name.to_string(), group);

        let latch =
            KeyEntry::new(KeyIndex::new(key, 0, level)).with_action(Action::LatchGroup { group });
        let stored = table.canonicalize(latch);
        info!("Setting latch key {stored} for accessing group '{name}'.");
        Ok(group)
    }

    pub fn index_of(&self, name: &str) -> XkbgenResult<u32> {
        self.groups
            .get(name)
            .copied()
            .ok_or_else(|| XkbgenError::UnknownGroup {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
