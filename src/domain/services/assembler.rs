//! Table assembler
//!
//! Regroups the canonical table by physical key and lays each key's entries
//! out as one fixed-size level list per group.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::domain::entities::KeyEntry;
use crate::domain::value_objects::LevelClass;
use crate::error::{XkbgenError, XkbgenResult};

use super::table::KeyTable;

/// Levels of one group, indexed by level; `None` renders as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLevels<'t> {
    pub group: u32,
    pub levels: Vec<Option<&'t KeyEntry>>,
}

impl GroupLevels<'_> {
    pub fn has_symbols(&self) -> bool {
        self.levels.iter().flatten().any(|e| e.symbol.is_some())
    }

    pub fn has_actions(&self) -> bool {
        self.levels.iter().flatten().any(|e| e.action.is_some())
    }
}

/// Everything emitted for one physical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBlock<'t> {
    pub key: &'t str,
    pub class: LevelClass,
    /// Ascending by group index
    pub groups: Vec<GroupLevels<'t>>,
}

/// Build key blocks in order of each key's first appearance.
pub fn assemble(table: &KeyTable) -> XkbgenResult<Vec<KeyBlock<'_>>> {
    let mut by_key: IndexMap<&str, Vec<&KeyEntry>> = IndexMap::new();
    for entry in table.entries() {
        if entry.is_empty() {
            return Err(XkbgenError::structural(format!(
                "no action or symbol set for {}",
                entry.index
            )));
        }
        by_key.entry(entry.index.key.as_str()).or_default().push(entry);
    }

    by_key
        .into_iter()
        .map(|(key, entries)| assemble_key(key, &entries))
        .collect()
}

fn assemble_key<'t>(key: &'t str, entries: &[&'t KeyEntry]) -> XkbgenResult<KeyBlock<'t>> {
    let max_level = entries.iter().map(|e| e.index.level).max().unwrap_or(0);
    let class = LevelClass::for_max_level(key, max_level)?;

    let mut groups: BTreeMap<u32, Vec<Option<&'t KeyEntry>>> = BTreeMap::new();
    for entry in entries {
        let levels = groups
            .entry(entry.index.group)
            .or_insert_with(|| vec![None; class.levels()]);
        levels[entry.index.level as usize] = Some(*entry);
    }

    Ok(KeyBlock {
        key,
        class,
        groups: groups
            .into_iter()
            .map(|(group, levels)| GroupLevels { group, levels })
            .collect(),
    })
}
