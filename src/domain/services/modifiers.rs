//! Modifier registry
//!
//! Declares modifier keys, assigns level bits and turns shortcut
//! expressions into levels.

use indexmap::IndexMap;
use log::info;
use serde::Deserialize;

use crate::domain::entities::{Action, KeyEntry, KeyIndex, KeyToken};
use crate::domain::value_objects::ModifierKind;
use crate::error::{XkbgenError, XkbgenResult};

use super::shortcut::{is_identifier, ShortcutExpr};
use super::table::KeyTable;

/// Name reserved for "no modifier", usable as `mods: none`.
pub const NO_MODIFIER: &str = "none";

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// A modifier declaration from the MODIFIERS section.
///
/// ```yaml
/// shift:
///   mod: Shift
///   keycodes: [<LFSH>, <RTSH>]
///   keysyms: [Shift_L, Shift_R]
///   x11: Shift
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModifierSpec {
    /// XKB modifier set by the keys; absent for plain symbol keys
    #[serde(default, rename = "mod", alias = "kind")]
    pub kind: Option<String>,
    #[serde(rename = "keycodes", alias = "keys")]
    pub keys: OneOrMany,
    #[serde(rename = "keysyms", alias = "symbols")]
    pub symbols: OneOrMany,
    /// X11 modifier class for a `modifier_map` line
    #[serde(default, rename = "x11", alias = "hardware_class")]
    pub hardware_class: Option<String>,
}

/// A registered modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub name: String,
    pub kind: Option<ModifierKind>,
    pub keys: Vec<String>,
}

impl Modifier {
    pub fn level_bit(&self) -> u32 {
        self.kind
            .as_ref()
            .and_then(ModifierKind::level_bit)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct ModifierRegistry {
    modifiers: IndexMap<String, Modifier>,
    modifier_maps: Vec<String>,
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        let mut modifiers = IndexMap::new();
        modifiers.insert(
            NO_MODIFIER.to_string(),
            Modifier {
                name: NO_MODIFIER.to_string(),
                kind: None,
                keys: Vec::new(),
            },
        );
        Self {
            modifiers,
            modifier_maps: Vec::new(),
        }
    }
}

impl ModifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare modifier `name` and bind its keys at group 0, level 0.
    pub fn register(
        &mut self,
        table: &mut KeyTable,
        name: &str,
        spec: ModifierSpec,
    ) -> XkbgenResult<&Modifier> {
        let name = name.to_lowercase();
        if !is_identifier(&name) {
            return Err(XkbgenError::Syntax { shortcut: name });
        }
        if self.modifiers.contains_key(&name) {
            return Err(XkbgenError::DuplicateModifier { name });
        }

        let keys = spec.keys.into_vec();
        let mut symbols = spec.symbols.into_vec();
        if let Some(key) = keys.iter().find(|k| !KeyToken::parse(k).is_physical()) {
            return Err(XkbgenError::structural(format!(
                "modifier '{name}' must be bound to physical key codes, got '{key}'"
            )));
        }
        if symbols.len() == 1 && keys.len() > 1 {
            symbols = vec![symbols[0].clone(); keys.len()];
        }
        if symbols.len() != keys.len() {
            return Err(XkbgenError::structural(format!(
                "modifier '{name}' has {} key codes but {} key symbols",
                keys.len(),
                symbols.len()
            )));
        }

        let kind = spec.kind.as_deref().map(ModifierKind::parse);
        let action = kind.as_ref().map(|kind| Action::SetMods {
            modifiers: kind.xkb_name().to_string(),
            clear_locks: true,
        });

        for (key, symbol) in keys.iter().zip(symbols) {
            let mut entry = KeyEntry::new(KeyIndex::new(key.as_str(), 0, 0)).with_symbol(symbol);
            entry.action = action.clone();
            let stored = table.canonicalize(entry);
            match &kind {
                Some(kind) => info!("Setting key {stored} to modifier '{name}' ({kind})."),
                None => info!("Setting key {stored} for modifier '{name}'."),
            }
        }

        if let Some(class) = spec.hardware_class {
            self.modifier_maps
                .push(format!("modifier_map {class} {{ {} }};\n", keys.join(", ")));
        }

        let modifier = Modifier {
            name: name.clone(),
            kind,
            keys,
        };
        Ok(self.modifiers.entry(name).or_insert(modifier))
    }

    pub fn get(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.get(&name.to_lowercase())
    }

    /// Level selected by holding all of `names`.
    pub fn level_of(&self, names: &[String]) -> XkbgenResult<u32> {
        names.iter().try_fold(0, |level, name| {
            self.get(name)
                .map(|m| level | m.level_bit())
                .ok_or_else(|| XkbgenError::UnknownModifier {
                    name: name.to_string(),
                })
        })
    }

    /// Parse `shortcut` into its level and optional key.
    pub fn resolve(&self, shortcut: &str) -> XkbgenResult<(u32, Option<KeyToken>)> {
        let expr = ShortcutExpr::parse(shortcut)?;
        let level = self.level_of(&expr.modifiers)?;
        Ok((level, expr.key))
    }

    /// Parse a modifier-only shortcut, as used by `mods:`.
    pub fn level_only(&self, shortcut: &str) -> XkbgenResult<u32> {
        match self.resolve(shortcut)? {
            (level, None) => Ok(level),
            (_, Some(key)) => Err(XkbgenError::structural(format!(
                "can't specify a key here ('{shortcut}' names key '{key}')"
            ))),
        }
    }

    /// `modifier_map` lines for the keymap epilogue.
    pub fn modifier_maps(&self) -> &[String] {
        &self.modifier_maps
    }

    /// Declared modifiers, `none` first.
    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.values()
    }
}
