//! Modifier kind value object - which XKB modifier a key realizes

use std::fmt;

/// The XKB modifier a declared modifier key sets.
///
/// Only the three level modifiers take part in level arithmetic. Any other
/// XKB modifier (`Control`, `Mod1`, `Lock`, ...) is set by the key's action
/// but contributes no level bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Shift,
    LevelThree,
    LevelFive,
    Other(String),
}

impl ModifierKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "Shift" => ModifierKind::Shift,
            "LevelThree" => ModifierKind::LevelThree,
            "LevelFive" => ModifierKind::LevelFive,
            other => ModifierKind::Other(other.to_string()),
        }
    }

    /// Level bit contributed when this modifier is held.
    pub fn level_bit(&self) -> Option<u32> {
        match self {
            ModifierKind::Shift => Some(1 << 0),
            ModifierKind::LevelThree => Some(1 << 1),
            ModifierKind::LevelFive => Some(1 << 2),
            ModifierKind::Other(_) => None,
        }
    }

    pub fn xkb_name(&self) -> &str {
        match self {
            ModifierKind::Shift => "Shift",
            ModifierKind::LevelThree => "LevelThree",
            ModifierKind::LevelFive => "LevelFive",
            ModifierKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xkb_name())
    }
}
