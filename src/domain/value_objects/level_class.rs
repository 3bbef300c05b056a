//! Level class value object - the XKB key type chosen by level count

use crate::error::{XkbgenError, XkbgenResult};

/// Number of levels a key is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelClass {
    One,
    Two,
    Four,
    Eight,
}

impl LevelClass {
    /// Smallest class with room for `max_level` (zero-based).
    pub fn for_max_level(key: &str, max_level: u32) -> XkbgenResult<Self> {
        match max_level {
            0 => Ok(LevelClass::One),
            1 => Ok(LevelClass::Two),
            2..=3 => Ok(LevelClass::Four),
            4..=7 => Ok(LevelClass::Eight),
            _ => Err(XkbgenError::LevelOverflow {
                key: key.to_string(),
                level: max_level + 1,
            }),
        }
    }

    pub fn levels(self) -> usize {
        match self {
            LevelClass::One => 1,
            LevelClass::Two => 2,
            LevelClass::Four => 4,
            LevelClass::Eight => 8,
        }
    }

    /// Name of the XKB key type in the "complete" types table.
    pub fn xkb_type(self) -> &'static str {
        match self {
            LevelClass::One => "ONE_LEVEL",
            LevelClass::Two => "TWO_LEVEL",
            LevelClass::Four => "FOUR_LEVEL",
            LevelClass::Eight => "EIGHT_LEVEL",
        }
    }
}
