//! Shortcut expressions: `shift+altgr+<AD01>`, `shift+q`, `altgr`.
//!
//! Parsing here is purely syntactic. Turning modifier names into a level is
//! the modifier registry's job, see [`super::ModifierRegistry::resolve`].

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::KeyToken;
use crate::error::{XkbgenError, XkbgenResult};

static SHORTCUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<mods>(?:\w+\s*\+\s*)*)(?:(?P<key><[A-Z0-9+-]{2,4}>|\S)|(?P<lmod>\w+))$",
    )
    .expect("valid shortcut regex")
});

static MODIFIER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid modifier name regex"));

/// A parsed shortcut: modifier names (lowercased) plus an optional key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutExpr {
    pub modifiers: Vec<String>,
    pub key: Option<KeyToken>,
}

impl ShortcutExpr {
    /// Parse a shortcut.
    ///
    /// A trailing word with no key is folded into the modifier list, so
    /// `shift+altgr` is two modifiers and no key. A single character is
    /// always a key: `a` binds key `a`, never a modifier named `a`.
    pub fn parse(text: &str) -> XkbgenResult<Self> {
        let trimmed = text.trim();
        let caps = SHORTCUT_RE
            .captures(trimmed)
            .ok_or_else(|| XkbgenError::Syntax {
                shortcut: text.to_string(),
            })?;

        let mut modifier_text = caps
            .name("mods")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        if let Some(lmod) = caps.name("lmod") {
            modifier_text.push_str(lmod.as_str());
        }

        let modifiers = MODIFIER_NAME_RE
            .find_iter(&modifier_text.to_lowercase())
            .map(|m| m.as_str().to_string())
            .collect();
        let key = caps.name("key").map(|k| KeyToken::parse(k.as_str()));

        Ok(Self { modifiers, key })
    }
}

/// True for a plain identifier usable as a modifier name.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}
