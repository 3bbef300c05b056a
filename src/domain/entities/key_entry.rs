//! Key entries: the unit of the canonical keymap table.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static PHYSICAL_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<[A-Z0-9]{2,4}>$").expect("valid key code regex"));

/// Key reference as written in a layout document.
///
/// `<AD01>` names a hardware position. Anything else (`q`, `1`) is symbolic
/// and means "the key that produces this symbol in the BASE layer".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Physical(String),
    Symbolic(String),
}

impl KeyToken {
    pub fn parse(token: &str) -> Self {
        if PHYSICAL_KEY_RE.is_match(token) {
            KeyToken::Physical(token.to_string())
        } else {
            KeyToken::Symbolic(token.to_string())
        }
    }

    pub fn is_physical(&self) -> bool {
        matches!(self, KeyToken::Physical(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            KeyToken::Physical(s) | KeyToken::Symbolic(s) => s,
        }
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a canonical entry: physical key × group × level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyIndex {
    /// Physical key code, e.g. `<AD01>`
    pub key: String,
    /// Zero-based group (0 is BASE)
    pub group: u32,
    /// Zero-based shift level
    pub level: u32,
}

impl KeyIndex {
    pub fn new(key: impl Into<String>, group: u32, level: u32) -> Self {
        Self {
            key: key.into(),
            group,
            level,
        }
    }
}

impl fmt::Display for KeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@group{}[{}]", self.key, self.group + 1, self.level + 1)
    }
}

/// XKB action bound to a key level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `SetMods(modifiers=<name>, clearLocks)`
    SetMods { modifiers: String, clear_locks: bool },
    /// `LatchGroup(group=<n>)`, `group` is zero-based here
    LatchGroup { group: u32 },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetMods {
                modifiers,
                clear_locks: true,
            } => write!(f, "SetMods(modifiers={modifiers}, clearLocks)"),
            Action::SetMods { modifiers, .. } => write!(f, "SetMods(modifiers={modifiers})"),
            Action::LatchGroup { group } => write!(f, "LatchGroup(group={})", group + 1),
        }
    }
}

/// Symbol and/or action stored for one [`KeyIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    pub index: KeyIndex,
    /// A single character or a literal keysym name (`Shift_L`, `dead_acute`)
    pub symbol: Option<String>,
    pub action: Option<Action>,
}

impl KeyEntry {
    pub fn new(index: KeyIndex) -> Self {
        Self {
            index,
            symbol: None,
            action: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_none() && self.action.is_none()
    }
}

impl fmt::Display for KeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(sym=", self.index)?;
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol:?}")?,
            None => f.write_str("<notset>")?,
        }
        f.write_str(", action=")?;
        match &self.action {
            Some(action) => write!(f, "{action})"),
            None => f.write_str("<notset>)"),
        }
    }
}
