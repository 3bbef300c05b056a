//! Resolution engine
//!
//! Walks a [`SpecNode`] tree and writes canonical entries into the
//! [`KeyTable`]. The context carries the key bound so far (if any), the
//! group and the accumulated level.
//!
//! Node forms:
//! - mapping: `group:`/`mods:` adjust the context, other keys are shortcuts
//! - sequence under a key: one level per character
//! - sequence without a key: one entry per ROWS row
//! - string under a key: a symbol, or a two-character case pair
//! - string without a key: 26 letters or 10 digits spread over those keys

use std::fmt;

use log::{debug, info, warn};

use crate::domain::entities::{KeyEntry, KeyIndex, KeyToken, RowLayout, SpecNode};
use crate::error::{XkbgenError, XkbgenResult};

use super::groups::GroupRegistry;
use super::modifiers::ModifierRegistry;
use super::table::KeyTable;

const GROUP_KEY: &str = "group";
const MODS_KEY: &str = "mods";

/// Separators allowed between the two halves of a three-character case pair.
const PAIR_SEPARATORS: &[char] = &[' ', '/', ':', ','];

const ALPHABET_ROW: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_ROW: &str = "0123456789";

/// Where in the keymap a node is being resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveContext {
    pub key: Option<KeyToken>,
    pub group: u32,
    pub level: u32,
}

impl ResolveContext {
    pub fn with_level_offset(&self, offset: u32) -> Self {
        Self {
            level: self.level + offset,
            ..self.clone()
        }
    }

    /// Bind the key; a node can't be bound to two keys.
    pub fn with_key(&self, key: KeyToken) -> XkbgenResult<Self> {
        if let Some(bound) = &self.key {
            return Err(XkbgenError::structural(format!(
                "can't assign key {key}: {self} is already bound to {bound}"
            )));
        }
        Ok(Self {
            key: Some(key),
            ..self.clone()
        })
    }
}

impl fmt::Display for ResolveContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{key}")?,
            None => f.write_str("<unknown>")?,
        }
        write!(f, "@group{}[{}]", self.group + 1, self.level + 1)
    }
}

pub struct Resolver<'a> {
    table: &'a mut KeyTable,
    modifiers: &'a ModifierRegistry,
    groups: &'a GroupRegistry,
    rows: Option<&'a RowLayout>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        table: &'a mut KeyTable,
        modifiers: &'a ModifierRegistry,
        groups: &'a GroupRegistry,
    ) -> Self {
        Self {
            table,
            modifiers,
            groups,
            rows: None,
        }
    }

    pub fn with_rows(mut self, rows: Option<&'a RowLayout>) -> Self {
        self.rows = rows;
        self
    }

    /// Resolve a top-level section from an empty context.
    pub fn resolve_section(&mut self, name: &str, node: &SpecNode) -> XkbgenResult<()> {
        info!("Processing [{name}]…");
        self.resolve(&ResolveContext::default(), node)
    }

    pub fn resolve(&mut self, ctx: &ResolveContext, node: &SpecNode) -> XkbgenResult<()> {
        match node {
            SpecNode::Mapping(entries) => self.resolve_mapping(ctx, entries),
            SpecNode::Sequence(items) if ctx.key.is_some() => self.resolve_level_list(ctx, items),
            SpecNode::Sequence(rows) => self.resolve_rows(ctx, rows),
            SpecNode::Scalar(text) if ctx.key.is_some() => self.define_symbol(ctx, text),
            SpecNode::Scalar(text) => self.resolve_row_string(ctx, text),
            SpecNode::Null => Err(XkbgenError::Type {
                context: format!("key {ctx}"),
                found: node.type_name().to_string(),
            }),
        }
    }

    fn resolve_mapping(
        &mut self,
        ctx: &ResolveContext,
        entries: &[(String, SpecNode)],
    ) -> XkbgenResult<()> {
        let mut ctx = ctx.clone();
        if let Some(node) = control_value(entries, GROUP_KEY) {
            ctx.group = self.groups.index_of(control_scalar(&ctx, GROUP_KEY, node)?)?;
        }
        if let Some(node) = control_value(entries, MODS_KEY) {
            let mods = control_scalar(&ctx, MODS_KEY, node)?;
            ctx.level += self.modifiers.level_only(mods)?;
        }

        for (shortcut, node) in entries {
            if shortcut == GROUP_KEY || shortcut == MODS_KEY {
                continue;
            }
            let (level, key) = self.modifiers.resolve(shortcut)?;
            let mut sub = ctx.with_level_offset(level);
            if let Some(key) = key {
                sub = sub.with_key(key)?;
            }
            self.resolve(&sub, node)?;
        }
        Ok(())
    }

    /// `[a, A, α]` under a bound key: one level per character.
    fn resolve_level_list(&mut self, ctx: &ResolveContext, items: &[SpecNode]) -> XkbgenResult<()> {
        if items.is_empty() {
            warn!("Ignoring empty list for {ctx}.");
            return Ok(());
        }
        let mut joined = String::new();
        for item in items {
            let text = item.as_scalar().ok_or_else(|| XkbgenError::Type {
                context: format!("a level list for {ctx}"),
                found: item.type_name().to_string(),
            })?;
            joined.push_str(text);
        }
        for (offset, ch) in joined.chars().enumerate() {
            self.define_symbol(&ctx.with_level_offset(offset as u32), &ch.to_string())?;
        }
        Ok(())
    }

    /// Row-by-row layout against the ROWS section.
    fn resolve_rows(&mut self, ctx: &ResolveContext, rows: &[SpecNode]) -> XkbgenResult<()> {
        let layout = self.rows.ok_or_else(|| {
            XkbgenError::structural(
                "can't specify a row-by-row layout when you didn't use a 'ROWS' section",
            )
        })?;
        if rows.len() > layout.len() {
            return Err(XkbgenError::structural(format!(
                "layout has {} rows but ROWS only specified {}",
                rows.len(),
                layout.len()
            )));
        }
        for (keys, row) in layout.rows().iter().zip(rows) {
            let symbols = row_symbols(ctx, row)?;
            if symbols.len() > keys.len() {
                return Err(XkbgenError::structural(format!(
                    "row has too many symbols {symbols:?} (row only specified {} key codes)",
                    keys.len()
                )));
            }
            for (key, symbol) in keys.iter().zip(&symbols) {
                self.define_symbol(&ctx.with_key(key.clone())?, symbol)?;
            }
        }
        Ok(())
    }

    /// A bare string of letters or digits laid over the a-z or 0-9 keys.
    fn resolve_row_string(&mut self, ctx: &ResolveContext, text: &str) -> XkbgenResult<()> {
        let row = match text.chars().count() {
            26 => ALPHABET_ROW,
            10 => DIGIT_ROW,
            n => {
                return Err(XkbgenError::structural(format!(
                    "only bare strings of length 26 (a-z) or 10 (0-9) are supported, got {n} characters in {text:?}"
                )))
            }
        };
        for (key, symbol) in row.chars().zip(text.chars()) {
            let bound = ctx.with_key(KeyToken::Symbolic(key.to_string()))?;
            self.define_symbol(&bound, &symbol.to_string())?;
        }
        Ok(())
    }

    fn define_symbol(&mut self, ctx: &ResolveContext, symbol: &str) -> XkbgenResult<()> {
        let Some(key) = &ctx.key else {
            return Err(XkbgenError::structural(format!(
                "attempting to assign a symbol to an unknown key {ctx}"
            )));
        };
        if symbol.is_empty() {
            debug!("Ignoring empty symbol for {ctx}.");
            return Ok(());
        }

        let key = match key {
            KeyToken::Physical(key) => key.clone(),
            KeyToken::Symbolic(name) => self
                .table
                .base_key_for(name)
                .map(str::to_string)
                .ok_or_else(|| XkbgenError::UnresolvedReference { key: name.clone() })?,
        };

        if let Some((first, second)) = case_pair(symbol) {
            let ctx = ResolveContext {
                key: Some(KeyToken::Physical(key)),
                ..ctx.clone()
            };
            self.define_symbol(&ctx, &first.to_string())?;
            return self.define_symbol(&ctx.with_level_offset(1), &second.to_string());
        }

        let entry = KeyEntry::new(KeyIndex::new(key, ctx.group, ctx.level))
            .with_symbol(interpret_symbol(symbol));
        let stored = self.table.canonicalize(entry);
        debug!("Symbol defined: {stored}");
        Ok(())
    }
}

fn control_value<'n>(entries: &'n [(String, SpecNode)], name: &str) -> Option<&'n SpecNode> {
    entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
}

fn control_scalar<'n>(
    ctx: &ResolveContext,
    name: &str,
    node: &'n SpecNode,
) -> XkbgenResult<&'n str> {
    node.as_scalar().ok_or_else(|| XkbgenError::Type {
        context: format!("'{name}' under {ctx}"),
        found: node.type_name().to_string(),
    })
}

/// Symbols of one row: each character of a string, or each list element
/// (null and empty elements leave their key alone).
fn row_symbols(ctx: &ResolveContext, row: &SpecNode) -> XkbgenResult<Vec<String>> {
    match row {
        SpecNode::Scalar(text) => Ok(text.chars().map(String::from).collect()),
        SpecNode::Sequence(items) => items
            .iter()
            .map(|item| match item {
                SpecNode::Scalar(text) => Ok(text.clone()),
                SpecNode::Null => Ok(String::new()),
                other => Err(XkbgenError::Type {
                    context: format!("a row element under {ctx}"),
                    found: other.type_name().to_string(),
                }),
            })
            .collect(),
        other => Err(XkbgenError::Type {
            context: format!("a row under {ctx}"),
            found: other.type_name().to_string(),
        }),
    }
}

/// `aA`, `a A`, `a/A`, `a:A` and `a,A` assign a level and the one above it.
pub(crate) fn case_pair(symbol: &str) -> Option<(char, char)> {
    let chars: Vec<char> = symbol.chars().collect();
    match chars.as_slice() {
        [first, second] => Some((*first, *second)),
        [first, sep, second] if PAIR_SEPARATORS.contains(sep) => Some((*first, *second)),
        _ => None,
    }
}

/// A single character stands for itself. Longer text is tried as a Unicode
/// character name (`greek small letter alpha`) and otherwise kept as an XKB
/// keysym name (`dead_acute`).
pub(crate) fn interpret_symbol(symbol: &str) -> String {
    let mut chars = symbol.chars();
    if let (Some(_), None) = (chars.next(), chars.next()) {
        return symbol.to_string();
    }
    match unicode_names2::character(&symbol.to_uppercase()) {
        Some(ch) => ch.to_string(),
        None => symbol.to_string(),
    }
}
