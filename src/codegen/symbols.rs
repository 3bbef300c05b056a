//! Rendering of single symbols and actions.

use log::warn;

use crate::domain::entities::Action;

/// A list element plus an optional trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub text: String,
    pub comment: Option<String>,
}

impl RenderedItem {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            comment: None,
        }
    }
}

/// `NoSymbol`, `U%04X // NAME` for one character, the keysym name otherwise.
pub fn render_symbol(symbol: Option<&str>) -> RenderedItem {
    let Some(symbol) = symbol.filter(|s| !s.is_empty()) else {
        return RenderedItem::plain("NoSymbol");
    };
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            let name = match unicode_names2::name(ch) {
                Some(name) => name.to_string(),
                None => {
                    warn!(
                        "failed to look up Unicode name: {} (U{:04x})",
                        ch.escape_debug(),
                        ch as u32
                    );
                    "?".to_string()
                }
            };
            RenderedItem {
                text: format!("U{:04X}", ch as u32),
                comment: Some(name),
            }
        }
        _ => RenderedItem::plain(symbol),
    }
}

pub fn render_action(action: Option<&Action>) -> RenderedItem {
    match action {
        Some(action) => RenderedItem::plain(action.to_string()),
        None => RenderedItem::plain("NoAction()"),
    }
}
