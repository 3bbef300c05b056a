//! XKB code generation
//!
//! Renders assembled key blocks into an `xkb_keymap` document for
//! `xkbcomp`.

mod keymap;
mod symbols;

pub use keymap::{render_key_block, render_keymap, Literals};
pub use symbols::{render_action, render_symbol, RenderedItem};
