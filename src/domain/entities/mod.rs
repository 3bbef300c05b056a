//! Domain Entities

mod key_entry;
mod row_layout;
mod spec_node;

pub use key_entry::{Action, KeyEntry, KeyIndex, KeyToken};
pub use row_layout::RowLayout;
pub use spec_node::SpecNode;
pub(crate) use spec_node::{scalar_text, yaml_type_name};
