//! Domain Value Objects

mod conflict_warning;
mod level_class;
mod modifier_kind;

pub use conflict_warning::{ConflictField, ConflictWarning};
pub use level_class::LevelClass;
pub use modifier_kind::ModifierKind;
