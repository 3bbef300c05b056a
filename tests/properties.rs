//! Property tests for xkbgen.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics" and "last write wins".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/key_table.rs"]
mod key_table;

#[path = "properties/level_class.rs"]
mod level_class;

#[path = "properties/shortcut.rs"]
mod shortcut;

#[path = "properties/pipeline.rs"]
mod pipeline;
