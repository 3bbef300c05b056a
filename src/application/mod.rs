//! Application Layer
//!
//! Drives the domain passes over a loaded layout document and renders the
//! result. See [`KeymapPipeline`].

pub mod pipeline;

pub use pipeline::{Compilation, KeymapPipeline};
