//! Core types shared across the plugin facets.

mod mode;

pub use mode::{BuildMode, ModeCell};
