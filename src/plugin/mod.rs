//! Build pipeline plugin.
//!
//! This module provides:
//! - `hooks`: the `BuildPlugin` lifecycle trait a host calls into
//! - `runtime`: `RuntimeAssetsPlugin`, the fingerprinting/injection plugin
//! - `container`: a minimal host that dispatches hooks to plugins

mod container;
mod error;
mod hooks;
mod runtime;


pub use container::PluginContainer;
pub use error::PluginError;
pub use hooks::BuildPlugin;
pub use runtime::{PLUGIN_NAME, RuntimeAssetsPlugin};
