//! Runtime assets - fingerprint WASM runtime files and inject a mode-aware
//! config module into a build pipeline.
//!
//! In serve mode the virtual module points at the unbuilt runtime files the
//! dev server already exposes. In build mode the loader and binary are
//! content-hashed, the module points at `/<assets_dir>/<name>.<hash>.<ext>`,
//! and the files are copied there once the bundle is closed.
//!
//! # Example
//!
//! ```no_run
//! use runtime_assets::{BuildMode, BuildPlugin, RuntimeAssetsConfig, RuntimeAssetsPlugin};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RuntimeAssetsConfig::default().with_root("/path/to/project");
//! let plugin = RuntimeAssetsPlugin::new(config)?;
//!
//! plugin.config_resolved(BuildMode::Build)?;
//! if let Some(id) = plugin.resolve_id("virtual:ffmpeg-config") {
//!     let source = plugin.load(&id)?;
//!     println!("{}", source.unwrap_or_default());
//! }
//! plugin.close_bundle()?;
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod config;
pub mod core;
pub mod logger;
pub mod module;
pub mod plugin;
pub mod utils;

pub use asset::{CopyReport, FingerprintMap, TrackedAsset};
pub use config::{ConfigError, RuntimeAssetsConfig};
pub use crate::core::BuildMode;
pub use module::InternalId;
pub use plugin::{BuildPlugin, PluginContainer, PluginError, RuntimeAssetsPlugin};
