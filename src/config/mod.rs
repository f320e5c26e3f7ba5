//! Plugin configuration, usually read from `runtime-assets.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── module     # [module]
//! │   ├── source     # [source]
//! │   ├── output     # [output]
//! │   └── serve      # [serve]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # RuntimeAssetsConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                             |
//! |------------|-----------------------------------------------------|
//! | `[module]` | Virtual module id imported by application code      |
//! | `[source]` | Where the runtime loader and binary live            |
//! | `[output]` | Build output directory, asset URL segment, digest   |
//! | `[serve]`  | Development URL of the unbuilt runtime files        |
//!
//! Every section is optional; defaults target `@ffmpeg/core`.

pub mod section;
pub mod types;

pub use section::{DEFAULT_HASH_LENGTH, ModuleConfig, OutputConfig, ServeConfig, SourceConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::asset::{AssetRole, TrackedAsset};
use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "runtime-assets.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `runtime-assets.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeAssetsConfig {
    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Virtual module settings
    #[serde(default)]
    pub module: ModuleConfig,

    /// Runtime asset sources
    #[serde(default)]
    pub source: SourceConfig,

    /// Production output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl RuntimeAssetsConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load and validate configuration from a file.
    ///
    /// The project root becomes the file's parent directory.
    /// Unknown keys are reported as warnings, not errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.set_root(&root);
        config.validate()?;
        Ok(config)
    }

    /// Set the project root and return self (builder style).
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.set_root(root.as_ref());
        self
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.module.validate(&mut diag);
        self.source.validate(&mut diag);
        self.output.validate(&mut diag);
        self.serve.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // paths
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute directory holding the runtime source files.
    pub fn source_dir(&self) -> PathBuf {
        self.root_join(&self.source.dir)
    }

    /// Directory that receives fingerprinted assets:
    /// `<root>/<output.dir>/<output.assets_dir>`.
    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.output.dir)
            .join(self.output.assets_segment())
    }

    /// Production URL of an emitted asset: `/<assets_dir>/<name>`.
    pub fn asset_url(&self, name: &str) -> String {
        format!("/{}/{}", self.output.assets_segment(), name)
    }

    /// Development URL of an unbuilt asset.
    pub fn dev_url(&self, name: &str) -> String {
        self.serve.url_for(name)
    }

    /// The fixed pair of tracked runtime assets.
    pub fn tracked_assets(&self) -> [TrackedAsset; 2] {
        let dir = self.source_dir();
        [
            TrackedAsset::new(AssetRole::Loader, &self.source.loader, &dir),
            TrackedAsset::new(AssetRole::Binary, &self.source.binary, &dir),
        ]
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RuntimeAssetsConfig {
    let (parsed, ignored) = RuntimeAssetsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = RuntimeAssetsConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_collects_unknown_fields() {
        let (_, ignored) =
            RuntimeAssetsConfig::parse_with_ignored("[output]\nhashlen = 4\n[extra]\nx = 1")
                .unwrap();
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|f| f == "output.hashlen"));
    }

    #[test]
    fn test_paths_and_urls() {
        let config = test_parse_config("[output]\ndir = \"build\"\nassets_dir = \"wasm\"")
            .with_root("/site");

        assert_eq!(
            config.source_dir(),
            PathBuf::from("/site/node_modules/@ffmpeg/core/dist/esm")
        );
        assert_eq!(config.output_dir(), PathBuf::from("/site/build/wasm"));
        assert_eq!(config.asset_url("core.1234abcd.js"), "/wasm/core.1234abcd.js");
        assert_eq!(
            config.dev_url("ffmpeg-core.wasm"),
            "/node_modules/@ffmpeg/core/dist/esm/ffmpeg-core.wasm"
        );
    }

    #[test]
    fn test_tracked_assets() {
        let config = RuntimeAssetsConfig::default().with_root("/site");
        let [loader, binary] = config.tracked_assets();

        assert_eq!(loader.role, AssetRole::Loader);
        assert_eq!(loader.name, "ffmpeg-core.js");
        assert_eq!(
            loader.source,
            PathBuf::from("/site/node_modules/@ffmpeg/core/dist/esm/ffmpeg-core.js")
        );
        assert_eq!(binary.role, AssetRole::Binary);
        assert_eq!(binary.name, "ffmpeg-core.wasm");
    }

    #[test]
    fn test_load_sets_root() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[source]\ndir = \"vendor\"").unwrap();

        let config = RuntimeAssetsConfig::load(&path).unwrap();
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.source_dir(), dir.path().join("vendor"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = RuntimeAssetsConfig::load(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_load_reports_all_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[module]\nid = \"\"\n[output]\nhash_length = 2\n[source]\nloader = \"a/b.js\"",
        )
        .unwrap();

        match RuntimeAssetsConfig::load(&path).unwrap_err() {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.len(), 3),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = RuntimeAssetsConfig::from_str("[output\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
