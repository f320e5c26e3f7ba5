//! `[source]` section configuration.
//!
//! Locates the two runtime files that get fingerprinted.
//!
//! # Example
//!
//! ```toml
//! [source]
//! dir = "node_modules/@ffmpeg/core/dist/esm"   # Relative to project root
//! loader = "ffmpeg-core.js"                    # Runtime loader script
//! binary = "ffmpeg-core.wasm"                  # Runtime binary module
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::is_plain_file_name;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Runtime asset source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory holding the runtime files (relative to project root).
    pub dir: PathBuf,

    /// File name of the runtime loader script.
    pub loader: String,

    /// File name of the runtime binary module.
    pub binary: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: "node_modules/@ffmpeg/core/dist/esm".into(),
            loader: "ffmpeg-core.js".into(),
            binary: "ffmpeg-core.wasm".into(),
        }
    }
}

impl SourceConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.is_absolute() {
            diag.error_with_hint(
                FieldPath::new("source.dir"),
                format!("must be relative, got '{}'", self.dir.display()),
                "paths are resolved against the project root",
            );
        }

        let loader_ok = Self::validate_name(&self.loader, FieldPath::new("source.loader"), diag);
        let binary_ok = Self::validate_name(&self.binary, FieldPath::new("source.binary"), diag);

        if loader_ok && binary_ok && self.loader == self.binary {
            diag.error(
                FieldPath::new("source.binary"),
                format!("loader and binary both point at '{}'", self.binary),
            );
        }
    }

    fn validate_name(name: &str, field: FieldPath, diag: &mut ConfigDiagnostics) -> bool {
        if is_plain_file_name(name) {
            return true;
        }
        diag.error_with_hint(
            field,
            format!("'{name}' is not a plain file name"),
            "use `source.dir` for the directory part",
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_source_config() {
        let config = test_parse_config(
            "[source]\ndir = \"vendor/core\"\nloader = \"core.js\"\nbinary = \"core.wasm\"",
        );
        assert_eq!(config.source.dir, PathBuf::from("vendor/core"));
        assert_eq!(config.source.loader, "core.js");
        assert_eq!(config.source.binary, "core.wasm");
    }

    #[test]
    fn test_source_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(
            config.source.dir,
            PathBuf::from("node_modules/@ffmpeg/core/dist/esm")
        );
        assert_eq!(config.source.loader, "ffmpeg-core.js");
        assert_eq!(config.source.binary, "ffmpeg-core.wasm");
    }

    #[test]
    fn test_source_config_rejects_nested_names() {
        let config = test_parse_config("[source]\nloader = \"esm/core.js\"\nbinary = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.source.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_source_config_rejects_same_file() {
        let config = test_parse_config("[source]\nloader = \"core\"\nbinary = \"core\"");
        let mut diag = ConfigDiagnostics::new();
        config.source.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "source.binary");
    }
}
