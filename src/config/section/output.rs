//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "dist"          # Build output root (relative to project root)
//! assets_dir = "static" # Sub-directory (and URL segment) for copied assets
//! hash_length = 8       # Hex characters of the content digest kept in names
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Digest length used in fingerprinted names unless configured otherwise.
pub const DEFAULT_HASH_LENGTH: usize = 8;

/// blake3 produces 32 bytes, i.e. 64 hex characters.
const MAX_HASH_LENGTH: usize = 64;

/// Production output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Build output root.
    pub dir: PathBuf,

    /// Directory under `dir` that receives fingerprinted assets.
    /// Also used as the URL segment: `/{assets_dir}/{name}`.
    pub assets_dir: String,

    /// Number of hex digest characters kept in fingerprinted names.
    pub hash_length: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "dist".into(),
            assets_dir: "static".into(),
            hash_length: DEFAULT_HASH_LENGTH,
        }
    }
}

impl OutputConfig {
    /// `assets_dir` without surrounding slashes.
    pub fn assets_segment(&self) -> &str {
        self.assets_dir.trim_matches('/')
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.is_absolute() {
            diag.error_with_hint(
                FieldPath::new("output.dir"),
                format!("must be relative, got '{}'", self.dir.display()),
                "paths are resolved against the project root",
            );
        }

        let segment = self.assets_segment();
        if segment.is_empty() {
            diag.error(FieldPath::new("output.assets_dir"), "must not be empty");
        } else if segment.split('/').any(|part| part.is_empty() || part == "..") {
            diag.error(
                FieldPath::new("output.assets_dir"),
                format!("'{}' is not a valid directory path", self.assets_dir),
            );
        }

        if !(DEFAULT_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&self.hash_length) {
            diag.error_with_hint(
                FieldPath::new("output.hash_length"),
                format!("{} is out of range", self.hash_length),
                format!("use a value between {DEFAULT_HASH_LENGTH} and {MAX_HASH_LENGTH}"),
            );
        }
    }
}
