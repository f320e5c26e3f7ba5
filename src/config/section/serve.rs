//! `[serve]` section configuration.
//!
//! In serve mode nothing is copied; the generated module points straight at
//! the files the dev server already exposes.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! base_url = "/node_modules/@ffmpeg/core/dist/esm"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// URL under which the dev server exposes the unbuilt runtime files.
    pub base_url: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            base_url: "/node_modules/@ffmpeg/core/dist/esm".into(),
        }
    }
}

impl ServeConfig {
    /// URL of `name` under the development base.
    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.base_url.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("serve.base_url"),
                "must not be empty",
                "use `/` to serve the runtime files from the site root",
            );
        }
    }
}
