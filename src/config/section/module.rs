//! `[module]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [module]
//! id = "virtual:ffmpeg-config"   # Import specifier intercepted by the plugin
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Virtual module settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Public id that application code imports.
    pub id: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            id: "virtual:ffmpeg-config".into(),
        }
    }
}

impl ModuleConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("module.id");
        if self.id.trim().is_empty() {
            diag.error(field, "virtual module id must not be empty");
        } else if self.id.contains('\0') {
            diag.error(field, "virtual module id must not contain NUL characters");
        }
    }
}
