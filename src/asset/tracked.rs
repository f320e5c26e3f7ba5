//! Tracked runtime assets.

use std::fmt;
use std::path::{Path, PathBuf};

/// What a tracked asset is used for at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    /// JS glue that instantiates the binary module.
    Loader,
    /// The WASM binary itself.
    Binary,
}

impl AssetRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Loader => "loader",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime file handled by the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedAsset {
    pub role: AssetRole,
    /// Logical file name, also the fallback output name.
    pub name: String,
    /// Absolute path of the source file.
    pub source: PathBuf,
}

impl TrackedAsset {
    /// Create an asset named `name` inside `source_dir`.
    pub fn new(role: AssetRole, name: impl Into<String>, source_dir: &Path) -> Self {
        let name = name.into();
        let source = source_dir.join(&name);
        Self { role, name, source }
    }
}
