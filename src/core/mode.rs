//! Build mode of the host pipeline and the write-once cell holding it.

use std::fmt;
use std::sync::OnceLock;

use crate::plugin::PluginError;

/// Which pipeline execution context is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Unbundled development server.
    Serve,
    /// Production bundle.
    Build,
}

impl BuildMode {
    /// Mode value as string (matches the host's command names).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Serve => "serve",
            Self::Build => "build",
        }
    }

    #[inline]
    pub const fn is_build(&self) -> bool {
        matches!(self, Self::Build)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write-once holder for the mode of one pipeline invocation.
///
/// Owned by a plugin instance, so concurrent builds never share it.
#[derive(Debug, Default)]
pub struct ModeCell(OnceLock<BuildMode>);

impl ModeCell {
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Record the mode delivered by the host.
    ///
    /// Recording the same mode twice is accepted; a different mode is a
    /// host ordering bug and is rejected.
    pub fn record(&self, mode: BuildMode) -> Result<(), PluginError> {
        let recorded = *self.0.get_or_init(|| mode);
        if recorded == mode {
            Ok(())
        } else {
            Err(PluginError::ModeConflict {
                recorded,
                requested: mode,
            })
        }
    }

    /// The recorded mode, if any.
    #[inline]
    pub fn get(&self) -> Option<BuildMode> {
        self.0.get().copied()
    }

    /// The recorded mode, or `ModeUnset` if the host skipped `config_resolved`.
    pub fn require(&self) -> Result<BuildMode, PluginError> {
        self.get().ok_or(PluginError::ModeUnset)
    }
}
