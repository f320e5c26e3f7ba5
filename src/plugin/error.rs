//! Plugin lifecycle errors.

use thiserror::Error;

use crate::core::BuildMode;

/// Host ordering errors surfaced by the plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("build mode is not known yet (config_resolved was not called)")]
    ModeUnset,

    #[error("build mode already recorded as `{recorded}`, refusing to switch to `{requested}`")]
    ModeConflict {
        recorded: BuildMode,
        requested: BuildMode,
    },
}
