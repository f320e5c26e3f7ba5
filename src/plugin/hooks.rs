//! Lifecycle hooks exposed to the host pipeline.

use anyhow::Result;

use crate::core::BuildMode;

/// A plugin driven by the host's build lifecycle.
///
/// The host calls, in order:
/// 1. `config_resolved` once, before any module work
/// 2. `resolve_id` / `load` any number of times, possibly concurrently
/// 3. `close_bundle` once after all other output was written (builds only)
///
/// Every hook has a no-op default so plugins only override what they use.
pub trait BuildPlugin: Send + Sync {
    /// Plugin name (for logs).
    fn name(&self) -> &str;

    fn config_resolved(&self, _mode: BuildMode) -> Result<()> {
        Ok(())
    }

    /// Claim a module id. `None` lets the host resolve it normally.
    fn resolve_id(&self, _id: &str) -> Option<String> {
        None
    }

    /// Supply source text for a claimed id. `Ok(None)` means "not mine".
    fn load(&self, _id: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn close_bundle(&self) -> Result<()> {
        Ok(())
    }
}
