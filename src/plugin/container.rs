//! Minimal host that drives plugins through the build lifecycle.
//!
//! Mirrors how a bundler calls plugin hooks: every plugin sees
//! `config_resolved`, the first plugin to answer wins `resolve_id` and
//! `load`, and `close_bundle` only fires for production builds.

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;

use super::{BuildPlugin, PluginError};
use crate::core::{BuildMode, ModeCell};
use crate::debug;

/// Ordered set of plugins sharing one build lifecycle.
#[derive(Default)]
pub struct PluginContainer {
    plugins: RwLock<Vec<Arc<dyn BuildPlugin>>>,
    mode: ModeCell,
}

impl PluginContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin; earlier plugins take precedence.
    pub fn register(&self, plugin: Arc<dyn BuildPlugin>) {
        debug!("plugin"; "registered {}", plugin.name());
        self.plugins.write().push(plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }

    pub fn mode(&self) -> Option<BuildMode> {
        self.mode.get()
    }

    /// Snapshot so hooks run without holding the lock.
    fn snapshot(&self) -> Vec<Arc<dyn BuildPlugin>> {
        self.plugins.read().clone()
    }

    /// Deliver the resolved mode to every plugin.
    pub fn config_resolved(&self, mode: BuildMode) -> Result<()> {
        self.mode.record(mode)?;
        for plugin in self.snapshot() {
            plugin
                .config_resolved(mode)
                .with_context(|| format!("[{}] config_resolved failed", plugin.name()))?;
        }
        Ok(())
    }

    /// First plugin that claims `id` wins.
    pub fn resolve_id(&self, id: &str) -> Option<String> {
        self.snapshot()
            .iter()
            .find_map(|plugin| plugin.resolve_id(id))
    }

    /// First plugin that supplies source for `id` wins.
    pub fn load(&self, id: &str) -> Result<Option<String>> {
        for plugin in self.snapshot() {
            let source = plugin
                .load(id)
                .with_context(|| format!("[{}] load failed", plugin.name()))?;
            if source.is_some() {
                return Ok(source);
            }
        }
        Ok(None)
    }

    /// Resolve then load, the way an `import` is processed.
    pub fn import(&self, specifier: &str) -> Result<Option<String>> {
        match self.resolve_id(specifier) {
            Some(id) => self.load(&id),
            None => Ok(None),
        }
    }

    /// Notify every plugin that the bundle is written. Production builds only.
    pub fn close_bundle(&self) -> Result<()> {
        match self.mode.get() {
            Some(BuildMode::Build) => {}
            Some(BuildMode::Serve) => return Ok(()),
            None => return Err(PluginError::ModeUnset.into()),
        }

        for plugin in self.snapshot() {
            plugin
                .close_bundle()
                .with_context(|| format!("[{}] close_bundle failed", plugin.name()))?;
        }
        Ok(())
    }
}
