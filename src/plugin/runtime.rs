//! Runtime asset plugin: mode-aware config module plus fingerprinted copies.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};

use super::{BuildPlugin, PluginError};
use crate::asset::{CopyReport, FingerprintMap, HashRegistry, TrackedAsset, finalize_copy};
use crate::config::{ConfigError, RuntimeAssetsConfig};
use crate::core::{BuildMode, ModeCell};
use crate::module::{InternalId, render_source};
use crate::{debug, log};

/// Plugin name reported to the host.
pub const PLUGIN_NAME: &str = "runtime-assets";

/// Build-lifetime state for one pipeline invocation.
///
/// Construct one instance per build; the mode and the fingerprint map are
/// fields, never process-wide statics.
#[derive(Debug)]
pub struct RuntimeAssetsPlugin {
    config: RuntimeAssetsConfig,
    assets: [TrackedAsset; 2],
    internal_id: InternalId,
    mode: ModeCell,
    registry: HashRegistry,
    copied: AtomicBool,
}

impl RuntimeAssetsPlugin {
    /// Create a plugin for one build. Rejects configs that fail validation.
    pub fn new(config: RuntimeAssetsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            assets: config.tracked_assets(),
            internal_id: InternalId::for_public(&config.module.id),
            registry: HashRegistry::new(config.output.hash_length),
            mode: ModeCell::new(),
            copied: AtomicBool::new(false),
            config,
        })
    }

    pub fn config(&self) -> &RuntimeAssetsConfig {
        &self.config
    }

    pub fn registry(&self) -> &HashRegistry {
        &self.registry
    }

    // ========================================================================
    // Mode
    // ========================================================================

    /// Record the mode resolved by the host. Call once before loading.
    pub fn record_resolved_mode(&self, mode: BuildMode) -> Result<(), PluginError> {
        self.mode.record(mode)?;
        debug!("mode"; "{}", mode);
        Ok(())
    }

    pub fn current_mode(&self) -> Option<BuildMode> {
        self.mode.get()
    }

    // ========================================================================
    // Virtual module
    // ========================================================================

    /// Claim the public virtual module id.
    pub fn resolve(&self, requested: &str) -> Option<InternalId> {
        InternalId::resolve(requested, &self.config.module.id)
    }

    /// Generate the virtual module source for the internal marker id.
    ///
    /// In build mode the first call fingerprints the tracked assets; later
    /// calls reuse the memoized map and return identical text.
    pub fn load_virtual(&self, id: &str) -> Result<Option<String>, PluginError> {
        if !self.internal_id.matches(id) {
            return Ok(None);
        }

        let mode = self.mode.require()?;
        let empty = FingerprintMap::new();
        let map = match mode {
            BuildMode::Serve => &empty,
            BuildMode::Build => self.fingerprints(),
        };

        Ok(Some(render_source(mode, map, &self.config)))
    }

    /// Memoized fingerprints of the tracked assets.
    pub fn fingerprints(&self) -> &FingerprintMap {
        self.registry.get_or_compute(&self.assets)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Copy fingerprinted assets into the output directory.
    ///
    /// No-op in serve mode and on every call after the first. If the virtual
    /// module was never loaded the map is empty and nothing is copied.
    pub fn finalize_copy(&self) -> Result<CopyReport> {
        if !self.mode.require()?.is_build() {
            return Ok(CopyReport::default());
        }

        if self.copied.swap(true, Ordering::SeqCst) {
            debug!("assets"; "runtime assets already copied for this build");
            return Ok(CopyReport::default());
        }

        let empty = FingerprintMap::new();
        let map = self.registry.get().unwrap_or(&empty);
        if map.is_empty() {
            debug!("assets"; "no fingerprinted runtime assets to copy");
        }

        let report = finalize_copy(map, &self.config.source_dir(), &self.config.output_dir())?;
        if !report.copied.is_empty() {
            log!(
                "assets";
                "copied {} runtime assets to {}",
                report.copied.len(),
                self.config.output_dir().display()
            );
        }
        Ok(report)
    }
}

impl BuildPlugin for RuntimeAssetsPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn config_resolved(&self, mode: BuildMode) -> Result<()> {
        self.record_resolved_mode(mode)?;
        Ok(())
    }

    fn resolve_id(&self, id: &str) -> Option<String> {
        self.resolve(id).map(InternalId::into_string)
    }

    fn load(&self, id: &str) -> Result<Option<String>> {
        let source = self
            .load_virtual(id)
            .with_context(|| format!("failed to load `{}`", self.internal_id))?;
        Ok(source)
    }

    fn close_bundle(&self) -> Result<()> {
        self.finalize_copy()
            .context("failed to emit runtime assets")?;
        Ok(())
    }
}
