//! Source text of the virtual configuration module.
//!
//! Generation is pure: the same mode, fingerprint map and config always
//! give the same text, and nothing here touches the filesystem.

use super::{Template, TemplateVars};
use crate::asset::FingerprintMap;
use crate::config::RuntimeAssetsConfig;
use crate::core::BuildMode;

/// Module template exporting `{ coreURL, wasmURL }`.
const RUNTIME_CONFIG_JS: Template<RuntimeUrls> = Template::new(include_str!("runtime-config.js"));

/// The two URLs exported by the virtual module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeUrls {
    /// URL of the runtime loader script (`coreURL`).
    pub core_url: String,
    /// URL of the runtime binary module (`wasmURL`).
    pub wasm_url: String,
}

impl TemplateVars for RuntimeUrls {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__CORE_URL__", &js_string(&self.core_url))
            .replace("__WASM_URL__", &js_string(&self.wasm_url))
    }
}

/// Quote a value as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".into())
}

/// Compute the exported URLs for `mode`.
///
/// - Serve: files under the development base URL, never hashed.
/// - Build: `/<assets_dir>/<name>`, using the fingerprinted name when the
///   map has one and the logical name otherwise.
pub fn runtime_urls(
    mode: BuildMode,
    map: &FingerprintMap,
    config: &RuntimeAssetsConfig,
) -> RuntimeUrls {
    let url = |name: &str| match mode {
        BuildMode::Serve => config.dev_url(name),
        BuildMode::Build => {
            let output = map.get(name).map(String::as_str).unwrap_or(name);
            config.asset_url(output)
        }
    };

    RuntimeUrls {
        core_url: url(&config.source.loader),
        wasm_url: url(&config.source.binary),
    }
}

/// Render the module source for `mode`.
pub fn render_source(
    mode: BuildMode,
    map: &FingerprintMap,
    config: &RuntimeAssetsConfig,
) -> String {
    RUNTIME_CONFIG_JS.render(&runtime_urls(mode, map, config))
}
