//! Content fingerprints and fingerprinted file names.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use super::TrackedAsset;
use crate::utils::hash;
use crate::{debug, log};

/// Logical asset name → fingerprinted output name.
///
/// Ordered so that generated output and logs are stable across runs.
pub type FingerprintMap = BTreeMap<String, String>;

/// Insert `.<digest>` between the file stem and its extension.
///
/// - `ffmpeg-core.wasm` → `ffmpeg-core.<digest>.wasm`
/// - `core.min.js` → `core.min.<digest>.js`
/// - `LICENSE` → `LICENSE.<digest>`
pub fn fingerprinted_name(name: &str, digest: &str) -> String {
    let path = Path::new(name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}.{digest}.{ext}"),
        None => format!("{stem}.{digest}"),
    }
}

/// Read one asset and derive its fingerprinted name.
///
/// Returns `None` when the source is missing or unreadable; the caller
/// then falls back to the logical name.
pub fn fingerprint_asset(asset: &TrackedAsset, hash_length: usize) -> Option<String> {
    let content = match fs::read(&asset.source) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("hash"; "{} not found, keeping original name", asset.source.display());
            return None;
        }
        Err(e) => {
            log!("warning"; "cannot read {} ({}), keeping original name", asset.source.display(), e);
            return None;
        }
    };

    let digest = hash::digest_hex(&content, hash_length);
    Some(fingerprinted_name(&asset.name, &digest))
}

/// Fingerprint every readable asset on the calling thread.
///
/// Missing or unreadable assets produce no entry.
pub fn compute_fingerprints(assets: &[TrackedAsset], hash_length: usize) -> FingerprintMap {
    assets
        .iter()
        .filter_map(|asset| {
            fingerprint_asset(asset, hash_length).map(|output| (asset.name.clone(), output))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRole;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn is_hex_name(name: &str, stem: &str, ext: &str, len: usize) -> bool {
        name.strip_prefix(stem)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|rest| rest.strip_suffix(ext))
            .is_some_and(|digest| {
                digest.len() == len && digest.chars().all(|c| c.is_ascii_hexdigit())
            })
    }

    #[test]
    fn test_fingerprinted_name() {
        assert_eq!(
            fingerprinted_name("ffmpeg-core.wasm", "0123abcd"),
            "ffmpeg-core.0123abcd.wasm"
        );
        assert_eq!(
            fingerprinted_name("core.min.js", "0123abcd"),
            "core.min.0123abcd.js"
        );
        assert_eq!(fingerprinted_name("LICENSE", "0123abcd"), "LICENSE.0123abcd");
        assert_eq!(fingerprinted_name(".env", "0123abcd"), ".env.0123abcd");
    }

    #[test]
    fn test_fingerprint_asset() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("core.wasm"), b"\0asm\x01\0\0\0").unwrap();
        let asset = TrackedAsset::new(AssetRole::Binary, "core.wasm", dir.path());

        let name = fingerprint_asset(&asset, 8).unwrap();
        assert!(is_hex_name(&name, "core", ".wasm", 8), "{name}");
        assert_eq!(
            name,
            format!("core.{}.wasm", hash::fingerprint(b"\0asm\x01\0\0\0"))
        );

        // Same content → same name
        assert_eq!(fingerprint_asset(&asset, 8).unwrap(), name);

        let longer = fingerprint_asset(&asset, 16).unwrap();
        assert!(is_hex_name(&longer, "core", ".wasm", 16), "{longer}");
    }

    #[test]
    fn test_fingerprint_asset_missing() {
        let asset = TrackedAsset {
            role: AssetRole::Loader,
            name: "core.js".into(),
            source: PathBuf::from("/nonexistent/core.js"),
        };
        assert_eq!(fingerprint_asset(&asset, 8), None);
    }

    #[test]
    fn test_fingerprint_asset_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("core.wasm")).unwrap();
        let asset = TrackedAsset::new(AssetRole::Binary, "core.wasm", dir.path());

        assert!(asset.source.exists());
        assert_eq!(fingerprint_asset(&asset, 8), None);
    }

    #[test]
    fn test_compute_fingerprints_skips_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("core.js"), "export default 1").unwrap();

        let assets = [
            TrackedAsset::new(AssetRole::Loader, "core.js", dir.path()),
            TrackedAsset::new(AssetRole::Binary, "core.wasm", dir.path()),
        ];
        let map = compute_fingerprints(&assets, 8);

        assert_eq!(map.len(), 1);
        assert!(is_hex_name(&map["core.js"], "core", ".js", 8));
        assert!(!map.contains_key("core.wasm"));
    }

    #[test]
    fn test_identical_content_distinct_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "same").unwrap();
        fs::write(dir.path().join("a.wasm"), "same").unwrap();

        let assets = [
            TrackedAsset::new(AssetRole::Loader, "a.js", dir.path()),
            TrackedAsset::new(AssetRole::Binary, "a.wasm", dir.path()),
        ];
        let map = compute_fingerprints(&assets, 8);

        // Same digest, but the extension keeps output names apart
        assert_eq!(map.len(), 2);
        assert_ne!(map["a.js"], map["a.wasm"]);
    }
}
