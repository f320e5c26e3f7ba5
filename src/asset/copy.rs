//! Emission of fingerprinted assets into the build output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::FingerprintMap;
use crate::log;

/// Fatal asset errors.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot create output directory `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single file that could not be copied.
#[derive(Debug)]
pub struct CopyFailure {
    /// Logical (source) name.
    pub name: String,
    /// Fingerprinted output name.
    pub output: String,
    pub error: io::Error,
}

/// Outcome of one [`finalize_copy`] run.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// `(logical name, output path)` of every copied file.
    pub copied: Vec<(String, PathBuf)>,
    pub failed: Vec<CopyFailure>,
}

impl CopyReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of attempted copies.
    pub fn attempted(&self) -> usize {
        self.copied.len() + self.failed.len()
    }
}

/// Copy every fingerprinted asset from `source_root` to `dest_root`.
///
/// The destination is created (recursively) first; failing to do so is
/// the only fatal error. Each file is then copied independently: a failure
/// is logged and recorded in the report, and the remaining files are still
/// attempted. An empty map performs no filesystem work at all.
pub fn finalize_copy(
    map: &FingerprintMap,
    source_root: &Path,
    dest_root: &Path,
) -> Result<CopyReport, AssetError> {
    let mut report = CopyReport::default();
    if map.is_empty() {
        return Ok(report);
    }

    fs::create_dir_all(dest_root).map_err(|source| AssetError::CreateDir {
        path: dest_root.to_path_buf(),
        source,
    })?;

    for (name, output) in map {
        let source = source_root.join(name);
        let target = dest_root.join(output);

        match fs::copy(&source, &target) {
            Ok(_) => {
                log!("assets"; "✓ copied {} → {}", name, output);
                report.copied.push((name.clone(), target));
            }
            Err(error) => {
                log!("error"; "failed to copy {} → {}: {}", name, output, error);
                report.failed.push(CopyFailure {
                    name: name.clone(),
                    output: output.clone(),
                    error,
                });
            }
        }
    }

    if !report.is_complete() {
        log!(
            "error";
            "{} of {} runtime assets were not copied",
            report.failed.len(),
            report.attempted()
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn map(entries: &[(&str, &str)]) -> FingerprintMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_copy_all() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(src.path().join("core.js"), "loader").unwrap();
        fs::write(src.path().join("core.wasm"), b"\0asm").unwrap();

        let out = dest.path().join("dist/static");
        let report = finalize_copy(
            &map(&[("core.js", "core.11111111.js"), ("core.wasm", "core.22222222.wasm")]),
            src.path(),
            &out,
        )
        .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.copied.len(), 2);
        assert_eq!(fs::read(out.join("core.11111111.js")).unwrap(), b"loader");
        assert_eq!(fs::read(out.join("core.22222222.wasm")).unwrap(), b"\0asm");
        assert_eq!(fs::read_dir(&out).unwrap().count(), 2);

        // Sources are left untouched
        assert!(src.path().join("core.js").exists());
    }

    #[test]
    fn test_copy_into_existing_dir() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(src.path().join("core.js"), "loader").unwrap();

        let report = finalize_copy(
            &map(&[("core.js", "core.11111111.js")]),
            src.path(),
            dest.path(),
        )
        .unwrap();
        assert_eq!(report.copied.len(), 1);
    }

    #[test]
    fn test_copy_continues_after_failure() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        // `a.js` vanished between hashing and copying; `b.wasm` is fine
        fs::write(src.path().join("b.wasm"), b"\0asm").unwrap();

        let report = finalize_copy(
            &map(&[("a.js", "a.11111111.js"), ("b.wasm", "b.22222222.wasm")]),
            src.path(),
            dest.path(),
        )
        .unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.attempted(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "a.js");
        assert_eq!(report.failed[0].output, "a.11111111.js");
        assert_eq!(report.failed[0].error.kind(), io::ErrorKind::NotFound);
        assert!(dest.path().join("b.22222222.wasm").exists());
    }

    #[test]
    fn test_copy_empty_map_is_noop() {
        let dest = TempDir::new().unwrap();
        let out = dest.path().join("never-created");

        let report = finalize_copy(&FingerprintMap::new(), Path::new("/nonexistent"), &out).unwrap();

        assert_eq!(report.attempted(), 0);
        assert!(!out.exists());
    }

    #[test]
    fn test_create_dir_failure_is_fatal() {
        let dest = TempDir::new().unwrap();
        // A regular file where a directory is expected
        let blocker = dest.path().join("dist");
        fs::write(&blocker, "not a dir").unwrap();

        let err = finalize_copy(
            &map(&[("core.js", "core.11111111.js")]),
            dest.path(),
            &blocker.join("static"),
        )
        .unwrap_err();

        let AssetError::CreateDir { path, .. } = err;
        assert_eq!(path, blocker.join("static"));
    }
}
