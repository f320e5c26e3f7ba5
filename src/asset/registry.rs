//! Build-scoped fingerprint registry.
//!
//! The binary asset can be tens of megabytes, so fingerprints are computed
//! once per build and shared by every later `load` and by `close_bundle`.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{FingerprintMap, TrackedAsset, compute_fingerprints};
use crate::debug;

/// Memoized logical name → fingerprinted name mapping for one build.
///
/// Concurrent callers of [`get_or_compute`](Self::get_or_compute) block
/// until the single computation finishes, so nobody observes a partial map.
#[derive(Debug)]
pub struct HashRegistry {
    map: OnceLock<FingerprintMap>,
    hash_length: usize,
    /// Number of times the fingerprint pass actually ran.
    computations: AtomicUsize,
}

impl HashRegistry {
    pub fn new(hash_length: usize) -> Self {
        Self {
            map: OnceLock::new(),
            hash_length,
            computations: AtomicUsize::new(0),
        }
    }

    /// Return the fingerprint map, computing it on first use.
    pub fn get_or_compute(&self, assets: &[TrackedAsset]) -> &FingerprintMap {
        self.map.get_or_init(|| {
            self.computations.fetch_add(1, Ordering::SeqCst);
            let map = compute_fingerprints(assets, self.hash_length);
            debug!("hash"; "fingerprinted {} of {} assets", map.len(), assets.len());
            map
        })
    }

    /// The map if it was already computed.
    #[inline]
    pub fn get(&self) -> Option<&FingerprintMap> {
        self.map.get()
    }

    /// Output name for `name`, if it was fingerprinted.
    pub fn output_name(&self, name: &str) -> Option<&str> {
        self.get()?.get(name).map(String::as_str)
    }

    /// How many times the fingerprint map was computed (0 or 1).
    pub fn digest_count(&self) -> usize {
        self.computations.load(Ordering::SeqCst)
    }
}
