//! Runtime asset fingerprinting and emission.
//!
//! - `tracked`: the fixed loader/binary pair
//! - `fingerprint`: digest → output name (pure)
//! - `registry`: build-scoped memoized fingerprint map
//! - `copy`: best-effort copy into the output directory (side effects)

mod copy;
mod fingerprint;
mod registry;
mod tracked;

// Types
pub use tracked::{AssetRole, TrackedAsset};

// Fingerprinting (pure functions)
pub use fingerprint::{FingerprintMap, compute_fingerprints, fingerprint_asset, fingerprinted_name};

// Registry (build-scoped state)
pub use registry::HashRegistry;

// Copying (side effects)
pub use copy::{AssetError, CopyFailure, CopyReport, finalize_copy};
