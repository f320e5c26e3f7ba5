//! Content hashing utilities using blake3.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let hex = hash::digest_hex(b"some content", 12); // -> 12 hex chars
//! let fp = hash::fingerprint(b"some content");     // -> 8 hex chars
//! ```

use crate::config::DEFAULT_HASH_LENGTH;

/// Compute the full blake3 digest of byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> [u8; 32] {
    *blake3::hash(data.as_ref()).as_bytes()
}

/// Compute the digest and keep the first `len` hex characters.
///
/// `len` is clamped to the full digest width (64).
pub fn digest_hex<T: AsRef<[u8]> + ?Sized>(data: &T, len: usize) -> String {
    let mut hex = hex::encode(compute(data));
    hex.truncate(len);
    hex
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Useful for cache-busting filenames (e.g. `ffmpeg-core.a1b2c3d4.wasm`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    digest_hex(value, DEFAULT_HASH_LENGTH)
}
