//! Virtual module ids.

use std::fmt;

/// Prefix that marks an id as virtual.
///
/// NUL is not legal in file paths, so the host never tries to read the
/// marked id from disk and other plugins leave it alone.
pub const VIRTUAL_PREFIX: char = '\0';

/// Internal id returned from `resolve_id` for the virtual module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InternalId(String);

impl InternalId {
    /// Build the internal marker for a public id.
    pub fn for_public(public_id: &str) -> Self {
        Self(format!("{VIRTUAL_PREFIX}{public_id}"))
    }

    /// Resolve `requested` against `public_id`.
    ///
    /// Returns the marker on an exact match, otherwise `None` so that normal
    /// resolution applies.
    pub fn resolve(requested: &str, public_id: &str) -> Option<Self> {
        (requested == public_id).then(|| Self::for_public(public_id))
    }

    /// Whether `id` is this marker.
    #[inline]
    pub fn matches(&self, id: &str) -> bool {
        self.0 == id
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NUL is invisible in terminals
        write!(f, "\\0{}", &self.0[VIRTUAL_PREFIX.len_utf8()..])
    }
}

impl AsRef<str> for InternalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
