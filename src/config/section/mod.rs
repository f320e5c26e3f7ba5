//! Configuration section definitions.

mod module;
mod output;
mod serve;
mod source;

pub use module::ModuleConfig;
pub use output::{DEFAULT_HASH_LENGTH, OutputConfig};
pub use serve::ServeConfig;
pub use source::SourceConfig;

/// Check that `name` is a bare file name (no directory components).
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}
