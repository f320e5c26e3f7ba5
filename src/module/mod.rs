//! Virtual configuration module.
//!
//! # Module Structure
//!
//! - `id` - Public id and internal marker handling
//! - `template` - Template types for typed variable injection
//! - `source` - Mode-dependent source generation
//!
//! Application code imports the module by its public id:
//!
//! ```js
//! import config from 'virtual:ffmpeg-config'
//! await ffmpeg.load(config)
//! ```

mod id;
mod source;
mod template;

pub use id::{InternalId, VIRTUAL_PREFIX};
pub use source::{RuntimeUrls, render_source, runtime_urls};
pub use template::{Template, TemplateVars};
