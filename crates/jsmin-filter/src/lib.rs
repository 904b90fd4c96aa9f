//! Script filter: the layer between an HTTP response and the minifier.
//!
//! - `path`: which request paths are eligible
//! - `content`: which content types are minified, and how
//! - `html`: inline `<script>` splicing
//! - `filter`: orchestration with fall-back to the original payload

pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod html;
pub mod path;

pub use config::FilterConfig;
pub use content::ContentKind;
pub use error::{FilterError, Result};
pub use filter::{FallbackReason, FilterOutcome, FilterStatus, ScriptFilter};
pub use html::minify_html;
pub use path::{PathPolicy, PathSpec};
