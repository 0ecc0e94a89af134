#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod record;
pub mod resolver;
pub mod siblings;
pub mod slug;
pub mod template;
pub mod transliterate;

pub use config::{ConfigError, RetryBudget, Settings, SlugConfig};
pub use record::{Record, RecordLike};
pub use resolver::{BatchError, ResolveError, UriExistence, UriIndex, resolve, resolve_all};
pub use siblings::{NavigationLink, Siblings, link, link_ids};
pub use slug::{HOMEPAGE_SLUG, generate_slug, normalize_slug};
pub use template::{does_uri_format_have_slug_tag, expand, render_uri};
pub use transliterate::{has_language_table, to_ascii};

/// Returns the current version of the slugkit-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
