//! URI format templates with a `{slug}` placeholder.
use std::sync::LazyLock;

use regex::Regex;

/// The placeholder substituted by [`expand`].
pub const SLUG_TAG: &str = "{slug}";

/// Matches two or more consecutive slashes.
static REPEATED_SLASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/{2,}").unwrap_or_else(|_| {
        // Never reached: the pattern above is always valid.
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
});

/// Returns `true` if `uri_format` contains the exact `{slug}` token.
///
/// Matching is case-sensitive and token-exact: `{SLUG}`, `{slugified}` and
/// `{notASlug}` are not slug tags.
pub fn does_uri_format_have_slug_tag(uri_format: &str) -> bool {
    uri_format.contains(SLUG_TAG)
}

/// Substitutes every `{slug}` in `uri_format` with `slug`.
///
/// A format without the token is returned unchanged.
pub fn expand(uri_format: &str, slug: &str) -> String {
    uri_format.replace(SLUG_TAG, slug)
}

/// Expands the format and tidies the result into a relative URI.
///
/// Runs of `/` collapse into one and leading/trailing slashes are trimmed, so
/// `test/{slug}` with an empty slug renders as `test` rather than `test/`.
pub fn render_uri(uri_format: &str, slug: &str) -> String {
    let expanded = expand(uri_format, slug);
    let collapsed = REPEATED_SLASH_RE.replace_all(&expanded, "/");
    collapsed.trim_matches('/').to_owned()
}
