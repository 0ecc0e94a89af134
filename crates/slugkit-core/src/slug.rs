//! Slug generation and normalization.
//!
//! Two operations with deliberately different strictness:
//!
//! - [`generate_slug`] builds a fresh slug from free text (an entry title).
//!   Only letters and digits survive; everything else is a word break.
//! - [`normalize_slug`] cleans up a slug a user already typed. It keeps `.`,
//!   `_` and `-` inside words, so `abc...dfg` stays intact.
//!
//! Both strip HTML tags and inner-word punctuation, honour the case policy in
//! [`SlugConfig`], collapse runs of separators and trim them from the edges.
//! Both are idempotent for any separator accepted by [`SlugConfig::validate`].
use std::sync::LazyLock;

use regex::Regex;

use crate::config::SlugConfig;
use crate::transliterate::to_ascii;

/// Reserved slug for a site's homepage. [`normalize_slug`] leaves it alone.
pub const HOMEPAGE_SLUG: &str = "__home__";

/// Punctuation removed outright (not turned into a word break), so that
/// `(2006-2010)` contributes `2006-2010` and `don't` stays one word.
pub(crate) const INNER_WORD_PUNCTUATION: &[char] = &[
    '\'', '"', '‘', '’', '“', '”', '[', ']', '(', ')', '{', '}', ':',
];

/// Matches an HTML/XML tag.
static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").unwrap_or_else(|_| {
        // Never reached: the pattern above is always valid.
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
});

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generates a slug from free text.
///
/// `ascii` forces (or suppresses) transliteration to ASCII; `None` defers to
/// [`SlugConfig::limit_auto_slugs_to_ascii`]. `language` selects a
/// language-specific transliteration table and is ignored when not
/// transliterating.
///
/// ```
/// use slugkit_core::{SlugConfig, generate_slug};
///
/// let cfg = SlugConfig::new("-", true);
/// assert_eq!(
///     generate_slug("Audi S8 4E (2006-2010)", None, None, &cfg),
///     "Audi-S8-4E-2006-2010"
/// );
/// ```
pub fn generate_slug(
    raw: &str,
    ascii: Option<bool>,
    language: Option<&str>,
    config: &SlugConfig,
) -> String {
    let mut text = strip_inner_punctuation(&strip_html(raw));

    if ascii.unwrap_or(config.limit_auto_slugs_to_ascii) {
        text = to_ascii(&text, language);
    }
    let text = apply_case(text, config);

    join_words(text.split(|c: char| !c.is_alphanumeric()), &config.separator)
}

/// Normalizes an existing slug.
///
/// Letters, digits, `.`, `_` and `-` are kept inside words unless they occur
/// in the configured separator. Every character of the separator breaks
/// words apart, as does every other character.
///
/// ```
/// use slugkit_core::{SlugConfig, normalize_slug};
///
/// let cfg = SlugConfig::default();
/// assert_eq!(normalize_slug("abc...(dfg)", &cfg), "abc...dfg");
/// assert_eq!(normalize_slug("word WORD", &cfg), "word-word");
/// ```
pub fn normalize_slug(raw: &str, config: &SlugConfig) -> String {
    if raw == HOMEPAGE_SLUG {
        return raw.to_owned();
    }

    let text = apply_case(strip_inner_punctuation(&strip_html(raw)), config);
    let sep = config.separator.as_str();

    let words = text.split(|c: char| !is_lenient_word_char(c) || sep.contains(c));
    join_words(words, sep)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn strip_html(text: &str) -> String {
    HTML_TAG_RE.replace_all(text, "").into_owned()
}

fn strip_inner_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !INNER_WORD_PUNCTUATION.contains(c))
        .collect()
}

fn apply_case(text: String, config: &SlugConfig) -> String {
    if config.allow_uppercase {
        text
    } else {
        text.to_lowercase()
    }
}

fn is_lenient_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Joins the non-empty words with `sep`.
fn join_words<'a>(words: impl Iterator<Item = &'a str>, sep: &str) -> String {
    let mut out = String::new();
    for word in words.filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push_str(sep);
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(sep: &str) -> SlugConfig {
        SlugConfig::new(sep, true)
    }

    // ── generate_slug ────────────────────────────────────────────────────────

    #[test]
    fn generate_keeps_single_words() {
        let cfg = upper("-");
        assert_eq!(generate_slug("wordWord", None, None, &cfg), "wordWord");
        assert_eq!(generate_slug("word", None, None, &cfg), "word");
        assert_eq!(generate_slug("123456789", None, None, &cfg), "123456789");
    }

    #[test]
    fn generate_joins_words_with_separator() {
        let cfg = upper("-");
        assert_eq!(generate_slug("word word", None, None, &cfg), "word-word");
        assert_eq!(generate_slug("foo 0", None, None, &cfg), "foo-0");
    }

    #[test]
    fn generate_drops_ellipsis_and_parentheses() {
        let cfg = upper("-");
        assert_eq!(generate_slug("abc...dfg", None, None, &cfg), "abc-dfg");
        assert_eq!(generate_slug("abc...(dfg)", None, None, &cfg), "abc-dfg");
    }

    #[test]
    fn generate_splits_on_existing_punctuation() {
        let cfg = upper("-");
        assert_eq!(generate_slug("A-B-C", None, None, &cfg), "A-B-C");
        assert_eq!(generate_slug("test_slug", None, None, &cfg), "test-slug");
    }

    #[test]
    fn generate_title_with_year_range() {
        let cfg = upper("-");
        assert_eq!(
            generate_slug("Audi S8 4E (2006-2010)", None, None, &cfg),
            "Audi-S8-4E-2006-2010"
        );
    }

    #[test]
    fn generate_custom_separator() {
        let cfg = upper("_");
        assert_eq!(
            generate_slug("Audi S8 4E (2006-2010)", None, None, &cfg),
            "Audi_S8_4E_2006_2010"
        );
    }

    #[test]
    fn generate_non_ascii_kept_without_ascii_flag() {
        let cfg = upper("-");
        assert_eq!(generate_slug("こんにちは", Some(false), None, &cfg), "こんにちは");
        assert_eq!(
            generate_slug("Сертификация", Some(false), None, &cfg),
            "Сертификация"
        );
    }

    #[test]
    fn generate_ascii_flag_transliterates() {
        let cfg = SlugConfig::default();
        assert_eq!(
            generate_slug("Crème Brûlée", Some(true), None, &cfg),
            "creme-brulee"
        );
        assert_eq!(
            generate_slug("Über Straße", Some(true), Some("de"), &cfg),
            "ueber-strasse"
        );
    }

    #[test]
    fn generate_ascii_defaults_to_config() {
        let cfg = SlugConfig {
            limit_auto_slugs_to_ascii: true,
            ..SlugConfig::default()
        };
        assert_eq!(generate_slug("Café", None, None, &cfg), "cafe");
        assert_eq!(generate_slug("Café", Some(false), None, &cfg), "café");
    }

    #[test]
    fn generate_strips_html() {
        let cfg = SlugConfig::default();
        assert_eq!(
            generate_slug("<b>Bold</b> <i>move</i>", None, None, &cfg),
            "bold-move"
        );
    }

    #[test]
    fn generate_lowercases_when_uppercase_forbidden() {
        let cfg = SlugConfig::default();
        assert_eq!(generate_slug("Hello World", None, None, &cfg), "hello-world");
    }

    #[test]
    fn generate_empty_and_punctuation_only() {
        let cfg = SlugConfig::default();
        assert_eq!(generate_slug("", None, None, &cfg), "");
        assert_eq!(generate_slug("!!! ... ???", None, None, &cfg), "");
    }

    // ── normalize_slug ───────────────────────────────────────────────────────

    #[test]
    fn normalize_basic_words() {
        let cfg = upper("-");
        assert_eq!(normalize_slug("wordWord", &cfg), "wordWord");
        assert_eq!(normalize_slug("word word", &cfg), "word-word");
        assert_eq!(normalize_slug("foo 0", &cfg), "foo-0");
        assert_eq!(normalize_slug("123456789", &cfg), "123456789");
    }

    #[test]
    fn normalize_keeps_dots_underscores_hyphens() {
        let cfg = upper("-");
        assert_eq!(normalize_slug("abc...dfg", &cfg), "abc...dfg");
        assert_eq!(normalize_slug("abc...(dfg)", &cfg), "abc...dfg");
        assert_eq!(normalize_slug("A-B-C", &cfg), "A-B-C");
        assert_eq!(normalize_slug("test_slug", &cfg), "test_slug");
    }

    #[test]
    fn normalize_title_with_year_range() {
        let cfg = upper("-");
        assert_eq!(
            normalize_slug("Audi S8 4E (2006-2010)", &cfg),
            "Audi-S8-4E-2006-2010"
        );
        let cfg = upper("_");
        assert_eq!(
            normalize_slug("Audi S8 4E (2006-2010)", &cfg),
            "Audi_S8_4E_2006-2010"
        );
    }

    #[test]
    fn normalize_homepage_is_reserved() {
        assert_eq!(normalize_slug("__home__", &upper("_")), "__home__");
        assert_eq!(normalize_slug("__home__", &upper("-")), "__home__");
    }

    #[test]
    fn normalize_non_ascii_untouched() {
        let cfg = upper("-");
        assert_eq!(normalize_slug("こんにちは", &cfg), "こんにちは");
        assert_eq!(normalize_slug("Сертификация", &cfg), "Сертификация");
    }

    #[test]
    fn normalize_lowercases_when_uppercase_forbidden() {
        let cfg = SlugConfig::default();
        assert_eq!(normalize_slug("word WORD", &cfg), "word-word");
    }

    #[test]
    fn normalize_collapses_and_trims_separators() {
        let cfg = SlugConfig::default();
        assert_eq!(normalize_slug("--a---b--", &cfg), "a-b");
        assert_eq!(normalize_slug("  a \t b  ", &cfg), "a-b");
    }

    #[test]
    fn normalize_multi_char_separator() {
        let cfg = SlugConfig::new("--", false);
        assert_eq!(normalize_slug("one two", &cfg), "one--two");
        assert_eq!(normalize_slug("one--two", &cfg), "one--two");
    }

    #[test]
    fn normalize_multi_char_separator_collapses_runs() {
        let cfg = SlugConfig::new("--", false);
        assert_eq!(normalize_slug("a --- b", &cfg), "a--b");
        assert_eq!(normalize_slug("a---", &cfg), "a");
        assert_eq!(normalize_slug("---a-b", &cfg), "a--b");

        let cfg = SlugConfig::new("-_", false);
        assert_eq!(normalize_slug("x_-_y", &cfg), "x-_y");
        assert_eq!(normalize_slug("x.y", &cfg), "x.y");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        let cfg = SlugConfig::default();
        for s in ["Hello World", "a..b", "(x)", "tes.!@#$%^&*()_t", "ÄÖÜ x"] {
            let once = normalize_slug(s, &cfg);
            assert_eq!(normalize_slug(&once, &cfg), once, "input: {s:?}");
        }
    }
}
