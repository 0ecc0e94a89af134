//! ASCII transliteration with optional language-specific tables.
//!
//! [`to_ascii`] first consults a small per-language table (so that German
//! `ü` becomes `ue` rather than the generic `u`), then falls back to the
//! generic table shipped by the `deunicode` crate. Characters that neither
//! table knows are dropped; the function never fails.
use log::trace;

/// A language-specific substitution table: `(character, replacement)` pairs.
type Table = &'static [(char, &'static str)];

const GERMAN: Table = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
    ('ẞ', "SS"),
];

const DANISH_NORWEGIAN: Table = &[
    ('æ', "ae"),
    ('ø', "oe"),
    ('å', "aa"),
    ('Æ', "Ae"),
    ('Ø', "Oe"),
    ('Å', "Aa"),
];

const SWEDISH: Table = &[
    ('ä', "a"),
    ('ö', "o"),
    ('å', "a"),
    ('Ä', "A"),
    ('Ö', "O"),
    ('Å', "A"),
];

const BULGARIAN: Table = &[
    ('Щ', "Sht"),
    ('щ', "sht"),
    ('Ъ', "A"),
    ('ъ', "a"),
    ('Ь', "Y"),
    ('ь', "y"),
    ('Ю', "Yu"),
    ('ю', "yu"),
    ('Я', "Ya"),
    ('я', "ya"),
    ('Ж', "Zh"),
    ('ж', "zh"),
    ('Х', "H"),
    ('х', "h"),
];

const UKRAINIAN: Table = &[
    ('Г', "H"),
    ('г', "h"),
    ('Ґ', "G"),
    ('ґ', "g"),
    ('И', "Y"),
    ('и', "y"),
    ('І', "I"),
    ('і', "i"),
    ('Ї', "Yi"),
    ('ї', "yi"),
    ('Є', "Ye"),
    ('є', "ye"),
    ('Щ', "Shch"),
    ('щ', "shch"),
];

/// Returns the table for `language`, matched on its primary subtag.
///
/// `"de"`, `"de-CH"` and `"de_AT"` all select the German table. Unknown
/// languages return `None`.
fn table_for(language: &str) -> Option<Table> {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match primary.as_str() {
        "de" => Some(GERMAN),
        "da" | "nb" | "nn" | "no" => Some(DANISH_NORWEGIAN),
        "sv" => Some(SWEDISH),
        "bg" => Some(BULGARIAN),
        "uk" => Some(UKRAINIAN),
        _ => None,
    }
}

fn lookup(table: Table, ch: char) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(from, to)| (from == ch).then_some(to))
}

/// Converts `text` to ASCII.
///
/// When `language` is given its table takes precedence over the generic
/// transliteration. Characters with no mapping are removed.
pub fn to_ascii(text: &str, language: Option<&str>) -> String {
    let table = language.and_then(table_for);
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        if let Some(rep) = table.and_then(|t| lookup(t, ch)) {
            out.push_str(rep);
            continue;
        }
        match deunicode::deunicode_char(ch) {
            Some(rep) => out.push_str(rep),
            None => trace!("dropping untransliterable character {ch:?}"),
        }
    }

    out
}

/// Returns `true` if a dedicated table exists for `language`.
pub fn has_language_table(language: &str) -> bool {
    table_for(language).is_some()
}
