//! Implementation of `slugkit generate <text>`.
//!
//! Strips markup and punctuation from free text and joins the remaining words
//! with the configured separator. `--ascii` forces transliteration for this
//! call; otherwise `--ascii-only` (or the settings file) decides.
//!
//! Exit codes: 0 = success, 2 = invalid settings.
use slugkit_core::{SlugConfig, generate_slug, has_language_table};

use crate::OutputFormat;
use crate::error::{CliError, stdout_error};

/// Runs the `generate` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    text: &str,
    ascii: bool,
    language: Option<&str>,
    config: &SlugConfig,
    format: OutputFormat,
) -> Result<(), CliError> {
    if let Some(lang) = language.filter(|l| !has_language_table(l)) {
        log::warn!("no transliteration table for {lang:?}, using generic rules");
    }
    let slug = slug_for(text, ascii, language, config);
    if slug.is_empty() {
        log::warn!("{text:?} contains no slug words");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    super::print_slug(&mut out, text, &slug, format).map_err(|e| stdout_error(&e))
}

fn slug_for(text: &str, ascii: bool, language: Option<&str>, config: &SlugConfig) -> String {
    generate_slug(text, ascii.then_some(true), language, config)
}
