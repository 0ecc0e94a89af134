//! Implementation of `slugkit normalize <slug>`.
//!
//! Cleans up a slug typed by a user. Unlike `generate`, dots, underscores and
//! hyphens inside words survive, and nothing is transliterated. The reserved
//! homepage slug `__home__` is printed unchanged.
//!
//! Exit codes: 0 = success, 2 = invalid settings.
use slugkit_core::{SlugConfig, normalize_slug};

use crate::OutputFormat;
use crate::error::{CliError, stdout_error};

/// Runs the `normalize` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(slug: &str, config: &SlugConfig, format: OutputFormat) -> Result<(), CliError> {
    let normalized = normalize_slug(slug, config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    super::print_slug(&mut out, slug, &normalized, format).map_err(|e| stdout_error(&e))
}
