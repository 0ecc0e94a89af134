//! Implementation of `slugkit check-format <format>`.
//!
//! Prints `true` when the URI format contains the exact, case-sensitive
//! `{slug}` tag and `false` otherwise. A format without the tag is fixed: the
//! resolver renders it as is and never checks it for collisions.
//!
//! Exit codes: 0 = success.
use std::io::Write;

use serde::Serialize;
use slugkit_core::does_uri_format_have_slug_tag;

use crate::OutputFormat;
use crate::error::{CliError, stdout_error};

#[derive(Serialize)]
struct FormatCheck<'a> {
    uri_format: &'a str,
    has_slug_tag: bool,
}

/// Runs the `check-format` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(uri_format: &str, format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print(&mut out, uri_format, format).map_err(|e| stdout_error(&e))
}

fn print<W: Write>(w: &mut W, uri_format: &str, format: OutputFormat) -> std::io::Result<()> {
    let has_slug_tag = does_uri_format_have_slug_tag(uri_format);
    match format {
        OutputFormat::Human => writeln!(w, "{has_slug_tag}"),
        OutputFormat::Json => super::write_json(
            w,
            &FormatCheck {
                uri_format,
                has_slug_tag,
            },
        ),
    }
}
