//! Command modules for the `slugkit` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the parsed arguments and the effective settings, writes its
//! result to stdout, and returns a [`crate::error::CliError`] on failure.
use std::io::Write;

use serde::Serialize;

pub mod check_format;
pub mod generate;
pub mod normalize;
pub mod resolve;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(
    w: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

/// JSON shape shared by `generate` and `normalize`.
#[derive(Serialize)]
struct SlugOutput<'a> {
    input: &'a str,
    slug: &'a str,
}

/// Writes a slug: bare in human mode, `{input, slug}` in JSON mode.
pub(crate) fn print_slug<W: Write>(
    w: &mut W,
    input: &str,
    slug: &str,
    format: crate::OutputFormat,
) -> std::io::Result<()> {
    match format {
        crate::OutputFormat::Human => writeln!(w, "{slug}"),
        crate::OutputFormat::Json => write_json(w, &SlugOutput { input, slug }),
    }
}
