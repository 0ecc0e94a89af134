//! Implementation of `slugkit resolve <file> [--existing <file>]`.
//!
//! Reads a JSON array of records and resolves a unique URI for each one, in
//! order, against a single in-memory index. The index starts with the URIs
//! from `--existing` (a JSON array of strings) and grows as records are
//! accepted, so two records with the same label in one batch get distinct
//! URIs. Each record is then printed with the ids of its neighbours in the
//! batch.
//!
//! Exit codes: 0 = success, 1 = retry budget exhausted, 2 = unreadable input
//! or invalid settings.
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;
use slugkit_core::{NavigationLink, Record, Settings, UriIndex, link_ids, resolve_all};

use crate::error::{CliError, stdout_error};
use crate::io::read_json;
use crate::{OutputFormat, PathOrStdin};

/// One resolved record with its neighbours' ids.
#[derive(Debug, Serialize)]
pub struct ResolvedEntry<'a> {
    /// The record after resolution.
    #[serde(flatten)]
    pub record: &'a Record,
    /// Id of the previous record in the batch.
    pub prev: Option<&'a str>,
    /// Id of the next record in the batch.
    pub next: Option<&'a str>,
}

/// Runs the `resolve` command.
///
/// # Errors
///
/// - Read or parse failures for either input file (exit code 2).
/// - [`CliError::ResolveFailed`] when a record exhausts the retry budget
///   (exit code 1). Nothing is printed in that case.
pub fn run(
    file: &PathOrStdin,
    existing: Option<&Path>,
    settings: &Settings,
    max_file_size: u64,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut records: Vec<Record> = read_json(file, max_file_size)?;
    let mut index: UriIndex = match existing {
        Some(path) => {
            let taken: Vec<String> =
                read_json(&PathOrStdin::Path(path.to_path_buf()), max_file_size)?;
            taken.into_iter().collect()
        }
        None => UriIndex::new(),
    };

    info!(
        "resolving {} record(s) against {} taken URI(s)",
        records.len(),
        index.len()
    );
    resolve_all(&mut records, &settings.slug, &settings.budget, &mut index)?;

    let links = link_ids(&records);
    let entries = entries(&records, &links);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &entries),
        OutputFormat::Json => super::write_json(&mut out, &entries),
    }
    .map_err(|e| stdout_error(&e))
}

/// Pairs every record with its navigation link.
pub fn entries<'a>(records: &'a [Record], links: &'a [NavigationLink<String>]) -> Vec<ResolvedEntry<'a>> {
    records
        .iter()
        .zip(links)
        .map(|(record, link)| ResolvedEntry {
            record,
            prev: link.prev.as_deref(),
            next: link.next.as_deref(),
        })
        .collect()
}

/// Writes one tab-separated line per record: name, URI, slug, prev, next.
///
/// Records without an id are named by their position (`#0`, `#1`, ...), and
/// missing values print as `-`.
fn print_human<W: Write>(w: &mut W, entries: &[ResolvedEntry<'_>]) -> std::io::Result<()> {
    for (position, entry) in entries.iter().enumerate() {
        let name = entry
            .record
            .id
            .clone()
            .unwrap_or_else(|| format!("#{position}"));
        writeln!(
            w,
            "{name}\t{}\tslug={}\tprev={}\tnext={}",
            entry.record.uri.as_deref().unwrap_or("-"),
            entry.record.slug.as_deref().unwrap_or("-"),
            entry.prev.unwrap_or("-"),
            entry.next.unwrap_or("-"),
        )?;
    }
    Ok(())
}
