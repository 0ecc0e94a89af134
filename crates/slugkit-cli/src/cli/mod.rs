//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints bare values and aligned lines; `Json` prints one JSON
/// document per invocation.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `slugkit` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a slug from free text such as a title.
    Generate {
        /// The text to turn into a slug.
        #[arg(value_name = "TEXT")]
        text: String,
        /// Transliterate to ASCII, regardless of `--ascii-only`.
        #[arg(long)]
        ascii: bool,
        /// Language whose transliteration table is tried first (e.g. de, da, bg).
        #[arg(long, value_name = "LANG")]
        language: Option<String>,
    },

    /// Clean up a user-entered slug.
    Normalize {
        /// The slug to normalize.
        #[arg(value_name = "SLUG")]
        slug: String,
    },

    /// Report whether a URI format contains the `{slug}` tag.
    #[command(name = "check-format")]
    CheckFormat {
        /// The URI format, e.g. `blog/{slug}`.
        #[arg(value_name = "FORMAT")]
        uri_format: String,
    },

    /// Resolve unique URIs for a JSON array of records.
    Resolve {
        /// Path to a JSON file of records, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// JSON array of URIs that are already taken.
        #[arg(long, value_name = "FILE")]
        existing: Option<PathBuf>,
    },
}

/// Root CLI struct for the `slugkit` binary.
///
/// Slug and budget flags override the values loaded from `--config`, which in
/// turn override the built-in defaults.
#[derive(Parser)]
#[command(
    name = "slugkit",
    version,
    about = "Slug generation and unique URI resolution",
    long_about = "Generates and normalizes URL slugs, expands URI formats, and\n\
                  resolves collision-free URIs for batches of records."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Word separator placed between slug words (default: `-`).
    #[arg(long, global = true, env = "SLUGKIT_SEPARATOR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Keep uppercase letters instead of lowercasing slugs.
    #[arg(long, global = true)]
    pub allow_uppercase: bool,

    /// Transliterate generated slugs to ASCII.
    #[arg(long, global = true)]
    pub ascii_only: bool,

    /// Highest numeric suffix tried before giving up (default: 100).
    #[arg(long, global = true, env = "SLUGKIT_MAX_INCREMENT")]
    pub max_increment: Option<u32>,

    /// Maximum URI length in characters (default: 255).
    #[arg(long, global = true, env = "SLUGKIT_MAX_LENGTH")]
    pub max_length: Option<usize>,

    /// JSON settings file with optional `slug` and `budget` sections.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every URI candidate tried (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `SLUGKIT_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MB).
    #[arg(
        long,
        global = true,
        env = "SLUGKIT_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,
}

#[cfg(test)]
mod tests;
