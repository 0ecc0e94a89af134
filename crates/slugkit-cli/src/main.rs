mod cli;
mod cmd;
mod error;
mod io;
mod settings;

pub use cli::{OutputFormat, PathOrStdin};

use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::settings::Overrides;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Installs `env_logger` on stderr. `RUST_LOG` decides the level unless
/// `--verbose` or `--quiet` is given.
fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if cli.quiet {
        builder.filter_level(LevelFilter::Error);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = settings::load(cli.config.as_deref(), Overrides::from(cli), cli.max_file_size)?;

    match &cli.command {
        Command::Generate {
            text,
            ascii,
            language,
        } => cmd::generate::run(text, *ascii, language.as_deref(), &settings.slug, cli.format),
        Command::Normalize { slug } => cmd::normalize::run(slug, &settings.slug, cli.format),
        Command::CheckFormat { uri_format } => cmd::check_format::run(uri_format, cli.format),
        Command::Resolve { file, existing } => cmd::resolve::run(
            file,
            existing.as_deref(),
            &settings,
            cli.max_file_size,
            cli.format,
        ),
    }
}
