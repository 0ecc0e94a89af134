//! Layered settings: built-in defaults, then `--config`, then flags.
use std::path::Path;

use slugkit_core::Settings;

use crate::PathOrStdin;
use crate::cli::Cli;
use crate::error::CliError;
use crate::io::read_json;

/// Flag values that override the settings file when present.
#[derive(Debug, Default)]
pub struct Overrides {
    /// `--separator`.
    pub separator: Option<String>,
    /// `--allow-uppercase`; only ever switches the policy on.
    pub allow_uppercase: bool,
    /// `--ascii-only`; only ever switches the policy on.
    pub ascii_only: bool,
    /// `--max-increment`.
    pub max_increment: Option<u32>,
    /// `--max-length`.
    pub max_length: Option<usize>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            separator: cli.separator.clone(),
            allow_uppercase: cli.allow_uppercase,
            ascii_only: cli.ascii_only,
            max_increment: cli.max_increment,
            max_length: cli.max_length,
        }
    }
}

impl Overrides {
    /// Applies the flags that were given on top of `settings`.
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(separator) = self.separator {
            settings.slug.separator = separator;
        }
        if self.allow_uppercase {
            settings.slug.allow_uppercase = true;
        }
        if self.ascii_only {
            settings.slug.limit_auto_slugs_to_ascii = true;
        }
        if let Some(n) = self.max_increment {
            settings.budget.max_increment = n;
        }
        if let Some(n) = self.max_length {
            settings.budget.max_length = n;
        }
        settings
    }
}

/// Builds the effective settings for this invocation and validates them.
///
/// # Errors
///
/// - Any read or parse error for the `--config` file (exit code 2).
/// - [`CliError::InvalidConfig`] when the merged settings are unusable.
pub fn load(config: Option<&Path>, overrides: Overrides, max_file_size: u64) -> Result<Settings, CliError> {
    let base = match config {
        Some(path) => read_json(&PathOrStdin::Path(path.to_path_buf()), max_file_size)?,
        None => Settings::default(),
    };
    let settings = overrides.apply(base);
    settings.validate()?;
    log::debug!(
        "settings: separator {:?}, allow_uppercase {}, ascii {}, max_increment {}, max_length {}",
        settings.slug.separator,
        settings.slug.allow_uppercase,
        settings.slug.limit_auto_slugs_to_ascii,
        settings.budget.max_increment,
        settings.budget.max_length
    );
    Ok(settings)
}
