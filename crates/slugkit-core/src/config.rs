//! Explicit configuration values for slug normalization and URI resolution.
//!
//! Nothing in `slugkit-core` reads process-global settings. Every operation
//! receives a [`SlugConfig`] (and the resolver a [`RetryBudget`]) from the
//! caller, which is free to load them from flags, environment or a file.
use serde::{Deserialize, Serialize};

use crate::slug::INNER_WORD_PUNCTUATION;

/// Default word separator placed between slug words.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Default upper bound on numeric-suffix attempts.
pub const DEFAULT_MAX_INCREMENT: u32 = 100;

/// Default upper bound on the length of a resolved URI, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when a configuration value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The word separator is the empty string.
    #[error("slug word separator must not be empty")]
    EmptySeparator,

    /// The word separator contains a character that can never appear between
    /// words (whitespace).
    #[error("slug word separator {0:?} must not contain whitespace")]
    WhitespaceSeparator(String),

    /// The word separator contains a letter, a digit, an HTML angle bracket
    /// or punctuation that the normalizers delete. Slugs built with it would
    /// change on a second pass.
    #[error("slug word separator {separator:?} must not contain {found:?}")]
    UnstableSeparator {
        /// The rejected separator.
        separator: String,
        /// The first offending character.
        found: char,
    },

    /// `max_length` is zero, so no URI could ever be accepted.
    #[error("max_length must be greater than zero")]
    ZeroMaxLength,
}

// ---------------------------------------------------------------------------
// SlugConfig
// ---------------------------------------------------------------------------

/// Word separator and case policy applied by the slug normalizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// String placed between slug words.
    pub separator: String,
    /// When `false`, slugs are lowercased.
    pub allow_uppercase: bool,
    /// Default for the `ascii` argument of [`crate::generate_slug`] when the
    /// caller passes `None`.
    pub limit_auto_slugs_to_ascii: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            allow_uppercase: false,
            limit_auto_slugs_to_ascii: false,
        }
    }
}

impl SlugConfig {
    /// Creates a config with the given separator and case policy.
    pub fn new(separator: impl Into<String>, allow_uppercase: bool) -> Self {
        Self {
            separator: separator.into(),
            allow_uppercase,
            ..Self::default()
        }
    }

    /// Checks that the separator can be used to join and split words.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        if self.separator.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceSeparator(self.separator.clone()));
        }
        if let Some(found) = self.separator.chars().find(|c| is_unstable_separator_char(*c)) {
            return Err(ConfigError::UnstableSeparator {
                separator: self.separator.clone(),
                found,
            });
        }
        Ok(())
    }
}

/// Characters a slug normalizer either keeps inside a word or deletes.
fn is_unstable_separator_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '<' | '>') || INNER_WORD_PUNCTUATION.contains(&c)
}

// ---------------------------------------------------------------------------
// RetryBudget
// ---------------------------------------------------------------------------

/// Bounds on the uniqueness retry loop in [`crate::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryBudget {
    /// Largest numeric suffix the resolver will try.
    pub max_increment: u32,
    /// Largest accepted URI length, counted in `char`s.
    pub max_length: usize,
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self {
            max_increment: DEFAULT_MAX_INCREMENT,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl RetryBudget {
    /// Checks that at least one URI could be accepted under this budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Both configuration sections, in the shape of a settings file:
///
/// ```json
/// { "slug": { "separator": "_" }, "budget": { "max_increment": 10 } }
/// ```
///
/// Missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slug normalization settings.
    pub slug: SlugConfig,
    /// Resolver retry bounds.
    pub budget: RetryBudget,
}

impl Settings {
    /// Validates both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slug.validate()?;
        self.budget.validate()
    }
}
