//! Unique URI resolution.
//!
//! [`resolve`] turns a record's URI format and slug into a URI that no other
//! record currently uses. Uniqueness is checked through an injected
//! [`UriExistence`] implementation, which keeps this crate free of any
//! persistence dependency. On conflict the slug gains a numeric suffix
//! (`-1`, `-2`, ...) up to [`RetryBudget::max_increment`]; when a candidate
//! would exceed [`RetryBudget::max_length`] the base slug (never the suffix)
//! is truncated from the right.
//!
//! The check is best effort: two resolvers racing on the same candidate can
//! both observe it as free. The persistence layer must enforce uniqueness on
//! insert and may call [`resolve`] again on conflict.
use std::collections::BTreeMap;
use std::convert::Infallible;

use log::{debug, warn};

use crate::config::{RetryBudget, SlugConfig};
use crate::record::RecordLike;
use crate::slug::generate_slug;
use crate::template::{SLUG_TAG, does_uri_format_have_slug_tag, render_uri};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by [`resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Every candidate up to the retry budget was already taken.
    #[error("could not find a unique URI for slug {slug:?} after {attempts} attempt(s)")]
    OperationAborted {
        /// The base slug the suffixes were appended to.
        slug: String,
        /// Number of existence checks performed.
        attempts: u32,
    },

    /// The existence check itself failed (e.g. a lookup I/O error).
    #[error("URI existence check failed: {0}")]
    CollaboratorFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A [`ResolveError`] tagged with the position of the failing record in a
/// batch passed to [`resolve_all`].
#[derive(Debug, thiserror::Error)]
#[error("record {index}: {source}")]
pub struct BatchError {
    /// Zero-based position of the record that failed.
    pub index: usize,
    /// The underlying resolution error.
    #[source]
    pub source: ResolveError,
}

// ---------------------------------------------------------------------------
// Existence check
// ---------------------------------------------------------------------------

/// Answers "is this URI already taken?" for the resolver.
///
/// Implementations should answer from a consistent snapshot for the duration
/// of one [`resolve`] call. `excluding` is the identity of the record being
/// resolved; a URI owned by that record must not count as taken, so that
/// re-saving a record keeps its URI.
///
/// Errors must be returned as errors, never reported as "does not exist".
pub trait UriExistence<Id: ?Sized> {
    /// Error produced by a failed lookup.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `true` if `uri` belongs to some record other than `excluding`.
    fn uri_exists(&self, uri: &str, excluding: Option<&Id>) -> Result<bool, Self::Error>;
}

impl<Id, F, E> UriExistence<Id> for F
where
    Id: ?Sized,
    F: Fn(&str, Option<&Id>) -> Result<bool, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn uri_exists(&self, uri: &str, excluding: Option<&Id>) -> Result<bool, E> {
        self(uri, excluding)
    }
}

/// In-memory set of taken URIs, each with an optional owner.
///
/// A URI without an owner is taken for everybody. A URI with an owner is
/// free for that owner only.
#[derive(Debug, Clone)]
pub struct UriIndex<Id = String> {
    entries: BTreeMap<String, Option<Id>>,
}

impl<Id> Default for UriIndex<Id> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<Id: PartialEq> UriIndex<Id> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `uri` as taken by `owner`.
    ///
    /// When `owner` is `Some`, any other URI previously held by the same owner
    /// is released first: a record has one URI at a time.
    pub fn assign(&mut self, uri: impl Into<String>, owner: Option<Id>) {
        if let Some(owner_id) = owner.as_ref() {
            self.entries
                .retain(|_, held_by| held_by.as_ref() != Some(owner_id));
        }
        self.entries.insert(uri.into(), owner);
    }

    /// Removes `uri` from the index. Returns `true` if it was present.
    pub fn release(&mut self, uri: &str) -> bool {
        self.entries.remove(uri).is_some()
    }

    /// Returns `true` if `uri` is held by anybody.
    pub fn contains(&self, uri: &str) -> bool {
        self.entries.contains_key(uri)
    }

    /// Returns the owner of `uri`, if it is held by an identified record.
    pub fn owner(&self, uri: &str) -> Option<&Id> {
        self.entries.get(uri).and_then(Option::as_ref)
    }

    /// Number of taken URIs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no URI is taken.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the taken URIs in lexicographic order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<Id> FromIterator<String> for UriIndex<Id> {
    /// Builds an index of ownerless URIs.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|uri| (uri, None)).collect(),
        }
    }
}

impl<Id: PartialEq> UriExistence<Id> for UriIndex<Id> {
    type Error = Infallible;

    fn uri_exists(&self, uri: &str, excluding: Option<&Id>) -> Result<bool, Infallible> {
        let taken = match self.entries.get(uri) {
            None => false,
            Some(Some(owner)) => excluding != Some(owner),
            Some(None) => true,
        };
        Ok(taken)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolves a unique URI for `record` and stores it via
/// [`RecordLike::set_uri`].
///
/// - No (or an empty) URI format clears the URI.
/// - A missing slug is generated from the record's label, and the generated
///   slug (including any numeric suffix) is written back. A caller-supplied
///   slug is never renamed; only the URI carries the suffix.
/// - A format without `{slug}` is fixed: it is rendered and accepted without
///   consulting `exists`.
///
/// # Errors
///
/// - [`ResolveError::OperationAborted`] when every suffix up to
///   `budget.max_increment` is taken. With `max_increment == 0` the first
///   conflict aborts.
/// - [`ResolveError::CollaboratorFailure`] as soon as `exists` fails.
pub fn resolve<R, C>(
    record: &mut R,
    config: &SlugConfig,
    budget: &RetryBudget,
    exists: &C,
) -> Result<(), ResolveError>
where
    R: RecordLike + ?Sized,
    C: UriExistence<R::Id> + ?Sized,
{
    let Some(uri_format) = record
        .uri_format()
        .filter(|f| !f.is_empty())
        .map(str::to_owned)
    else {
        record.set_uri(None);
        return Ok(());
    };

    let (base, derived) = match record.slug().filter(|s| !s.is_empty()) {
        Some(slug) => (slug.to_owned(), false),
        None => {
            let label = record.label().unwrap_or_default();
            (generate_slug(label, None, None, config), true)
        }
    };

    if !does_uri_format_have_slug_tag(&uri_format) {
        record.set_uri(Some(render_uri(&uri_format, &base)));
        if derived {
            record.set_slug(Some(base));
        }
        return Ok(());
    }

    let mut attempt: u32 = 0;
    loop {
        let suffix = if attempt == 0 {
            String::new()
        } else {
            format!("{}{attempt}", config.separator)
        };
        let (slug, uri) = fit_to_length(
            &uri_format,
            &base,
            &suffix,
            &config.separator,
            budget.max_length,
        );

        debug!("uri candidate #{attempt}: {uri:?}");
        let taken = exists
            .uri_exists(&uri, record.id())
            .map_err(|e| ResolveError::CollaboratorFailure(Box::new(e)))?;

        if !taken {
            record.set_uri(Some(uri));
            if derived {
                record.set_slug(Some(slug));
            }
            return Ok(());
        }

        let Some(next) = attempt
            .checked_add(1)
            .filter(|n| *n <= budget.max_increment)
        else {
            let attempts = attempt.saturating_add(1);
            warn!("no unique URI for slug {base:?} after {attempts} attempt(s)");
            return Err(ResolveError::OperationAborted {
                slug: base,
                attempts,
            });
        };
        attempt = next;
    }
}

/// Resolves every record in order against `index`, registering each accepted
/// URI so later records in the batch see it as taken.
///
/// # Errors
///
/// Stops at the first failing record and returns its position.
pub fn resolve_all<R, Id>(
    records: &mut [R],
    config: &SlugConfig,
    budget: &RetryBudget,
    index: &mut UriIndex<Id>,
) -> Result<(), BatchError>
where
    R: RecordLike<Id = Id>,
    Id: Clone + PartialEq,
{
    for (position, record) in records.iter_mut().enumerate() {
        resolve(record, config, budget, &*index).map_err(|source| BatchError {
            index: position,
            source,
        })?;
        if let Some(uri) = record.uri() {
            index.assign(uri, record.id().cloned());
        }
    }
    Ok(())
}

/// Renders `base + suffix`, truncating `base` from the right until the URI
/// fits in `max_length` characters.
///
/// Every `{slug}` tag in the format repeats the truncated base, so the
/// overage is shared between them and the base is then grown back to the
/// longest prefix that still fits. A truncated base never ends in
/// `separator`. Returns the slug that was rendered and the URI. When even an
/// empty base does not fit, the over-long URI is returned as is.
fn fit_to_length(
    uri_format: &str,
    base: &str,
    suffix: &str,
    separator: &str,
    max_length: usize,
) -> (String, String) {
    let full = base.chars().count();
    let tags = uri_format.matches(SLUG_TAG).count().max(1);
    let render = |keep: usize| {
        let prefix: String = base.chars().take(keep).collect();
        let truncated = if keep < full && !separator.is_empty() {
            prefix.trim_end_matches(separator)
        } else {
            prefix.as_str()
        };
        let slug = format!("{truncated}{suffix}");
        let uri = render_uri(uri_format, &slug);
        (slug, uri)
    };
    let fits = |uri: &str| uri.chars().count() <= max_length;

    let mut keep = full;
    loop {
        let (slug, uri) = render(keep);
        let len = uri.chars().count();
        if len <= max_length {
            break;
        }
        if keep == 0 {
            warn!("URI {uri:?} exceeds {max_length} characters even with an empty base slug");
            return (slug, uri);
        }
        keep = keep.saturating_sub((len - max_length).div_ceil(tags));
    }
    while keep < full && fits(&render(keep + 1).1) {
        keep += 1;
    }
    render(keep)
}
