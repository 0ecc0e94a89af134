//! The record capability the resolver and sibling linker work against.
//!
//! The core never owns content records. It reads a handful of fields through
//! [`RecordLike`] and writes the resolved `uri` (and, for auto-generated
//! slugs, the `slug`) back through the same trait. [`Record`] is a plain
//! serializable implementation used by the CLI and by tests.
use serde::{Deserialize, Serialize};

/// Narrow read/write access to a content record.
pub trait RecordLike {
    /// Opaque identity, used to exclude a record's own URI from uniqueness
    /// checks and to report navigation neighbours.
    type Id: PartialEq + std::fmt::Debug;

    /// The record's identity, if it has been persisted.
    fn id(&self) -> Option<&Self::Id>;

    /// Human-readable text used when a slug must be generated.
    fn label(&self) -> Option<&str>;

    /// The current slug, if any.
    fn slug(&self) -> Option<&str>;

    /// Replaces the slug.
    fn set_slug(&mut self, slug: Option<String>);

    /// The URI format template, if the record has URIs at all.
    fn uri_format(&self) -> Option<&str>;

    /// The resolved URI, if any.
    fn uri(&self) -> Option<&str>;

    /// Stores the resolved URI.
    fn set_uri(&mut self, uri: Option<String>);
}

/// A minimal content record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Persisted identity, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title or other label a slug can be generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Caller-chosen or previously generated slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// URI format such as `blog/{slug}`.
    #[serde(default)]
    pub uri_format: Option<String>,
    /// Resolved URI, written by [`crate::resolve`].
    #[serde(default)]
    pub uri: Option<String>,
}

impl Record {
    /// Creates a record with the given URI format and nothing else.
    pub fn for_format(uri_format: impl Into<String>) -> Self {
        Self {
            uri_format: Some(uri_format.into()),
            ..Self::default()
        }
    }

    /// Sets the identity.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

impl RecordLike for Record {
    type Id = String;

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn set_slug(&mut self, slug: Option<String>) {
        self.slug = slug;
    }

    fn uri_format(&self) -> Option<&str> {
        self.uri_format.as_deref()
    }

    fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    fn set_uri(&mut self, uri: Option<String>) {
        self.uri = uri;
    }
}
