//! Foreign-key references between records
//!
//! The data service writes a reference either as a plain identifier, as the
//! referenced record's URL (`.../apps/<app>/records/<id>`), or wrapped in an
//! object. [`RecordRef`] accepts all of them and [`RecordRef::record_id`]
//! yields the bare identifier.

use serde::{Deserialize, Serialize};

use crate::types::Record;

/// A reference to another record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordRef {
    /// Identifier or record URL
    Plain(String),
    /// Envelope object carrying the identifier or URL
    Wrapped(WrappedRef),
}

/// Envelope form of a reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedRef {
    /// Referenced identifier
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Referenced record URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RecordRef {
    /// Reference to a bare identifier
    pub fn id(record_id: impl Into<String>) -> Self {
        Self::Plain(record_id.into())
    }

    /// Referenced identifier, or `None` when the reference is empty
    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Self::Plain(raw) => id_from_value(raw),
            Self::Wrapped(wrapped) => wrapped
                .record_id
                .as_deref()
                .and_then(id_from_value)
                .or_else(|| wrapped.url.as_deref().and_then(id_from_value)),
        }
    }

    /// Whether this reference points at `record_id`
    #[must_use]
    pub fn refers_to(&self, record_id: &str) -> bool {
        self.record_id() == Some(record_id)
    }
}

impl From<&str> for RecordRef {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

/// Resolve an optional reference to the referenced identifier
#[must_use]
pub fn extract_record_id(reference: Option<&RecordRef>) -> Option<&str> {
    reference.and_then(RecordRef::record_id)
}

/// Find the record a reference points at
pub fn resolve<'a, F>(
    records: &'a [Record<F>],
    reference: Option<&RecordRef>,
) -> Option<&'a Record<F>> {
    let record_id = extract_record_id(reference)?;
    records.iter().find(|record| record.record_id == record_id)
}

/// Last path segment of a record URL, or the trimmed value itself
fn id_from_value(raw: &str) -> Option<&str> {
    let value = raw.trim();
    let value = value.split(['?', '#']).next().unwrap_or(value);
    let segment = value
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}
