//! Result types for extraction output.
//!
//! This module defines the frozen aggregate returned by one extraction call:
//! word counts, email addresses and the ordered metadata observations.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::emails::EmailSet;
use crate::words::WordFrequencyTable;

/// Source attribute or tag of a metadata observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// `title` attribute of any element.
    Title,

    /// `alt` attribute of an image-like element.
    Alt,

    /// Text of the document `<title>` element.
    PageTitle,

    /// `<meta>` content, keyed by its lower-cased `name`/`property`/`itemprop`.
    Meta(String),

    /// Any other whitelisted attribute, by name.
    Attribute(String),
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Alt => f.write_str("alt"),
            Self::PageTitle => f.write_str("page-title"),
            Self::Meta(name) => write!(f, "meta:{name}"),
            Self::Attribute(name) => f.write_str(name),
        }
    }
}

impl Serialize for MetadataKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One (kind, value) observation, in document order.
///
/// Entries are never deduplicated: the same alt text on two images is
/// recorded twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    /// Where the value came from.
    pub kind: MetadataKind,

    /// Raw attribute value or tag text.
    pub value: String,
}

/// Result of extracting one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Caller-supplied identifier (URL or path), carried through verbatim.
    pub source: String,

    /// Normalized word counts in first-seen order.
    pub words: WordFrequencyTable,

    /// Word group counts (only populated when `word_group_size` is set).
    pub groups: WordFrequencyTable,

    /// Email addresses in first-seen order.
    pub emails: EmailSet,

    /// Metadata observations in document order.
    pub metadata: Vec<MetadataEntry>,
}

impl ExtractionResult {
    /// Values of all metadata entries of `kind`, in document order.
    pub fn metadata_values<'a>(&'a self, kind: &MetadataKind) -> impl Iterator<Item = &'a str> + 'a {
        let kind = kind.clone();
        self.metadata
            .iter()
            .filter(move |entry| entry.kind == kind)
            .map(|entry| entry.value.as_str())
    }

    /// True when nothing at all was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.emails.is_empty() && self.metadata.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_kind_display() {
        assert_eq!(MetadataKind::Title.to_string(), "title");
        assert_eq!(MetadataKind::Alt.to_string(), "alt");
        assert_eq!(MetadataKind::PageTitle.to_string(), "page-title");
        assert_eq!(MetadataKind::Meta("description".into()).to_string(), "meta:description");
        assert_eq!(MetadataKind::Attribute("href".into()).to_string(), "href");
    }

    #[test]
    fn test_metadata_entry_serializes_kind_as_string() {
        let entry = MetadataEntry {
            kind: MetadataKind::Meta("keywords".into()),
            value: "osint, recon".into(),
        };
        let json = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(json, r#"{"kind":"meta:keywords","value":"osint, recon"}"#);
    }

    #[test]
    fn test_metadata_values_filters_by_kind() {
        let result = ExtractionResult {
            metadata: vec![
                MetadataEntry { kind: MetadataKind::Alt, value: "one".into() },
                MetadataEntry { kind: MetadataKind::Title, value: "two".into() },
                MetadataEntry { kind: MetadataKind::Alt, value: "three".into() },
            ],
            ..ExtractionResult::default()
        };

        let alts: Vec<&str> = result.metadata_values(&MetadataKind::Alt).collect();
        assert_eq!(alts, vec!["one", "three"]);
        assert!(!result.is_empty());
        assert!(ExtractionResult::default().is_empty());
    }
}
