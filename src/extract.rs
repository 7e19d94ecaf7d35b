//! Extraction orchestration.
//!
//! Drives the walker's segment stream in one pass. Visible text and attribute
//! text both feed the word counter and the email matcher; attribute text is
//! additionally recorded as a metadata entry.

use tracing::{debug, warn};

use crate::emails::EmailSet;
use crate::result::{ExtractionResult, MetadataEntry};
use crate::tokenizer::tokenize;
use crate::walker::{SegmentKind, Walker};
use crate::words::WordCounter;
use crate::Options;

/// Extract words, emails and metadata from already-decoded HTML.
///
/// Never mutates `html`, and identical input and options always give an
/// identical result.
pub(crate) fn extract_document(html: &str, source: &str, options: &Options) -> ExtractionResult {
    let mut counter = WordCounter::new(options);
    let mut emails = EmailSet::new();
    let mut metadata = Vec::new();

    let segments = Walker::new(options).visit(html, |segment| {
        counter.process(tokenize(&segment.text));

        if options.extract_emails {
            emails.extend_from_text(&segment.text);
        }

        if let SegmentKind::AttributeText(kind) = segment.kind {
            if options.extract_metadata {
                metadata.push(MetadataEntry {
                    kind,
                    value: segment.text.to_string(),
                });
            }
        }
    });

    let (words, groups) = counter.finish();

    if words.dropped() > 0 {
        warn!(
            source,
            limit = ?options.max_unique_words,
            dropped = words.dropped(),
            "distinct word limit reached, new words were dropped"
        );
    }

    debug!(
        source,
        segments,
        words = words.len(),
        groups = groups.len(),
        emails = emails.len(),
        metadata = metadata.len(),
        "extracted document"
    );

    ExtractionResult {
        source: source.to_string(),
        words,
        groups,
        emails,
        metadata,
    }
}
