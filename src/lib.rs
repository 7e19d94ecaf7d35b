//! # rs-cewlio
//!
//! Custom word list harvesting from rendered web content.
//!
//! This library turns rendered HTML into the raw material for targeted
//! dictionaries: a normalized word frequency table, the email addresses
//! mentioned on the page, and metadata pulled from attributes such as
//! `title`, `alt` and `<meta>` content.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_cewlio::extract;
//!
//! let html = r#"<html><head><title>Acme Widgets</title></head>
//! <body><p>Widgets for every workshop. Contact sales@acme.example.com</p>
//! <img src="w.png" alt="Blue widget"></body></html>"#;
//!
//! let result = extract(html, "https://acme.example.com/")?;
//! assert_eq!(result.words.count("widgets"), Some(2));
//! assert_eq!(result.emails.as_slice(), ["sales@acme.example.com"]);
//! for word in result.words.ranked() {
//!     println!("{}, {}", word.word, word.count);
//! }
//! # Ok::<(), rs_cewlio::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Walker**: parses the page and streams visible text and whitelisted
//!   attribute text, skipping scripts, styles, comments and hidden elements
//! - **Tokenizer**: splits text on Unicode word boundaries
//! - **Word filter**: case folding, length bounds, numeric and pattern rules
//! - **Email matcher**: lexical `local@domain` matching
//!
//! Fetching and rendering pages is left to the caller. Every call is
//! self-contained and shares no state, so documents can be processed on as
//! many threads as the caller likes.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Byte-to-text decoding with charset sniffing.
pub mod encoding;

/// Email address matching and the ordered email set.
pub mod emails;

/// Unicode-aware word tokenizer.
pub mod tokenizer;

/// HTML traversal producing visible and attribute text segments.
pub mod walker;

/// Word normalization and frequency counting.
pub mod words;

// Public API - re-exports
pub use emails::{find_emails, EmailSet};
pub use error::{Error, Result};
pub use options::{AttributeRule, Options};
pub use result::{ExtractionResult, MetadataEntry, MetadataKind};
pub use tokenizer::tokenize;
pub use walker::{walk, Segment, SegmentKind};
pub use words::{WordCount, WordFrequencyTable};

/// Extracts words, emails and metadata from an HTML document using default options.
///
/// # Arguments
///
/// * `html` - The rendered HTML document as a string slice
/// * `source` - URL or path of the document, carried through to the result
///
/// # Returns
///
/// Always returns `Ok` for string input: malformed markup is repaired, and
/// a document without text yields an empty result.
///
/// # Example
///
/// ```rust
/// use rs_cewlio::extract;
///
/// let result = extract("<p>a OK cat 77 dog's-home</p>", "inline")?;
/// let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
/// assert_eq!(words, vec!["cat", "dog's-home"]);
/// # Ok::<(), rs_cewlio::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str, source: &str) -> Result<ExtractionResult> {
    extract_with_options(html, source, &Options::default())
}

/// Extracts words, emails and metadata from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_cewlio::{extract_with_options, Options};
///
/// let html = "<p>Password Passwort Straße</p>";
/// let options = Options {
///     min_word_length: 8,
///     convert_umlauts: true,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, "inline", &options)?;
/// assert_eq!(result.words.len(), 2);
/// # Ok::<(), rs_cewlio::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, source: &str, options: &Options) -> Result<ExtractionResult> {
    Ok(extract::extract_document(html, source, options))
}

/// Extracts from raw HTML bytes, detecting the character encoding first.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the bytes are not decodable text.
///
/// # Example
///
/// ```rust
/// use rs_cewlio::{extract_bytes, Error};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9 cr\xE8me</body></html>";
/// let result = extract_bytes(html, "latin1.html")?;
/// assert_eq!(result.words.count("café"), Some(1));
///
/// let binary = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
/// assert!(matches!(extract_bytes(binary, "image.png"), Err(Error::ParseError(_))));
/// # Ok::<(), rs_cewlio::Error>(())
/// ```
pub fn extract_bytes(html: &[u8], source: &str) -> Result<ExtractionResult> {
    extract_bytes_with_options(html, source, &Options::default())
}

/// Extracts from raw HTML bytes with custom options.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the bytes are not decodable text.
pub fn extract_bytes_with_options(html: &[u8], source: &str, options: &Options) -> Result<ExtractionResult> {
    let text = encoding::decode_html(html)?;
    extract_with_options(&text, source, options)
}
