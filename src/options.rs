//! Configuration options for word, email and metadata extraction.
//!
//! The `Options` struct controls the word filter, the email matcher and the
//! HTML walker's attribute whitelist.

use regex::Regex;

use crate::error::{Error, Result};
use crate::result::MetadataKind;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_cewlio::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_word_length: 5,
///     lowercase: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Minimum word length in characters, measured after normalization.
    ///
    /// Default: `3`
    pub min_word_length: usize,

    /// Maximum word length in characters. `None` means unbounded.
    ///
    /// Default: `None`
    pub max_word_length: Option<usize>,

    /// Fold words to lower case before counting.
    ///
    /// Default: `true`
    pub lowercase: bool,

    /// Drop tokens that contain no alphabetic character (`"77"`, `"2024-01"`).
    ///
    /// Default: `true`
    pub exclude_numeric_only: bool,

    /// Keep tokens that contain digits (`"web2"`).
    ///
    /// When false, any token with a digit is dropped.
    ///
    /// Default: `true`
    pub with_numbers: bool,

    /// Transliterate German umlauts and sharp s (`ä` -> `ae`, `ß` -> `ss`)
    /// before case folding.
    ///
    /// Default: `false`
    pub convert_umlauts: bool,

    /// Only words matching this pattern are counted.
    ///
    /// Default: `None`
    pub allow_pattern: Option<Regex>,

    /// Words matching this pattern are never counted.
    ///
    /// Default: `None`
    pub deny_pattern: Option<Regex>,

    /// Also count groups of this many consecutive words, joined by a space.
    ///
    /// Groups never span two text segments.
    ///
    /// Default: `None`
    pub word_group_size: Option<usize>,

    /// Upper bound on distinct words per document.
    ///
    /// Once reached, unseen words are dropped while known words keep counting.
    ///
    /// Default: `None`
    pub max_unique_words: Option<usize>,

    /// Collect email addresses.
    ///
    /// Default: `true`
    pub extract_emails: bool,

    /// Record metadata entries for whitelisted attribute text.
    ///
    /// Attribute text still contributes words and emails when disabled.
    ///
    /// Default: `true`
    pub extract_metadata: bool,

    /// Walk into script/style/hidden subtrees to collect attribute text.
    ///
    /// Text inside those subtrees is never treated as visible.
    ///
    /// Default: `false`
    pub attributes_in_excluded: bool,

    /// Which tags and attributes produce attribute text.
    ///
    /// Default: [`AttributeRule::defaults`]
    pub attribute_rules: Vec<AttributeRule>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            max_word_length: None,
            lowercase: true,
            exclude_numeric_only: true,
            with_numbers: true,
            convert_umlauts: false,
            allow_pattern: None,
            deny_pattern: None,
            word_group_size: None,
            max_unique_words: None,
            extract_emails: true,
            extract_metadata: true,
            attributes_in_excluded: false,
            attribute_rules: AttributeRule::defaults(),
        }
    }
}

impl Options {
    /// Set the allow pattern from a regex string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` does not compile.
    pub fn with_allow_pattern(mut self, pattern: &str) -> Result<Self> {
        self.allow_pattern = Some(compile_pattern(pattern)?);
        Ok(self)
    }

    /// Set the deny pattern from a regex string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` does not compile.
    pub fn with_deny_pattern(mut self, pattern: &str) -> Result<Self> {
        self.deny_pattern = Some(compile_pattern(pattern)?);
        Ok(self)
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// One entry of the walker's attribute whitelist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeRule {
    /// `attribute` on elements named `tag`, or on every element when `tag` is `None`.
    Attribute {
        /// Lower-case tag name filter.
        tag: Option<String>,
        /// Lower-case attribute name.
        attribute: String,
        /// Kind recorded on the resulting metadata entry.
        kind: MetadataKind,
    },

    /// `content` of `<meta>`, keyed by its `name`, `property` or `itemprop`.
    MetaContent,

    /// Text of the document `<title>` element.
    PageTitle,
}

impl AttributeRule {
    /// Rule for `attribute` on `tag` (any element when `None`).
    ///
    /// `title` and `alt` map to their dedicated kinds; every other
    /// attribute is recorded as [`MetadataKind::Attribute`].
    #[must_use]
    pub fn attribute(tag: Option<&str>, attribute: &str) -> Self {
        let attribute = attribute.to_ascii_lowercase();
        let kind = match attribute.as_str() {
            "title" => MetadataKind::Title,
            "alt" => MetadataKind::Alt,
            _ => MetadataKind::Attribute(attribute.clone()),
        };
        Self::Attribute {
            tag: tag.map(str::to_ascii_lowercase),
            attribute,
            kind,
        }
    }

    /// The default whitelist: every `title`, `alt` on image-like elements,
    /// `<meta>` content and the document title.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::PageTitle,
            Self::MetaContent,
            Self::attribute(None, "title"),
            Self::attribute(Some("img"), "alt"),
            Self::attribute(Some("area"), "alt"),
            Self::attribute(Some("input"), "alt"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.min_word_length, 3);
        assert!(opts.max_word_length.is_none());
        assert!(opts.lowercase);
        assert!(opts.exclude_numeric_only);
        assert!(opts.with_numbers);
        assert!(!opts.convert_umlauts);
        assert!(opts.allow_pattern.is_none());
        assert!(opts.deny_pattern.is_none());
        assert!(opts.word_group_size.is_none());
        assert!(opts.max_unique_words.is_none());
        assert!(opts.extract_emails);
        assert!(opts.extract_metadata);
        assert!(!opts.attributes_in_excluded);
        assert_eq!(opts.attribute_rules, AttributeRule::defaults());
    }

    #[test]
    fn test_with_patterns_compile() {
        let opts = Options::default()
            .with_allow_pattern("^[a-z]+$")
            .and_then(|o| o.with_deny_pattern("^(the|and)$"))
            .expect("valid patterns");

        assert!(opts.allow_pattern.is_some_and(|re| re.is_match("word")));
        assert!(opts.deny_pattern.is_some_and(|re| re.is_match("the")));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Options::default().with_deny_pattern("[unclosed").unwrap_err();
        match err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_attribute_rule_kinds() {
        assert_eq!(
            AttributeRule::attribute(None, "TITLE"),
            AttributeRule::Attribute {
                tag: None,
                attribute: "title".to_string(),
                kind: MetadataKind::Title,
            }
        );
        assert_eq!(
            AttributeRule::attribute(Some("A"), "href"),
            AttributeRule::Attribute {
                tag: Some("a".to_string()),
                attribute: "href".to_string(),
                kind: MetadataKind::Attribute("href".to_string()),
            }
        );
    }
}
