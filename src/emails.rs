//! Lexical email address matching.
//!
//! Runs on raw segment text, independently of the tokenizer. Matching is
//! purely pattern based; no MX or deliverability checks are made.

use std::collections::HashSet;

use regex::Matches;
use serde::{Serialize, Serializer};

use crate::patterns::EMAIL_ADDRESS;

/// Lazy iterator over email-shaped substrings, in order of appearance.
pub struct Emails<'t> {
    inner: Matches<'static, 't>,
}

impl<'t> Iterator for Emails<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}

/// Find every email address in `text`, case preserved.
///
/// # Example
///
/// ```rust
/// use rs_cewlio::find_emails;
///
/// let found: Vec<&str> = find_emails("Contact: Jane.Doe@Example.com or spam@@bad").collect();
/// assert_eq!(found, vec!["Jane.Doe@Example.com"]);
/// ```
#[must_use]
pub fn find_emails(text: &str) -> Emails<'_> {
    Emails {
        inner: EMAIL_ADDRESS.find_iter(text),
    }
}

/// Insertion-ordered set of email addresses.
///
/// Membership is exact and case-sensitive: `A@x.com` and `a@x.com` are
/// distinct because local parts may be case-significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl EmailSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `email`; returns false if it was already present.
    pub fn insert(&mut self, email: &str) -> bool {
        if self.seen.contains(email) {
            return false;
        }
        self.seen.insert(email.to_string());
        self.ordered.push(email.to_string());
        true
    }

    /// Add every address found in `text`.
    pub fn extend_from_text(&mut self, text: &str) {
        for email in find_emails(text) {
            self.insert(email);
        }
    }

    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.seen.contains(email)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Addresses in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Addresses in first-seen order, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }
}

impl Serialize for EmailSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.ordered.serialize(serializer)
    }
}
