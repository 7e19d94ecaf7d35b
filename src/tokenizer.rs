//! Unicode-aware word tokenizer.
//!
//! Pure text processing with no HTML awareness. A token is a run of letters,
//! combining marks and digits; apostrophes and hyphens join two such runs
//! (`dog's-home`) but never start or end a token.

use regex::Matches;

use crate::patterns::WORD_TOKEN;

/// Lazy iterator over the raw tokens of a text.
///
/// Calling [`tokenize`] again on the same text yields the same sequence.
pub struct Tokens<'t> {
    inner: Matches<'static, 't>,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}

/// Split `text` into raw word tokens, in order of appearance.
///
/// Never yields an empty token.
///
/// # Example
///
/// ```rust
/// use rs_cewlio::tokenize;
///
/// let tokens: Vec<&str> = tokenize("a OK cat, 77 dog's-home!").collect();
/// assert_eq!(tokens, vec!["a", "OK", "cat", "77", "dog's-home"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        inner: WORD_TOKEN.find_iter(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_punctuation_and_whitespace() {
        let tokens: Vec<&str> = tokenize("Hello, world!\n\tfoo/bar (baz)").collect();
        assert_eq!(tokens, vec!["Hello", "world", "foo", "bar", "baz"]);
    }

    #[test]
    fn test_symbols_terminate_tokens() {
        let tokens: Vec<&str> = tokenize("user@example.com $100 C++ a_b").collect();
        assert_eq!(tokens, vec!["user", "example", "com", "100", "C", "a", "b"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  -- '' ... ").count(), 0);
    }

    #[test]
    fn test_restartable() {
        let text = "one two three";
        let first: Vec<&str> = tokenize(text).collect();
        let second: Vec<&str> = tokenize(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_connector_dropped() {
        let tokens: Vec<&str> = tokenize("rock-'n'-roll well- 'tis").collect();
        assert_eq!(tokens, vec!["rock", "n", "roll", "well", "tis"]);
    }
}
