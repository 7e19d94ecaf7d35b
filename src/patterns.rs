//! Compiled regex patterns for tokenizing, email matching and hidden-element detection.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tokenizer
// =============================================================================

/// A run of letters, combining marks and digits.
///
/// Apostrophes (ASCII and U+2019) and hyphens are kept only between two word
/// characters, so `dog's-home` is one token while `home-` and `--` split.
pub static WORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+(?:['\x{2019}\-][\p{L}\p{M}\p{N}]+)*").expect("WORD_TOKEN regex")
});

// =============================================================================
// Email Matcher
// =============================================================================

/// `local@domain` with an alphabetic top-level label of two or more letters.
///
/// The trailing ASCII word boundary stops `user@host.com1` from matching as
/// `user@host.co`, while non-ASCII text may run straight into the address.
pub static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@(?:[A-Za-z0-9\-]+\.)+[A-Za-z]{2,}(?-u:\b)")
        .expect("EMAIL_ADDRESS regex")
});

// =============================================================================
// Hidden Element Detection
// =============================================================================

/// Inline `style` declarations that stop an element from rendering.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*(?:display\s*:\s*none|visibility\s*:\s*hidden)\s*(?:!\s*important\s*)?(?:;|$)")
        .expect("HIDDEN_STYLE regex")
});
