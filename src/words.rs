//! Word filtering, normalization and frequency counting.
//!
//! Tokens pass through [`WordFilter`] (transliteration, case folding, length
//! and charset rules, allow/deny patterns) and survivors are counted in a
//! [`WordFrequencyTable`] that remembers first-seen order, so output never
//! depends on hash iteration order.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::Options;

/// Count and first-seen sequence number of one normalized word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// The normalized word.
    pub word: String,

    /// Number of occurrences, always at least 1.
    pub count: usize,

    /// Insertion sequence number, starting at 0.
    pub first_seen: usize,
}

/// Mapping from normalized word to occurrence count, in first-seen order.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
    limit: Option<usize>,
    dropped: usize,
}

impl WordFrequencyTable {
    /// Create an empty, unbounded table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table holding at most `limit` distinct words.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Count one occurrence of `word`.
    ///
    /// Returns false when `word` is new and the table is full.
    pub fn record(&mut self, word: &str) -> bool {
        self.add(word, 1)
    }

    fn add(&mut self, word: &str, count: usize) -> bool {
        if let Some(&slot) = self.index.get(word) {
            self.entries[slot].count += count;
            return true;
        }

        if self.limit.is_some_and(|limit| self.entries.len() >= limit) {
            self.dropped += count;
            return false;
        }

        let slot = self.entries.len();
        self.entries.push(WordCount {
            word: word.to_string(),
            count,
            first_seen: slot,
        });
        self.index.insert(word.to_string(), slot);
        true
    }

    /// Add every count from `other`, appending its unseen words in its order.
    ///
    /// Used by callers aggregating several documents into one word list.
    pub fn merge(&mut self, other: &Self) {
        for entry in &other.entries {
            self.add(&entry.word, entry.count);
        }
    }

    /// Occurrence count of `word`, if present.
    #[must_use]
    pub fn count(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no word was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences rejected because the distinct-word limit was reached.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    /// Entries by count descending, ties broken by first-seen order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&WordCount> {
        let mut ranked: Vec<&WordCount> = self.entries.iter().collect();
        // Stable sort: equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

impl<'a> IntoIterator for &'a WordFrequencyTable {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.word, &entry.count)?;
        }
        map.end()
    }
}

/// Applies the configured normalization and acceptance rules to raw tokens.
#[derive(Debug, Clone, Copy)]
pub struct WordFilter<'o> {
    options: &'o Options,
}

impl<'o> WordFilter<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self { options }
    }

    /// Normalize `token`, or return `None` if it must not be counted.
    ///
    /// Length limits are measured in characters on the normalized form.
    #[must_use]
    pub fn normalize(&self, token: &str) -> Option<String> {
        let opts = self.options;

        if !opts.with_numbers && token.chars().any(char::is_numeric) {
            return None;
        }

        let word: Cow<'_, str> = if opts.convert_umlauts {
            convert_umlauts(token)
        } else {
            Cow::Borrowed(token)
        };
        let word: Cow<'_, str> = if opts.lowercase {
            Cow::Owned(word.to_lowercase())
        } else {
            word
        };

        let len = word.chars().count();
        if len < opts.min_word_length || opts.max_word_length.is_some_and(|max| len > max) {
            return None;
        }

        if opts.exclude_numeric_only && !word.chars().any(char::is_alphabetic) {
            return None;
        }

        if opts.allow_pattern.as_ref().is_some_and(|re| !re.is_match(&word)) {
            return None;
        }
        if opts.deny_pattern.as_ref().is_some_and(|re| re.is_match(&word)) {
            return None;
        }

        Some(word.into_owned())
    }
}

/// Replace German umlauts and sharp s with their two-letter spellings.
#[must_use]
pub fn convert_umlauts(text: &str) -> Cow<'_, str> {
    if !text.contains(['ä', 'ö', 'ü', 'Ä', 'Ö', 'Ü', 'ß']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ß' => out.push_str("ss"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Filters token streams into a word table and, optionally, a word group table.
///
/// One counter lives for exactly one extraction call.
pub struct WordCounter<'o> {
    filter: WordFilter<'o>,
    group_size: Option<usize>,
    words: WordFrequencyTable,
    groups: WordFrequencyTable,
}

impl<'o> WordCounter<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self {
            filter: WordFilter::new(options),
            // A group of one word is just the word table again.
            group_size: options.word_group_size.filter(|&n| n >= 2),
            words: WordFrequencyTable::with_limit(options.max_unique_words),
            groups: WordFrequencyTable::with_limit(options.max_unique_words),
        }
    }

    /// Filter and count the tokens of one text segment.
    ///
    /// Word groups are built from consecutive accepted words of this segment only.
    pub fn process<'t>(&mut self, tokens: impl IntoIterator<Item = &'t str>) {
        let filter = self.filter;
        let accepted = tokens.into_iter().filter_map(|t| filter.normalize(t));

        let Some(size) = self.group_size else {
            for word in accepted {
                self.words.record(&word);
            }
            return;
        };

        let accepted: Vec<String> = accepted.collect();
        for word in &accepted {
            self.words.record(word);
        }
        for window in accepted.windows(size) {
            self.groups.record(&window.join(" "));
        }
    }

    /// Freeze the counter into its word and group tables.
    #[must_use]
    pub fn finish(self) -> (WordFrequencyTable, WordFrequencyTable) {
        (self.words, self.groups)
    }
}
