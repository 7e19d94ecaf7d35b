//! Extraction calls share no state and can run on many threads at once.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_cewlio::{extract_with_options, ExtractionResult, Options, WordFrequencyTable};
use std::thread;

fn page(n: usize) -> String {
    format!("<html><body><p>shared words page{n} owner{n}@example.com</p><img alt=\"shared\"></body></html>")
}

#[test]
fn concurrent_calls_match_sequential_calls() {
    let options = Options {
        exclude_numeric_only: false,
        ..Options::default()
    };
    let pages: Vec<String> = (0..8).map(page).collect();

    let sequential: Vec<ExtractionResult> = pages
        .iter()
        .enumerate()
        .map(|(i, html)| extract_with_options(html, &i.to_string(), &options).expect("extract"))
        .collect();

    let concurrent: Vec<ExtractionResult> = thread::scope(|scope| {
        let handles: Vec<_> = pages
            .iter()
            .enumerate()
            .map(|(i, html)| {
                let options = &options;
                scope.spawn(move || extract_with_options(html, &i.to_string(), options).expect("extract"))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn caller_merges_results_across_documents() {
    let options = Options::default();
    let mut combined = WordFrequencyTable::new();

    for n in 0..3 {
        let result = extract_with_options(&page(n), "batch", &options).expect("extract");
        assert_eq!(result.words.count("shared"), Some(2));
        combined.merge(&result.words);
    }

    assert_eq!(combined.count("shared"), Some(6));
    assert_eq!(combined.count("page1"), Some(1));
    assert_eq!(combined.ranked()[0].word, "shared");
}
