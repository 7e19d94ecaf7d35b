//! Malformed and degenerate input never fails for string input.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_cewlio::extract;

#[test]
fn extract_does_not_fail_on_unclosed_tags() {
    let result = extract("<p>text<div>more", "test").expect("expected Ok(_)");
    assert_eq!(result.words.count("text"), Some(1));
    assert_eq!(result.words.count("more"), Some(1));
}

#[test]
fn extract_does_not_fail_on_invalid_nesting() {
    let result = extract("<p><div></p></div><table><p>cell</table>", "test").expect("expected Ok(_)");
    assert_eq!(result.words.count("cell"), Some(1));
}

#[test]
fn extract_does_not_fail_on_broken_attributes() {
    let result = extract("<div class=\"test id=broken>orphan text", "test").expect("expected Ok(_)");
    assert_eq!(result.words.count("orphan"), None);
}

#[test]
fn extract_decodes_entities() {
    let result = extract("&amp text &lt; caf&eacute; &#x6D;ail", "test").expect("expected Ok(_)");
    assert_eq!(result.words.count("text"), Some(1));
    assert_eq!(result.words.count("café"), Some(1));
    assert_eq!(result.words.count("mail"), Some(1));
}

#[test]
fn extract_returns_empty_result_for_empty_string() {
    let result = extract("", "empty").expect("expected Ok(_)");
    assert!(result.is_empty());
    assert_eq!(result.source, "empty");
}

#[test]
fn extract_returns_empty_result_for_markup_only() {
    let html = "<html><head><script>var a = 1;</script></head><body><br><hr></body></html>";
    let result = extract(html, "test").expect("expected Ok(_)");
    assert!(result.is_empty());
}

#[test]
fn extract_handles_plain_text() {
    let result = extract("just some plain text, no markup", "test").expect("expected Ok(_)");
    assert_eq!(result.words.len(), 5);
}

#[test]
fn extract_handles_deep_nesting() {
    let depth = 1_000;
    let html = format!("{}deepest{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let result = extract(&html, "test").expect("expected Ok(_)");
    assert_eq!(result.words.count("deepest"), Some(1));
}

#[test]
fn extract_unterminated_comment_and_script() {
    let result = extract("<p>before</p><!-- never closed <p>inside</p>", "test").expect("expected Ok(_)");
    assert_eq!(result.words.count("before"), Some(1));
    assert_eq!(result.words.count("inside"), None);

    let result = extract("<p>before</p><script>never closed", "test").expect("expected Ok(_)");
    assert_eq!(result.words.count("before"), Some(1));
    assert_eq!(result.words.count("never"), None);
}
