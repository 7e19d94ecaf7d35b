use rs_cewlio::{extract_bytes, extract_bytes_with_options, Error, Options};

/// UTF-8 content with non-ASCII letters is tokenized correctly
#[test]
fn utf8_content_handled_correctly() {
    let html = "\
        <html>\
        <head><meta charset=\"utf-8\"></head>\
        <body><p>Überraschung für naïve Café-Besucher 中文字符</p></body>\
        </html>\
    ".as_bytes();

    let result = extract_bytes(html, "utf8.html").expect("extraction failed");

    assert_eq!(result.words.count("überraschung"), Some(1));
    assert_eq!(result.words.count("für"), Some(1));
    assert_eq!(result.words.count("naïve"), Some(1));
    assert_eq!(result.words.count("café-besucher"), Some(1));
    assert_eq!(result.words.count("中文字符"), Some(1));
}

/// ISO-8859-1 declared in a meta tag is decoded before extraction
#[test]
fn iso88591_converted_to_utf8() {
    // é = 0xE9, ñ = 0xF1, ü = 0xFC in ISO-8859-1
    let html = b"<html>\
        <head><meta charset=\"ISO-8859-1\"></head>\
        <body><p>Caf\xE9 espa\xF1ol M\xFCnchen</p></body></html>";

    let result = extract_bytes(html, "latin1.html").expect("extraction failed");

    assert_eq!(result.words.count("café"), Some(1));
    assert_eq!(result.words.count("español"), Some(1));
    assert_eq!(result.words.count("münchen"), Some(1));
}

/// Windows-1252 declared via http-equiv is detected
#[test]
fn windows1252_detected_and_converted() {
    // 0x93/0x94 are curly double quotes, 0x96 is an en dash
    let html = b"<html>\
        <head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>\
        <body><p>\x93Smart quotes\x94 and an en\x96dash.</p></body></html>";

    let result = extract_bytes(html, "cp1252.html").expect("extraction failed");

    assert_eq!(result.words.count("smart"), Some(1));
    assert_eq!(result.words.count("quotes"), Some(1));
    assert_eq!(result.words.count("dash"), Some(1));
}

/// Umlaut conversion applies to decoded legacy input too
#[test]
fn decoded_umlauts_can_be_transliterated() {
    let html = b"<meta charset=\"latin1\"><p>Gr\xF6\xDFe</p>";
    let options = Options {
        convert_umlauts: true,
        ..Options::default()
    };

    let result = extract_bytes_with_options(html, "de.html", &options).expect("extraction failed");
    assert_eq!(result.words.count("groesse"), Some(1));
}

/// Undecodable bytes are a parse error, not a partial result
#[test]
fn invalid_utf8_is_a_parse_error() {
    let html = b"<html><body><p>Test \xFF\xFE\xFD Invalid</p></body></html>";

    match extract_bytes(html, "broken.html") {
        Err(Error::ParseError(reason)) => assert!(reason.contains("UTF-8")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

/// Binary files are rejected
#[test]
fn binary_input_is_a_parse_error() {
    let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
    assert!(matches!(extract_bytes(gif, "pixel.gif"), Err(Error::ParseError(_))));
}

/// A byte order mark is honoured and stripped
#[test]
fn utf8_bom_is_stripped() {
    let html = b"\xEF\xBB\xBF<p>bommed words</p>";
    let result = extract_bytes(html, "bom.html").expect("extraction failed");

    let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["bommed", "words"]);
}
