//! Byte-to-text decoding for HTML input.
//!
//! Rendered pages normally arrive as UTF-8 strings, but documents read from
//! disk may be in a legacy charset. The charset is taken from a byte order
//! mark, then from `<meta>` declarations, falling back to UTF-8. Malformed
//! input is rejected rather than decoded with replacement characters.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::error::{Error, Result};

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Bytes scanned for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// Determine the encoding of `html` and the length of any byte order mark.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(html) {
        return (encoding, bom_len);
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    let declared = [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .into_iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()));

    // A document that declares UTF-16 in ASCII-compatible bytes is not UTF-16.
    match declared {
        Some(encoding) if encoding.output_encoding() == UTF_8 => (UTF_8, 0),
        Some(encoding) => (encoding, 0),
        None => (UTF_8, 0),
    }
}

/// Decode HTML bytes to a string.
///
/// # Errors
///
/// Returns [`Error::ParseError`] when the bytes are malformed for the
/// detected encoding or contain a NUL character.
///
/// # Examples
///
/// ```
/// use rs_cewlio::encoding::decode_html;
///
/// let text = decode_html(b"<meta charset=\"latin1\"><p>Caf\xE9</p>")?;
/// assert!(text.contains("Café"));
/// assert!(decode_html(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR").is_err());
/// # Ok::<(), rs_cewlio::Error>(())
/// ```
pub fn decode_html(html: &[u8]) -> Result<String> {
    let (encoding, bom_len) = sniff_encoding(html);
    let body = &html[bom_len..];

    let decoded: Cow<'_, str> = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            Error::ParseError(format!("input is not valid {}", encoding.name()))
        })?;

    if let Some(offset) = decoded.find('\0') {
        return Err(Error::ParseError(format!(
            "NUL character at offset {offset}, input looks binary"
        )));
    }

    Ok(decoded.into_owned())
}
