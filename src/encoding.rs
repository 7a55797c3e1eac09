//! Byte input decoding.
//!
//! Saved pages and piped input arrive as raw bytes. The charset comes from a
//! byte order mark when present, otherwise from the first `<meta>` charset
//! declaration in the head of the document, otherwise UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// `<meta charset=..>` or `<meta http-equiv=.. content="..; charset=..">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("valid regex")
});

/// Label declared by the first `<meta>` charset in `html`, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    META_CHARSET
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

/// Encoding of `html`: BOM, then declared charset, then UTF-8.
///
/// Unknown labels are ignored. Labels map through the WHATWG table, so
/// `ISO-8859-1` yields `windows-1252`.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    match declared_charset(html) {
        Some(label) => Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
            log::debug!("unknown charset label {label:?}, assuming UTF-8");
            UTF_8
        }),
        None => UTF_8,
    }
}

/// Decode `html` to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use save2md::encoding::decode_html;
///
/// let page = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_html(page).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced malformed {} sequences", used.name());
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_by_default() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn meta_charset_attribute() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn latin1_label_maps_to_windows_1252() {
        let html = br#"<meta charset='ISO-8859-1'>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_content_type() {
        let html = br#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; CHARSET=Shift_JIS">"#;
        assert_eq!(declared_charset(html).as_deref(), Some("Shift_JIS"));
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn unquoted_charset() {
        assert_eq!(declared_charset(b"<meta charset=utf-8>").as_deref(), Some("utf-8"));
    }

    #[test]
    fn bom_wins_over_declaration() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252"><p>x</p>"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(detect_encoding(br#"<meta charset="klingon">"#), UTF_8);
    }

    #[test]
    fn declaration_outside_window_ignored() {
        let mut html = vec![b' '; SNIFF_WINDOW];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(declared_charset(&html), None);
    }

    #[test]
    fn decode_windows_1252_quotes() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hello\x94</p>";
        assert!(decode_html(html).contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn decode_invalid_utf8_is_lossy() {
        let out = decode_html(b"<p>Test \xFF\xFE ok</p>");
        assert!(out.contains("Test"));
        assert!(out.contains('\u{FFFD}'));
        assert!(out.contains("ok"));
    }
}
