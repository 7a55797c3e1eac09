//! Extraction orchestrator.
//!
//! Composes the pipeline on a private copy of the document:
//! clone, [`filter`], [`locate`], [`render`], then prepend the header block.

use chrono::{NaiveDate, Utc};

use crate::dom::{self, Document};
use crate::encoding;
use crate::filter::filter_document;
use crate::locate::locate;
use crate::options::ConversionOptions;
use crate::render::render;
use crate::result::{Extraction, PageMeta};

/// Title used when the document has none.
pub const UNTITLED: &str = "Untitled";

impl PageMeta {
    /// Metadata of `doc` as served from `url`.
    ///
    /// The title is the trimmed `<title>` text, or [`UNTITLED`].
    #[must_use]
    pub fn from_document(doc: &Document, url: impl Into<String>) -> Self {
        let raw = dom::text_content(&doc.select("title").first());
        let title = raw.trim();
        Self {
            title: if title.is_empty() { UNTITLED } else { title }.to_string(),
            url: url.into(),
        }
    }
}

/// Header block placed above the article body.
#[must_use]
pub fn header(page: &PageMeta, date: NaiveDate) -> String {
    format!(
        "# {}\n\n> Source: {}\n> Saved: {}\n\n---\n\n",
        page.title,
        page.url,
        date.format("%Y-%m-%d")
    )
}

/// Extracts the main content of `doc` as a Markdown file body dated today (UTC).
///
/// `doc` is never modified.
#[must_use]
pub fn extract(doc: &Document, page: &PageMeta, options: &ConversionOptions) -> Extraction {
    extract_at(doc, page, options, Utc::now().date_naive())
}

/// [`extract`] with an explicit `Saved:` date.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use save2md::{dom, extract_at, ConversionOptions, PageMeta};
///
/// let doc = dom::parse("<body><p>Hello</p></body>");
/// let page = PageMeta { title: "T".into(), url: "https://e.com/".into() };
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
///
/// let out = extract_at(&doc, &page, &ConversionOptions::default(), date);
/// assert_eq!(out.markdown, "# T\n\n> Source: https://e.com/\n> Saved: 2024-05-01\n\n---\n\nHello");
/// ```
#[must_use]
pub fn extract_at(
    doc: &Document,
    page: &PageMeta,
    options: &ConversionOptions,
    date: NaiveDate,
) -> Extraction {
    let working = dom::clone_document(doc);
    let root = filter_document(&working);
    let content = locate(&root);
    log::debug!(
        "rendering <{}> for {:?}",
        dom::tag_name(&content).unwrap_or_default(),
        page.url
    );
    let body = render(&content, options);

    Extraction {
        markdown: header(page, date) + &body.markdown,
        title: page.title.clone(),
        url: page.url.clone(),
        images: body.images,
    }
}

/// Parses `html` and extracts it, reading the title from `<title>` and
/// the URL from `options.base_uri`.
#[must_use]
pub fn extract_html(html: &str, options: &ConversionOptions) -> Extraction {
    let doc = dom::parse(html);
    let page = PageMeta::from_document(&doc, options.base_uri.clone());
    extract(&doc, &page, options)
}

/// [`extract_html`] over raw bytes in the page's declared charset.
#[must_use]
pub fn extract_bytes(html: &[u8], options: &ConversionOptions) -> Extraction {
    extract_html(&encoding::decode_html(html), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date")
    }

    #[test]
    fn test_page_meta_from_title() {
        let doc = dom::parse("<html><head><title>  My Post </title></head><body></body></html>");
        let page = PageMeta::from_document(&doc, "https://e.com/p");
        assert_eq!(page.title, "My Post");
        assert_eq!(page.url, "https://e.com/p");
    }

    #[test]
    fn test_page_meta_untitled() {
        let doc = dom::parse("<html><head><title> </title></head><body></body></html>");
        assert_eq!(PageMeta::from_document(&doc, "").title, UNTITLED);

        let doc = dom::parse("<p>no head</p>");
        assert_eq!(PageMeta::from_document(&doc, "").title, UNTITLED);
    }

    #[test]
    fn test_header_format() {
        let page = PageMeta {
            title: "T".to_string(),
            url: "https://e.com/".to_string(),
        };
        assert_eq!(
            header(&page, date()),
            "# T\n\n> Source: https://e.com/\n> Saved: 2025-01-31\n\n---\n\n"
        );
    }

    #[test]
    fn test_extract_leaves_caller_document_untouched() {
        let doc = dom::parse(
            r#"<html><body><div class="ad-banner">Buy</div><script>x()</script><p>Story</p></body></html>"#,
        );
        let before = doc.html().to_string();
        let page = PageMeta::from_document(&doc, "");

        let out = extract_at(&doc, &page, &ConversionOptions::default(), date());

        assert_eq!(doc.html().to_string(), before);
        assert!(out.markdown.ends_with("Story"));
        assert!(!out.markdown.contains("Buy"));
    }

    #[test]
    fn test_extract_carries_title_url_and_images() {
        let html = r#"<html><head><title>Gallery</title></head><body>
            <article><p>Look</p><img src="/a.png" alt="A"></article></body></html>"#;
        let out = extract_html(html, &ConversionOptions::with_base_uri("https://e.com/"));

        assert_eq!(out.title, "Gallery");
        assert_eq!(out.url, "https://e.com/");
        assert!(out.markdown.starts_with("# Gallery\n\n> Source: https://e.com/\n> Saved: "));
        assert!(out.markdown.contains("![A](https://e.com/a.png)"));
        assert_eq!(out.images.len(), 1);
    }

    #[test]
    fn test_extract_bytes_decodes_charset() {
        let html = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9</title></head>\
                     <body><p>Cr\xE8me</p></body></html>";
        let out = extract_bytes(html, &ConversionOptions::default());
        assert_eq!(out.title, "Café");
        assert!(out.markdown.ends_with("Crème"));
    }

    #[test]
    fn test_extract_empty_page_has_header_only() {
        let page = PageMeta {
            title: UNTITLED.to_string(),
            url: String::new(),
        };
        let out = extract_at(&dom::parse(""), &page, &ConversionOptions::default(), date());
        assert_eq!(out.markdown, "# Untitled\n\n> Source: \n> Saved: 2025-01-31\n\n---\n\n");
        assert!(out.images.is_empty());
    }
}
