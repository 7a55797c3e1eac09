//! Content Locator
//!
//! Picks the single element most likely to hold the article body. The
//! allowlist in [`CONTENT_SELECTORS`] is tried first; when none of its matches
//! carries enough text, generic containers are scored and the best one wins.
//! When nothing qualifies the body is returned, so the result is never empty.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{NEGATIVE_CLASS, POSITIVE_CLASS};
use crate::selector::content::{is_candidate_container, CONTENT_SELECTORS, HEADING_SELECTOR};
use crate::selector::{self, utils};

/// Trimmed text an allowlisted container must exceed to be accepted.
pub const ALLOWLIST_MIN_TEXT: usize = 200;

/// Trimmed text below which a scored candidate is discarded.
pub const CANDIDATE_MIN_TEXT: usize = 100;

const PARAGRAPH_WEIGHT: f64 = 3.0;
const HEADING_WEIGHT: f64 = 2.0;
const IMAGE_WEIGHT: f64 = 1.0;
const POSITIVE_CLASS_BONUS: f64 = 10.0;
const NEGATIVE_CLASS_PENALTY: f64 = 20.0;

/// Returns the element judged to contain the main content under `root`.
///
/// # Example
///
/// ```rust
/// use save2md::{dom, locate};
///
/// let doc = dom::parse("<body><span>tiny</span></body>");
/// let found = locate(&dom::document_element(&doc));
/// assert_eq!(dom::tag_name(&found), Some("body".to_string()));
/// ```
#[must_use]
pub fn locate<'a>(root: &Selection<'a>) -> Selection<'a> {
    if let Some(found) = find_allowlisted(root) {
        return found;
    }
    if let Some(found) = find_best_scored(root) {
        return found;
    }
    log::debug!("no content container qualified; using body");
    dom::body_or_self(root)
}

/// First allowlist match (selector order, then document order) with more than
/// [`ALLOWLIST_MIN_TEXT`] characters of trimmed text.
///
/// Only the first match of each selector is considered.
#[must_use]
pub fn find_allowlisted<'a>(root: &Selection<'a>) -> Option<Selection<'a>> {
    CONTENT_SELECTORS.iter().find_map(|css| {
        let el = selector::select_first_css(root, css)?;
        if dom::trimmed_text_len(&el) > ALLOWLIST_MIN_TEXT {
            log::debug!("content located by selector {css:?}");
            Some(el)
        } else {
            None
        }
    })
}

/// Highest-scoring generic container, if any scores above zero.
///
/// Candidates are visited in document order and a later candidate replaces
/// the current best only with a strictly greater score.
#[must_use]
pub fn find_best_scored<'a>(root: &Selection<'a>) -> Option<Selection<'a>> {
    let mut best: Option<Selection<'a>> = None;
    let mut best_score = 0.0;

    for candidate in selector::query_all(root, is_candidate_container) {
        let Some(score) = score_candidate(&candidate) else {
            continue;
        };
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    if best.is_some() {
        log::debug!("content located by score {best_score:.2}");
    }
    best
}

/// Score of a container, or `None` when its trimmed text is shorter than
/// [`CANDIDATE_MIN_TEXT`].
///
/// `3·p + 2·headings + 1·img + ln(text length)`, plus 10 when the class or id
/// names an article-like region and minus 20 for sidebars, menus, comments
/// and widgets.
#[must_use]
pub fn score_candidate(el: &Selection) -> Option<f64> {
    let text_len = dom::trimmed_text_len(el);
    if text_len < CANDIDATE_MIN_TEXT {
        return None;
    }

    let paragraphs = el.select("p").length() as f64;
    let headings = el.select(HEADING_SELECTOR).length() as f64;
    let images = el.select("img").length() as f64;

    let mut score =
        PARAGRAPH_WEIGHT * paragraphs + HEADING_WEIGHT * headings + IMAGE_WEIGHT * images;

    let names = utils::class_and_id(el);
    if NEGATIVE_CLASS.is_match(&names) {
        score -= NEGATIVE_CLASS_PENALTY;
    }
    if POSITIVE_CLASS.is_match(&names) {
        score += POSITIVE_CLASS_BONUS;
    }
    score += (text_len as f64).ln();

    Some(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_body(body: &str) -> dom::Document {
        dom::parse(&format!("<html><head></head><body>{body}</body></html>"))
    }

    #[test]
    fn test_prefers_article_with_enough_text() {
        let body = format!(
            "<article>{}</article><div class=\"content\">{}</div>",
            "<p>Article content here. </p>".repeat(20),
            "<p>Other scored content here. </p>".repeat(30),
        );
        let doc = doc_with_body(&body);

        let found = locate(&dom::document_element(&doc));
        assert_eq!(dom::tag_name(&found), Some("article".to_string()));
    }

    #[test]
    fn test_prefers_role_main() {
        let body = format!(
            r#"<div role="main">{}</div><div><p>Sidebar</p></div>"#,
            "<p>Main content paragraph. </p>".repeat(20)
        );
        let doc = doc_with_body(&body);

        let found = locate(&dom::document_element(&doc));
        assert_eq!(utils::attr(&found, "role"), "main");
    }

    #[test]
    fn test_short_article_falls_through_to_next_selector() {
        let body = format!(
            r#"<article>short</article><div class="entry-content">{}</div>"#,
            "<p>Entry text. </p>".repeat(30)
        );
        let doc = doc_with_body(&body);

        let found = locate(&dom::document_element(&doc));
        assert_eq!(utils::class(&found), "entry-content");
    }

    #[test]
    fn test_only_first_match_per_selector() {
        let body = format!(
            "<article>tiny</article><article>{}</article>",
            "<p>Second article text. </p>".repeat(20)
        );
        let doc = doc_with_body(&body);

        // The long second article is never looked at; scoring picks it instead.
        let found = locate(&dom::document_element(&doc));
        assert_eq!(dom::tag_name(&found), Some("article".to_string()));
        assert!(dom::trimmed_text_len(&found) > 200);
    }

    #[test]
    fn test_scored_fallback_picks_content_div() {
        let long_text = "Word ".repeat(50);
        let body = format!(
            r#"<div class="sidebar"><p>Short</p></div><div class="article-text">{}</div>"#,
            format!("<p>{long_text}</p>").repeat(5)
        );
        let doc = doc_with_body(&body);

        let found = locate(&dom::document_element(&doc));
        assert_eq!(utils::class(&found), "article-text");
    }

    #[test]
    fn test_penalizes_sidebar() {
        let content = "<p>Paragraph number one. </p>".repeat(10);
        let body = format!(
            r#"<div class="sidebar">{content}</div><div class="main-content">{content}</div>"#
        );
        let doc = doc_with_body(&body);

        let found = locate(&dom::document_element(&doc));
        assert_eq!(utils::class(&found), "main-content");
    }

    #[test]
    fn test_falls_back_to_body() {
        let doc = doc_with_body("<span>tiny</span>");

        let found = locate(&dom::document_element(&doc));
        assert_eq!(dom::tag_name(&found), Some("body".to_string()));
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let content = "<p>Same text in both. </p>".repeat(8);
        let body = format!(r#"<section id="one">{content}</section><section id="two">{content}</section>"#);
        let doc = doc_with_body(&body);

        let found = find_best_scored(&doc.select("body")).expect("candidate");
        assert_eq!(utils::id(&found), "one");
    }

    #[test]
    fn test_score_formula() {
        let doc = dom::parse(&format!(
            r#"<div class="post"><h2>Title</h2><p>{}</p><p>more</p><img src="a.png"></div>"#,
            "x".repeat(120)
        ));
        let div = doc.select("div");
        let text_len = dom::trimmed_text_len(&div) as f64;

        let expected = 3.0 * 2.0 + 2.0 * 1.0 + 1.0 + 10.0 + text_len.ln();
        let score = score_candidate(&div).expect("long enough");
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_short_candidate_has_no_score() {
        let doc = dom::parse("<div><p>short</p></div>");
        assert!(score_candidate(&doc.select("div")).is_none());
    }
}
