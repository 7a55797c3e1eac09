//! Content Selectors
//!
//! Where the article body usually lives. Semantic containers come first, then
//! common CMS class/id conventions, then wiki and rendered-markdown bodies.

use crate::selector::utils::is_one_of_tags;
use dom_query::Selection;

/// Allowlist of article containers; earlier entries win.
pub static CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role='main']",
    "main",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".article-body",
    ".post-body",
    ".story-body",
    ".content-body",
    "#content",
    "#main-content",
    "#article-body",
    ".markdown-body",
    ".mw-parser-output",
];

/// Generic containers considered by the scored fallback.
pub static CANDIDATE_TAGS: &[&str] = &["div", "section", "article", "main", "td"];

/// Heading tags counted by the scored fallback.
pub static HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// Element eligible for the scored fallback.
#[must_use]
pub fn is_candidate_container(sel: &Selection) -> bool {
    is_one_of_tags(sel, CANDIDATE_TAGS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::selector;

    #[test]
    fn test_semantic_containers_first() {
        assert_eq!(CONTENT_SELECTORS[0], "article");
        assert_eq!(CONTENT_SELECTORS[1], "[role='main']");
        assert_eq!(CONTENT_SELECTORS[2], "main");
    }

    #[test]
    fn test_content_selectors_all_compile() {
        let doc = dom::parse("<div><p>x</p></div>");
        let root = doc.select("div");

        for css in CONTENT_SELECTORS {
            assert!(selector::select_css(&root, css).is_some(), "{css}");
        }
    }

    #[test]
    fn test_candidate_tags() {
        let doc = dom::parse("<table><tr><td>x</td></tr></table><section>y</section><p>z</p>");

        assert!(is_candidate_container(&doc.select("td")));
        assert!(is_candidate_container(&doc.select("section")));
        assert!(!is_candidate_container(&doc.select("p")));
    }
}
