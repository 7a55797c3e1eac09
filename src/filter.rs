//! Junk Filter
//!
//! Prunes advertising, tracking, consent banners, hidden elements,
//! non-content tags and site navigation from a tree before the content
//! locator looks at it.
//!
//! The pass mutates the tree in place, so callers should hand it a disposable
//! copy (see [`dom::clone_document`]). The root passed in is never removed,
//! and running the filter twice removes nothing the first run left behind.

use dom_query::Selection;

use crate::dom;
use crate::selector::junk::{
    is_hidden_by_inline_style, is_non_content_tag, is_off_article_nav, AD_SELECTORS,
};
use crate::selector::{self, Rule};

/// Removes junk elements under `root` and returns `root`.
///
/// Stages, in order:
///
/// 1. every selector in [`AD_SELECTORS`] (selectors that fail to compile are
///    skipped);
/// 2. elements hidden by their inline `style`;
/// 3. `script`, `style`, `noscript`, `link`, `meta`, `svg`;
/// 4. `<nav>` elements not nested in `article`, `main` or `role="main"`.
///
/// # Example
///
/// ```rust
/// use save2md::{dom, filter};
///
/// let doc = dom::parse(r#"<body><div class="ad-banner">Buy</div><p>Story</p></body>"#);
/// let body = filter(&doc.select("body"));
///
/// assert!(doc.select(".ad-banner").is_empty());
/// assert_eq!(dom::text_content(&body), "Story".into());
/// ```
pub fn filter<'a>(root: &Selection<'a>) -> Selection<'a> {
    let mut ads = 0;
    for css in AD_SELECTORS {
        if let Some(matches) = selector::select_css(root, css) {
            ads += detach_all(root, &matches);
        }
    }

    let hidden = remove_matching(root, is_hidden_by_inline_style);
    let tags = remove_matching(root, is_non_content_tag);
    let navs = remove_matching(root, is_off_article_nav);

    log::debug!("junk filter removed {ads} ad, {hidden} hidden, {tags} non-content, {navs} nav elements");

    root.clone()
}

/// Runs [`filter`] over a whole document and returns its `<html>` element.
pub fn filter_document(doc: &dom::Document) -> Selection<'_> {
    filter(&dom::document_element(doc))
}

fn remove_matching(root: &Selection, rule: Rule) -> usize {
    detach_all(root, &selector::query_all(root, rule))
}

fn detach_all(root: &Selection, matches: &[Selection]) -> usize {
    let mut removed = 0;
    for el in matches {
        if dom::same_node(el, root) {
            continue;
        }
        dom::remove(el);
        removed += 1;
    }
    removed
}
