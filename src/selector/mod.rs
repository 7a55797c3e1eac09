//! Selector Infrastructure
//!
//! Two kinds of selectors drive the filter and the locator:
//!
//! - CSS selector strings (the ad denylist, the content allowlist), compiled
//!   on use. A string that fails to compile is logged and skipped; it never
//!   aborts a pass.
//! - [`Rule`] predicates for tests CSS cannot express (inline style parsing,
//!   "not inside an article" checks).

use dom_query::{Matcher, Selection};

pub mod content;
pub mod junk;
pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for all descendants of `root` matching the rule, in document order.
///
/// # Example
///
/// ```rust
/// use save2md::selector::{self, utils};
/// use save2md::dom;
///
/// let doc = dom::parse(r#"<div><p class="item">1</p><p class="item">2</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_item_class(sel: &dom_query::Selection) -> bool {
///     utils::class(sel).contains("item")
/// }
///
/// let results = selector::query_all(&root, has_item_class);
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

/// All descendants of `root` matching a CSS selector, in document order.
///
/// Returns `None` when the selector does not compile; the caller skips it.
#[must_use]
pub fn select_css<'a>(root: &Selection<'a>, css: &str) -> Option<Vec<Selection<'a>>> {
    match Matcher::new(css) {
        Ok(matcher) => Some(
            root.select_matcher(&matcher)
                .nodes()
                .iter()
                .map(|node| Selection::from(*node))
                .collect(),
        ),
        Err(err) => {
            log::warn!("skipping unsupported selector {css:?}: {err:?}");
            None
        }
    }
}

/// First descendant of `root` matching a CSS selector.
#[must_use]
pub fn select_first_css<'a>(root: &Selection<'a>, css: &str) -> Option<Selection<'a>> {
    select_css(root, css).and_then(|matches| matches.into_iter().next())
}
