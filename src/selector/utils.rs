//! Utility functions for selector pattern matching
//!
//! Helpers used throughout selector rules for attribute access and tag checks.
//! Missing attributes read as the empty string so rules can chain string tests
//! without unwrapping.

use crate::dom;
use dom_query::Selection;

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Lower-cased `"class id"` string used for class/id word tests.
///
/// # Example
///
/// ```rust
/// use save2md::selector::utils;
/// use save2md::dom;
///
/// let doc = dom::parse(r#"<div id="Main" class="Post-Body">text</div>"#);
/// let div = doc.select("div");
///
/// assert_eq!(utils::class_and_id(&div), "post-body main");
/// ```
#[must_use]
pub fn class_and_id(sel: &Selection) -> String {
    format!("{} {}", class(sel), id(sel)).to_lowercase()
}

// === Element Type Checks ===

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

/// Check if element is one of the specified tags
///
/// # Example
///
/// ```rust
/// use save2md::selector::utils;
/// use save2md::dom;
///
/// let doc = dom::parse("<article>content</article>");
/// let article = doc.select("article");
///
/// assert!(utils::is_one_of_tags(&article, &["article", "div", "section"]));
/// assert!(!utils::is_one_of_tags(&article, &["div", "span", "p"]));
/// ```
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}
