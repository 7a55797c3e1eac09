//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate giving the rest of the crate a small,
//! consistent vocabulary for reading and pruning trees: attribute access,
//! lower-cased tag names, text content, ancestor walks and node identity.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep-copy a document.
///
/// The copy shares nothing with the original, so pruning it leaves the
/// caller's tree untouched.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// The `<html>` element of a document, or the empty selection.
#[inline]
#[must_use]
pub fn document_element(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Attribute of a single node, treating an empty value as missing.
///
/// Mirrors the `el.getAttribute(x) || fallback` idiom: `src=""` falls
/// through to the next candidate.
#[must_use]
pub fn non_empty_attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name)
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag)
}

/// Lower-cased tag name of an element node.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether two selections start at the same node.
#[must_use]
pub fn same_node(a: &Selection, b: &Selection) -> bool {
    match (a.nodes().first(), b.nodes().first()) {
        (Some(x), Some(y)) => x.id == y.id,
        _ => false,
    }
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Length of the trimmed text content in UTF-16 code units, as browsers
/// report `textContent.length`.
#[must_use]
pub fn trimmed_text_len(sel: &Selection) -> usize {
    sel.text().trim().encode_utf16().count()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Nearest ancestor (excluding `sel` itself) accepted by `pred`.
#[must_use]
pub fn find_ancestor<'a>(
    sel: &Selection<'a>,
    pred: impl Fn(&Selection<'a>) -> bool,
) -> Option<Selection<'a>> {
    let mut current = parent(sel);
    while current.exists() {
        if pred(&current) {
            return Some(current);
        }
        current = parent(&current);
    }
    None
}

/// Direct element children with the given tag, in document order.
#[must_use]
pub fn child_elements_named<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| node_tag(child).is_some_and(|t| tags.contains(&t.as_str())))
        .collect()
}

/// The `<body>` under `root`, or `root` itself when there is none.
#[must_use]
pub fn body_or_self<'a>(root: &Selection<'a>) -> Selection<'a> {
    if tag_name(root).as_deref() == Some("body") {
        return root.clone();
    }
    let body = root.select("body");
    if body.exists() {
        body.first()
    } else {
        root.clone()
    }
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
