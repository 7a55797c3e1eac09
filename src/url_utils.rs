//! URL Utility Functions
//!
//! Resolution of link and image URLs against the page's base URI, and the
//! link policy for hrefs that do not navigate anywhere.

use url::Url;

/// Parse a base URI, returning `None` for empty or relative input.
///
/// # Example
///
/// ```rust
/// use save2md::url_utils::parse_base;
///
/// assert!(parse_base("https://example.com/a/").is_some());
/// assert!(parse_base("").is_none());
/// assert!(parse_base("/relative").is_none());
/// ```
#[must_use]
pub fn parse_base(base_uri: &str) -> Option<Url> {
    let base_uri = base_uri.trim();
    if base_uri.is_empty() {
        return None;
    }
    Url::parse(base_uri).ok()
}

/// Resolve `raw` against `base`.
///
/// Falls back to `raw` unchanged when there is no usable base or the join
/// fails. Absolute URLs are normalized by the URL parser.
///
/// # Example
///
/// ```rust
/// use save2md::url_utils::{parse_base, resolve_url};
///
/// let base = parse_base("https://example.com/blog/post");
/// assert_eq!(resolve_url("../img/a.png", base.as_ref()), "https://example.com/img/a.png");
/// assert_eq!(resolve_url("/about", None), "/about");
/// ```
#[must_use]
pub fn resolve_url(raw: &str, base: Option<&Url>) -> String {
    let Some(base) = base else {
        return raw.to_string();
    };

    match base.join(raw) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => {
            log::trace!("keeping unresolvable url {raw:?}: {err}");
            raw.to_string()
        }
    }
}

/// Whether an `href` leads nowhere and should render as plain text.
///
/// Missing or empty hrefs, `javascript:` pseudo-URLs and a bare `#` qualify.
#[must_use]
pub fn is_inert_href(href: Option<&str>) -> bool {
    match href {
        None => true,
        Some(h) => h.is_empty() || h == "#" || h.starts_with("javascript:"),
    }
}
