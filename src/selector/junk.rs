//! Junk Patterns
//!
//! Identifies advertising, tracking, consent and other non-article elements
//! removed before content location. The denylist is data (CSS selector
//! strings); the remaining checks are [`Rule`](super::Rule) predicates.

use crate::dom;
use crate::selector::utils::{attr, is_one_of_tags, tag};
use dom_query::Selection;

/// Ad, widget and overlay selectors, applied in order.
///
/// Class and id tests are substring matches (`*=`) so compound names such as
/// `top-ad-slot` or `cookie-consent-banner` are caught.
pub static AD_SELECTORS: &[&str] = &[
    // Generic ad containers
    "[class*='ad-']",
    "[class*='ad_']",
    "[class*='ads-']",
    "[class*='ads_']",
    "[class*='advert']",
    "[class*='sponsor']",
    "[class*='promoted']",
    "[id*='ad-']",
    "[id*='ad_']",
    "[id*='ads-']",
    "[id*='ads_']",
    "[id*='advert']",
    "[id*='sponsor']",
    // Google ads
    "ins.adsbygoogle",
    "[id^='google_ads']",
    "[id^='div-gpt-ad']",
    "[data-ad-slot]",
    "[data-ad-client]",
    "[data-adunit]",
    // Ad networks and recommendation widgets
    "[class*='outbrain']",
    "[class*='taboola']",
    "[id*='outbrain']",
    "[id*='taboola']",
    "[class*='mgid']",
    // Social sharing widgets
    "[class*='share-bar']",
    "[class*='social-share']",
    "[class*='sharing-buttons']",
    // Cookie banners and overlays
    "[class*='cookie-banner']",
    "[class*='cookie-consent']",
    "[id*='cookie']",
    "[class*='gdpr']",
    "[id*='gdpr']",
    // Newsletter and signup popups
    "[class*='newsletter-popup']",
    "[class*='subscribe-modal']",
    "[class*='signup-prompt']",
    // Labelled ads
    "[aria-label='advertisement']",
    "[aria-label='Advertisement']",
    // Ad-serving and social embed iframes
    "iframe[src*='doubleclick']",
    "iframe[src*='googlesyndication']",
    "iframe[src*='facebook.com/plugins']",
    "iframe[src*='platform.twitter']",
];

/// Tags that never carry article content.
pub static NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "link", "meta", "svg"];

/// Containers inside which a `<nav>` is treated as a table of contents.
pub static ARTICLE_CONTAINER_TAGS: &[&str] = &["article", "main"];

/// Element hidden by its own inline `style` attribute.
///
/// Only the `style` attribute is consulted; stylesheets and computed style
/// are not. Hidden means `display: none`, `visibility: hidden` or
/// `opacity: 0`.
#[must_use]
pub fn is_hidden_by_inline_style(sel: &Selection) -> bool {
    if !dom::has_attribute(sel, "style") {
        return false;
    }
    inline_style_hides(&attr(sel, "style"))
}

/// Whether a `style` attribute value hides its element.
#[must_use]
pub fn inline_style_hides(style: &str) -> bool {
    style.split(';').any(|declaration| {
        let Some((property, value)) = declaration.split_once(':') else {
            return false;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.to_ascii_lowercase();
        let value = value.trim().trim_end_matches("!important").trim();

        match property.as_str() {
            "display" => value == "none",
            "visibility" => value == "hidden",
            "opacity" => value.parse::<f64>().is_ok_and(|v| v == 0.0),
            _ => false,
        }
    })
}

/// Script, style and other non-content tags.
#[must_use]
pub fn is_non_content_tag(sel: &Selection) -> bool {
    is_one_of_tags(sel, NON_CONTENT_TAGS)
}

/// Whether `sel` is an article container (`<article>`, `<main>`, `role="main"`).
#[must_use]
pub fn is_article_container(sel: &Selection) -> bool {
    is_one_of_tags(sel, ARTICLE_CONTAINER_TAGS) || attr(sel, "role") == "main"
}

/// A `<nav>` landmark outside any article container.
///
/// Navigation nested inside the article body is usually a table of contents
/// and is kept.
#[must_use]
pub fn is_off_article_nav(sel: &Selection) -> bool {
    tag(sel) == "nav" && dom::find_ancestor(sel, |a| is_article_container(a)).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_style_variants() {
        assert!(inline_style_hides("display:none"));
        assert!(inline_style_hides("color: red; DISPLAY: None !important"));
        assert!(inline_style_hides("visibility: hidden"));
        assert!(inline_style_hides("opacity: 0"));
        assert!(inline_style_hides("opacity:0.0"));
        assert!(!inline_style_hides("opacity: 0.5"));
        assert!(!inline_style_hides("display: block"));
        assert!(!inline_style_hides("visibility: visible"));
        assert!(!inline_style_hides("nonsense"));
        assert!(!inline_style_hides(""));
    }

    #[test]
    fn test_hidden_rule_requires_style_attribute() {
        let doc = dom::parse(r#"<div id="a" style="display:none">x</div><div id="b">y</div>"#);

        assert!(is_hidden_by_inline_style(&doc.select("#a")));
        assert!(!is_hidden_by_inline_style(&doc.select("#b")));
    }

    #[test]
    fn test_non_content_tags() {
        let doc = dom::parse("<body><svg></svg><noscript>n</noscript><p>p</p></body>");

        assert!(is_non_content_tag(&doc.select("svg")));
        assert!(is_non_content_tag(&doc.select("noscript")));
        assert!(!is_non_content_tag(&doc.select("p")));
    }

    #[test]
    fn test_nav_inside_article_containers_is_kept() {
        let doc = dom::parse(
            r#"<body>
                <nav id="site">menu</nav>
                <article><div><nav id="toc">toc</nav></div></article>
                <main><nav id="main-toc">toc</nav></main>
                <div role="main"><nav id="role-toc">toc</nav></div>
            </body>"#,
        );

        assert!(is_off_article_nav(&doc.select("#site")));
        assert!(!is_off_article_nav(&doc.select("#toc")));
        assert!(!is_off_article_nav(&doc.select("#main-toc")));
        assert!(!is_off_article_nav(&doc.select("#role-toc")));
    }

    #[test]
    fn test_ad_selectors_all_compile() {
        let doc = dom::parse("<div><p>x</p></div>");
        let root = doc.select("div");

        for css in AD_SELECTORS {
            assert!(crate::selector::select_css(&root, css).is_some(), "{css}");
        }
    }
}
