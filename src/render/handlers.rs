//! Element handlers with more than a wrap: links, images, code, lists,
//! blockquotes and tables.

use dom_query::{NodeRef, Selection};

use super::{Fragment, Renderer};
use crate::dom;
use crate::markdown;
use crate::patterns::CODE_LANGUAGE;
use crate::result::ImageRef;
use crate::selector::utils;
use crate::url_utils;

/// Image source attributes, most preferred first.
const IMAGE_SOURCE_ATTRS: [&str; 3] = ["src", "data-src", "data-lazy-src"];

impl Renderer {
    /// Raw text content in backticks; the subtree is not rendered.
    pub(super) fn inline_code(&self, node: &NodeRef) -> Fragment {
        let raw = node.text();
        let code = raw.trim();
        if code.is_empty() {
            return Fragment::default();
        }
        Fragment::text(format!("`{code}`"))
    }

    /// `[text](href)`, bare text for inert hrefs, nothing without text.
    pub(super) fn link(&self, node: &NodeRef) -> Fragment {
        let children = self.children(node);
        if children.text.trim().is_empty() {
            return Fragment::default();
        }

        let href = node.attr("href").map(|h| h.to_string());
        if url_utils::is_inert_href(href.as_deref()) {
            return children.map(|t| t.trim().to_string());
        }

        let resolved = url_utils::resolve_url(href.as_deref().unwrap_or_default(), self.base.as_ref());
        children.map(|t| format!("[{}]({resolved})", t.trim()))
    }

    /// `![alt](src)` and the matching [`ImageRef`].
    pub(super) fn image(&self, node: &NodeRef) -> Fragment {
        if !self.include_images {
            return Fragment::default();
        }
        let Some(raw_src) = IMAGE_SOURCE_ATTRS
            .iter()
            .find_map(|name| dom::non_empty_attr(node, name))
        else {
            return Fragment::default();
        };

        let src = url_utils::resolve_url(&raw_src, self.base.as_ref());
        let alt = node.attr("alt").map(|a| a.to_string()).unwrap_or_default();

        Fragment {
            text: format!("![{alt}]({src})"),
            images: vec![ImageRef::new(src, alt)],
        }
    }

    /// Bulleted or numbered list over the direct `<li>` children.
    ///
    /// Empty items are skipped and do not consume a number. Continuation
    /// lines of an item are indented by two spaces.
    pub(super) fn list(&self, node: &NodeRef, ordered: bool) -> Fragment {
        let mut items = Vec::new();
        let mut images = Vec::new();
        let mut number = 1;

        for li in dom::child_elements_named(node, &["li"]) {
            let item = self.node(&li);
            let content = item.text.trim();
            if content.is_empty() {
                continue;
            }

            let bullet = if ordered {
                format!("{number}. ")
            } else {
                "- ".to_string()
            };
            items.push(format!("{bullet}{}", content.replace('\n', "\n  ")));
            images.extend(item.images);
            number += 1;
        }

        Fragment {
            text: format!("\n\n{}\n\n", items.join("\n")),
            images,
        }
    }

    /// Every line of the trimmed content prefixed with `> `.
    pub(super) fn blockquote(&self, node: &NodeRef) -> Fragment {
        self.children(node).map(|t| {
            let quoted: Vec<String> = t.trim().split('\n').map(|line| format!("> {line}")).collect();
            format!("\n\n{}\n\n", quoted.join("\n"))
        })
    }

    /// Fenced code block from the raw text of the nested `<code>` (or the
    /// `<pre>` itself when there is none). The language comes from the
    /// `<code>` class only.
    pub(super) fn code_block(&self, node: &NodeRef) -> Fragment {
        let pre = Selection::from(*node);
        let code = pre.select("code").first();
        let source = if code.exists() { &code } else { &pre };

        let text = dom::text_content(source);
        let lang = code_language(&code).unwrap_or_default();

        Fragment::text(markdown::fenced_code(&lang, text.trim()))
    }

    /// GitHub Flavored Markdown pipe table built from rendered cells.
    pub(super) fn table(&self, node: &NodeRef) -> Fragment {
        let table = Selection::from(*node);
        let mut rows = Vec::new();
        let mut images = Vec::new();

        for tr in own_rows(&table) {
            let Some(tr_node) = tr.nodes().first() else {
                continue;
            };
            let mut row = Vec::new();
            for cell in dom::child_elements_named(tr_node, &["th", "td"]) {
                let rendered = self.node(&cell);
                row.push(markdown::table_cell(&rendered.text));
                images.extend(rendered.images);
            }
            rows.push(row);
        }

        Fragment {
            text: format!("\n\n{}\n\n", markdown::pipe_table(rows)),
            images,
        }
    }
}

/// `language-xxx` / `lang-xxx` from an element's class attribute.
fn code_language(sel: &Selection) -> Option<String> {
    if !sel.exists() {
        return None;
    }
    let class = utils::class(sel);
    CODE_LANGUAGE
        .captures(&class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// `<tr>` elements belonging to `table` itself, not to nested tables.
fn own_rows<'a>(table: &Selection<'a>) -> Vec<Selection<'a>> {
    table
        .select("tr")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|tr| {
            dom::find_ancestor(tr, |a| utils::is_tag(a, "table"))
                .is_some_and(|owner| dom::same_node(&owner, table))
        })
        .collect()
}
