//! Markdown Renderer
//!
//! Converts an element subtree to Markdown. Children are rendered first and
//! each element then applies its own formatting, chosen by [`ElementKind`].
//! Every node returns a [`Fragment`]: its Markdown text plus the images it
//! emitted, so images travel with the text in document order without any
//! shared accumulator.
//!
//! Whitespace normalization happens once, on the finished document, in
//! [`render`].

mod handlers;
pub mod tags;

use dom_query::{NodeRef, Selection};
use url::Url;

use crate::dom;
use crate::markdown;
use crate::options::ConversionOptions;
use crate::result::{ConversionResult, ImageRef};
use crate::url_utils;

pub use tags::{ElementKind, Emphasis};

/// Markdown for one node and the images it emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Rendered Markdown, not yet normalized.
    pub text: String,
    /// Images in the order their Markdown appears in `text`.
    pub images: Vec<ImageRef>,
}

impl Fragment {
    /// Text-only fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            images: Vec::new(),
        }
    }

    /// Appends `other` after this fragment.
    pub fn push(&mut self, other: Fragment) {
        self.text.push_str(&other.text);
        self.images.extend(other.images);
    }

    /// Replaces the text, keeping the images.
    #[must_use]
    pub fn map(self, f: impl FnOnce(&str) -> String) -> Self {
        Self {
            text: f(&self.text),
            images: self.images,
        }
    }

    /// Wraps the trimmed text in `before`/`after`.
    #[must_use]
    pub fn wrap_trimmed(self, before: &str, after: &str) -> Self {
        self.map(|t| format!("{before}{}{after}", t.trim()))
    }

    /// Wraps the trimmed text in `marker`, or empties the fragment when there
    /// is no text to wrap.
    #[must_use]
    pub fn wrap_non_empty(self, marker: &str) -> Self {
        if self.text.trim().is_empty() {
            return Self::default();
        }
        self.wrap_trimmed(marker, marker)
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        let mut out = Self::default();
        for fragment in iter {
            out.push(fragment);
        }
        out
    }
}

/// Renders `element` and its subtree to normalized Markdown.
///
/// # Example
///
/// ```rust
/// use save2md::{dom, render, ConversionOptions, ImageRef};
///
/// let doc = dom::parse(r#"<article><h1>T</h1><p>Hello <b>world</b></p><img src="/x.png" alt="A"></article>"#);
/// let result = render(&doc.select("article"), &ConversionOptions::with_base_uri("https://e.com/"));
///
/// assert!(result.markdown.contains("# T"));
/// assert!(result.markdown.contains("Hello **world**"));
/// assert_eq!(result.images, vec![ImageRef::new("https://e.com/x.png", "A")]);
/// ```
#[must_use]
pub fn render(element: &Selection, options: &ConversionOptions) -> ConversionResult {
    let Some(node) = element.nodes().first() else {
        return ConversionResult::default();
    };

    let fragment = Renderer::new(options).node(node);

    ConversionResult {
        markdown: markdown::normalize_document(&fragment.text),
        images: fragment.images,
    }
}

/// Recursive node renderer holding the per-call options.
#[derive(Debug, Clone)]
pub struct Renderer {
    include_images: bool,
    base: Option<Url>,
}

impl Renderer {
    /// Renderer for the given options; the base URI is parsed once here.
    #[must_use]
    pub fn new(options: &ConversionOptions) -> Self {
        Self {
            include_images: options.include_images,
            base: url_utils::parse_base(&options.base_uri),
        }
    }

    /// Renders a single node without final normalization. Code fences still
    /// carry [`markdown::FENCE_MARK`] until [`markdown::normalize_document`].
    #[must_use]
    pub fn node(&self, node: &NodeRef) -> Fragment {
        if node.is_text() {
            return Fragment::text(markdown::text_node_markdown(&node.text()));
        }
        match dom::node_tag(node) {
            Some(tag) => self.element(node, ElementKind::from_tag(&tag)),
            None => Fragment::default(),
        }
    }

    /// Concatenation of the rendered children.
    #[must_use]
    pub fn children(&self, node: &NodeRef) -> Fragment {
        node.children().iter().map(|child| self.node(child)).collect()
    }

    fn element(&self, node: &NodeRef, kind: ElementKind) -> Fragment {
        match kind {
            ElementKind::Suppressed => Fragment::default(),
            ElementKind::Heading(level) => {
                let prefix = format!("\n\n{} ", "#".repeat(level));
                self.children(node).wrap_trimmed(&prefix, "\n\n")
            }
            ElementKind::Paragraph | ElementKind::Figure => {
                self.children(node).wrap_trimmed("\n\n", "\n\n")
            }
            ElementKind::LineBreak => Fragment::text("\n"),
            ElementKind::HorizontalRule => Fragment::text("\n\n---\n\n"),
            ElementKind::Emphasis(emphasis) => {
                self.children(node).wrap_non_empty(emphasis.marker())
            }
            ElementKind::InlineCode => self.inline_code(node),
            ElementKind::Link => self.link(node),
            ElementKind::Image => self.image(node),
            ElementKind::FigureCaption => self.children(node).wrap_trimmed("\n*", "*\n"),
            ElementKind::List { ordered } => self.list(node, ordered),
            ElementKind::Blockquote => self.blockquote(node),
            ElementKind::Preformatted => self.code_block(node),
            ElementKind::Table => self.table(node),
            ElementKind::DefinitionList | ElementKind::Details => {
                self.children(node).map(|t| format!("\n\n{t}\n\n"))
            }
            ElementKind::Term => self.children(node).wrap_trimmed("\n**", "**\n"),
            ElementKind::Description => self.children(node).wrap_trimmed(": ", "\n"),
            ElementKind::Summary => self.children(node).wrap_trimmed("**", "**\n\n"),
            ElementKind::ListItem | ElementKind::Transparent => self.children(node),
        }
    }
}
