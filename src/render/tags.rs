//! Element kinds understood by the renderer.
//!
//! Every tag maps to exactly one [`ElementKind`]. Tags without a dedicated
//! rule map to [`ElementKind::Transparent`] and render as their children, so
//! unknown markup is unwrapped rather than dropped.

/// Tags whose subtree never produces text.
pub static SUPPRESSED_TAGS: [&str; 8] = [
    "script", "style", "noscript", "button", "input", "form", "select", "textarea",
];

/// Inline wrappers and the marker placed on both sides of their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `strong`, `b`
    Bold,
    /// `em`, `i`
    Italic,
    /// `del`, `s`, `strike`
    Strike,
    /// `mark`
    Highlight,
}

impl Emphasis {
    /// Marker written before and after the content.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Strike => "~~",
            Self::Highlight => "==",
        }
    }
}

/// Closed set of rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Interactive or non-renderable element; renders nothing.
    Suppressed,
    /// `h1`..`h6` with its level.
    Heading(usize),
    Paragraph,
    LineBreak,
    HorizontalRule,
    Emphasis(Emphasis),
    InlineCode,
    Link,
    Image,
    Figure,
    FigureCaption,
    /// `ul` (`false`) or `ol` (`true`).
    List { ordered: bool },
    ListItem,
    Blockquote,
    Preformatted,
    Table,
    DefinitionList,
    Term,
    Description,
    Details,
    Summary,
    /// Generic containers and any unrecognized tag.
    Transparent,
}

impl ElementKind {
    /// Kind for a lower-case tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if SUPPRESSED_TAGS.contains(&tag) {
            return Self::Suppressed;
        }
        match tag {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "br" => Self::LineBreak,
            "hr" => Self::HorizontalRule,
            "strong" | "b" => Self::Emphasis(Emphasis::Bold),
            "em" | "i" => Self::Emphasis(Emphasis::Italic),
            "del" | "s" | "strike" => Self::Emphasis(Emphasis::Strike),
            "mark" => Self::Emphasis(Emphasis::Highlight),
            "code" => Self::InlineCode,
            "a" => Self::Link,
            "img" => Self::Image,
            "figure" => Self::Figure,
            "figcaption" => Self::FigureCaption,
            "ul" => Self::List { ordered: false },
            "ol" => Self::List { ordered: true },
            "li" => Self::ListItem,
            "blockquote" => Self::Blockquote,
            "pre" => Self::Preformatted,
            "table" => Self::Table,
            "dl" => Self::DefinitionList,
            "dt" => Self::Term,
            "dd" => Self::Description,
            "details" => Self::Details,
            "summary" => Self::Summary,
            // div, section, article, main, header, footer, aside, span, time,
            // small, sup, sub, abbr and everything else
            _ => Self::Transparent,
        }
    }
}
