//! Result types for conversion and extraction output.

use serde::{Deserialize, Serialize};

/// An image discovered while rendering.
///
/// `src` is the resolved URL that also appears in the Markdown, so a later
/// pass can substitute it textually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    /// Resolved image URL (from `src`, `data-src` or `data-lazy-src`).
    pub src: String,

    /// Alt text, empty when the attribute is missing.
    pub alt: String,
}

impl ImageRef {
    /// Creates an image reference.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Output of rendering a single element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Normalized Markdown body.
    pub markdown: String,

    /// Images in document order, duplicates included.
    pub images: Vec<ImageRef>,
}

/// Document metadata read by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title as shown in the header line.
    pub title: String,

    /// Address of the page.
    pub url: String,
}

/// Output of a full page extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Header block followed by the rendered article body.
    pub markdown: String,

    /// Page title used in the header.
    pub title: String,

    /// Page URL used in the header.
    pub url: String,

    /// Images in document order, duplicates included.
    pub images: Vec<ImageRef>,
}
