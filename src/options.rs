//! Configuration for conversion and for the saving host.
//!
//! `ConversionOptions` controls the renderer. `Settings` is the persisted
//! user preference object the host reads before each save.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options for rendering an element to Markdown.
///
/// # Example
///
/// ```rust
/// use save2md::ConversionOptions;
///
/// let options = ConversionOptions {
///     base_uri: "https://example.com/posts/".to_string(),
///     ..ConversionOptions::default()
/// };
/// assert!(options.include_images);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Emit `![alt](src)` for images and collect them in the result.
    ///
    /// Default: `true`
    pub include_images: bool,

    /// Absolute URL that relative `href`/`src` values are resolved against.
    ///
    /// An empty or unparseable base leaves relative URLs untouched.
    ///
    /// Default: `""`
    pub base_uri: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            include_images: true,
            base_uri: String::new(),
        }
    }
}

impl ConversionOptions {
    /// Options for a page at `base_uri` with images included.
    #[must_use]
    pub fn with_base_uri(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Self::default()
        }
    }
}

/// How image references are written into the saved file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    /// Keep the resolved remote URL.
    #[default]
    Reference,
    /// Fetch each image and inline it as a base64 `data:` URI.
    DataUri,
}

/// Persisted user settings.
///
/// Stored as JSON with camelCase keys, e.g.
/// `{"includeImages": true, "imageMode": "datauri"}`. Missing keys take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Include images in saved pages.
    ///
    /// Default: `false`
    pub include_images: bool,

    /// How images are referenced when included.
    ///
    /// Default: [`ImageMode::Reference`]
    pub image_mode: ImageMode,
}

impl Settings {
    /// Parses settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`] when the JSON is malformed or a value has
    /// the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Settings`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Whether the data-URI embedding pass should run.
    #[must_use]
    pub fn embeds_images(&self) -> bool {
        self.include_images && self.image_mode == ImageMode::DataUri
    }

    /// Conversion options for a page at `base_uri` under these settings.
    #[must_use]
    pub fn conversion_options(&self, base_uri: &str) -> ConversionOptions {
        ConversionOptions {
            include_images: self.include_images,
            base_uri: base_uri.to_string(),
        }
    }
}
