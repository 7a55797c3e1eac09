//! # save2md
//!
//! Save the readable part of a web page as a Markdown file.
//!
//! The pipeline runs on a private copy of the parsed page:
//!
//! 1. [`filter`] strips ads, trackers, consent banners, hidden elements and
//!    stray navigation;
//! 2. [`locate`] picks the element holding the article body;
//! 3. [`render`] turns that element into Markdown and lists its images;
//! 4. [`extract`] adds the `# Title` / `> Source:` / `> Saved:` header.
//!
//! ## Quick Start
//!
//! ```rust
//! use save2md::{extract_html, ConversionOptions};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav>Home | About</nav><article><p>Main content here.</p></article></body></html>"#;
//!
//! let page = extract_html(html, &ConversionOptions::with_base_uri("https://example.com/post"));
//! assert_eq!(page.title, "My Article");
//! assert!(page.markdown.ends_with("Main content here\\."));
//! ```
//!
//! ## Saving
//!
//! [`sanitize_filename`] derives the file name from the title and
//! [`embed_images`] optionally inlines images as `data:` URIs. The
//! `save2md` binary wires these together with [`Settings`].

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector infrastructure and the ad/content selector lists.
pub mod selector;

/// Junk filter: removal of non-content elements.
pub mod filter;

/// Content locator: choice of the main content element.
pub mod locate;

/// Markdown renderer.
pub mod render;

/// Markdown escaping, whitespace normalization and pipe tables.
pub mod markdown;

/// URL resolution against the page's base URI.
pub mod url_utils;

/// Filename derivation from page titles.
pub mod filename;

/// Inlining of images as base64 data URIs.
pub mod embed;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use embed::embed_images;
pub use error::{Error, Result};
pub use extract::{extract, extract_at, extract_bytes, extract_html, header, UNTITLED};
pub use filename::{markdown_filename, sanitize_filename};
pub use filter::{filter, filter_document};
pub use locate::locate;
pub use options::{ConversionOptions, ImageMode, Settings};
pub use render::render;
pub use result::{ConversionResult, Extraction, ImageRef, PageMeta};
