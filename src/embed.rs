//! Image embedding.
//!
//! Optional post-pass over a rendered document: every image is fetched once
//! and each occurrence of its URL in the Markdown is replaced by a base64
//! `data:` URI. Images that cannot be fetched keep their remote URL.

use std::collections::HashSet;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;
use crate::result::ImageRef;

/// Content type assumed when the server does not send one.
pub const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Image bytes as served.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedImage {
    /// Response body.
    pub bytes: Vec<u8>,
    /// `Content-Type` header value, if any.
    pub content_type: Option<String>,
}

impl FetchedImage {
    /// `data:{content-type};base64,{payload}`.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        let content_type = self
            .content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        let mut uri = String::with_capacity(content_type.len() + 13 + self.bytes.len() * 4 / 3 + 4);
        uri.push_str("data:");
        uri.push_str(content_type);
        uri.push_str(";base64,");
        STANDARD.encode_string(&self.bytes, &mut uri);
        uri
    }
}

/// Source of image bytes.
pub trait ImageFetcher {
    /// Fetches `url`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Fetch`] on transport failure or a non-success
    /// status.
    fn fetch(&self, url: &str) -> Result<FetchedImage>;
}

/// Replaces image URLs in `markdown` with embedded data URIs.
///
/// Each distinct `src` is fetched at most once, in list order. A failed fetch
/// is logged and leaves that URL unchanged; it never fails the pass.
///
/// # Example
///
/// ```rust
/// use save2md::embed::{embed_images, FetchedImage, ImageFetcher};
/// use save2md::{ImageRef, Result};
///
/// struct Pixel;
///
/// impl ImageFetcher for Pixel {
///     fn fetch(&self, _url: &str) -> Result<FetchedImage> {
///         Ok(FetchedImage { bytes: b"GIF".to_vec(), content_type: Some("image/gif".into()) })
///     }
/// }
///
/// let md = "![a](https://e.com/a.gif)";
/// let images = [ImageRef::new("https://e.com/a.gif", "a")];
/// assert_eq!(embed_images(md, &images, &Pixel), "![a](data:image/gif;base64,R0lG)");
/// ```
#[must_use]
pub fn embed_images(markdown: &str, images: &[ImageRef], fetcher: &impl ImageFetcher) -> String {
    let mut seen = HashSet::new();
    let mut embedded = Vec::new();

    for image in images {
        if !seen.insert(image.src.as_str()) {
            continue;
        }
        match fetcher.fetch(&image.src) {
            Ok(fetched) => embedded.push((image.src.as_str(), fetched.to_data_uri())),
            Err(err) => log::warn!("keeping remote image: {err}"),
        }
    }

    log::debug!("embedded {} of {} distinct images", embedded.len(), seen.len());

    embedded
        .into_iter()
        .fold(markdown.to_string(), |text, (src, data_uri)| text.replace(src, &data_uri))
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use reqwest::header::CONTENT_TYPE;

    use super::{FetchedImage, ImageFetcher};
    use crate::error::{Error, Result};

    const USER_AGENT: &str = concat!("save2md/", env!("CARGO_PKG_VERSION"));
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Blocking HTTP fetcher backed by `reqwest`.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: Client,
    }

    impl HttpFetcher {
        /// Fetcher with a 30 second timeout.
        ///
        /// # Errors
        ///
        /// Returns [`Error::Fetch`] if the HTTP client cannot be built.
        pub fn new() -> Result<Self> {
            let client = Client::builder()
                .user_agent(USER_AGENT)
                .timeout(TIMEOUT)
                .build()
                .map_err(|e| Error::Fetch {
                    url: String::new(),
                    reason: format!("client setup: {e}"),
                })?;
            Ok(Self { client })
        }
    }

    impl ImageFetcher for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<FetchedImage> {
            let fail = |reason: String| Error::Fetch {
                url: url.to_string(),
                reason,
            };

            let response = self
                .client
                .get(url)
                .header(reqwest::header::ACCEPT, "image/*,*/*;q=0.8")
                .send()
                .map_err(|e| fail(e.to_string()))?;

            if !response.status().is_success() {
                return Err(fail(format!("status {}", response.status())));
            }

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let bytes = response.bytes().map_err(|e| fail(e.to_string()))?;

            Ok(FetchedImage {
                bytes: bytes.to_vec(),
                content_type,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;

    /// Serves canned responses and records every request.
    #[derive(Default)]
    struct StubFetcher {
        responses: HashMap<String, FetchedImage>,
        requests: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn with(mut self, url: &str, bytes: &[u8], content_type: Option<&str>) -> Self {
            self.responses.insert(
                url.to_string(),
                FetchedImage {
                    bytes: bytes.to_vec(),
                    content_type: content_type.map(str::to_string),
                },
            );
            self
        }
    }

    impl ImageFetcher for StubFetcher {
        fn fetch(&self, url: &str) -> Result<FetchedImage> {
            self.requests.borrow_mut().push(url.to_string());
            self.responses.get(url).cloned().ok_or_else(|| Error::Fetch {
                url: url.to_string(),
                reason: "status 404 Not Found".to_string(),
            })
        }
    }

    #[test]
    fn embeds_with_content_type() {
        let fetcher = StubFetcher::default().with("https://e.com/a.jpg", b"abc", Some("image/jpeg"));
        let out = embed_images(
            "![A](https://e.com/a.jpg)",
            &[ImageRef::new("https://e.com/a.jpg", "A")],
            &fetcher,
        );
        assert_eq!(out, "![A](data:image/jpeg;base64,YWJj)");
    }

    #[test]
    fn missing_content_type_defaults_to_png() {
        let image = FetchedImage {
            bytes: b"abc".to_vec(),
            content_type: None,
        };
        assert_eq!(image.to_data_uri(), "data:image/png;base64,YWJj");

        let blank = FetchedImage {
            content_type: Some("  ".to_string()),
            ..image
        };
        assert_eq!(blank.to_data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn duplicates_fetched_once_and_all_replaced() {
        let fetcher = StubFetcher::default().with("https://e.com/a.png", b"abc", None);
        let md = "![x](https://e.com/a.png) and ![y](https://e.com/a.png)";
        let images = [
            ImageRef::new("https://e.com/a.png", "x"),
            ImageRef::new("https://e.com/a.png", "y"),
        ];

        let out = embed_images(md, &images, &fetcher);

        assert_eq!(
            out,
            "![x](data:image/png;base64,YWJj) and ![y](data:image/png;base64,YWJj)"
        );
        assert_eq!(fetcher.requests.borrow().len(), 1);
    }

    #[test]
    fn failed_fetch_keeps_url() {
        let fetcher = StubFetcher::default().with("https://e.com/ok.png", b"abc", None);
        let md = "![a](https://e.com/ok.png)\n![b](https://e.com/gone.png)";
        let images = [
            ImageRef::new("https://e.com/ok.png", "a"),
            ImageRef::new("https://e.com/gone.png", "b"),
            ImageRef::new("https://e.com/gone.png", "b2"),
        ];

        let out = embed_images(md, &images, &fetcher);

        assert_eq!(out, "![a](data:image/png;base64,YWJj)\n![b](https://e.com/gone.png)");
        assert_eq!(
            *fetcher.requests.borrow(),
            vec!["https://e.com/ok.png".to_string(), "https://e.com/gone.png".to_string()]
        );
    }

    #[test]
    fn no_images_is_identity() {
        let fetcher = StubFetcher::default();
        assert_eq!(embed_images("# Title", &[], &fetcher), "# Title");
        assert!(fetcher.requests.borrow().is_empty());
    }
}
