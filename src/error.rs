//! Error types for save2md.
//!
//! The extraction core never fails: filtering, locating and rendering degrade
//! gracefully. These errors belong to the collaborators around it (reading
//! input, loading settings, fetching images, writing the Markdown file).

use std::path::PathBuf;

/// Error type for operations outside the extraction core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that was being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from stdin or writing to stdout failed.
    #[error("stream I/O failed: {0}")]
    Stream(#[from] std::io::Error),

    /// Settings JSON could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// An image could not be fetched.
    #[error("failed to fetch {url}: {reason}")]
    Fetch {
        /// Image URL that was requested.
        url: String,
        /// Transport error or HTTP status.
        reason: String,
    },
}

impl Error {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for collaborator operations.
pub type Result<T> = std::result::Result<T, Error>;
