//! Output filename derivation.

use crate::patterns::{FILENAME_ILLEGAL, HYPHEN_RUN, WHITESPACE_RUN};

/// Longest filename stem produced, in characters.
pub const MAX_FILENAME_CHARS: usize = 200;

/// Stem used when a title sanitizes to nothing.
pub const FALLBACK_STEM: &str = "page";

/// Turns a free-form page title into a filename stem.
///
/// Removes `< > : " / \ | ? *` and control characters, replaces whitespace
/// runs with `-`, collapses repeated hyphens, drops one leading and one
/// trailing hyphen and keeps at most [`MAX_FILENAME_CHARS`] characters.
///
/// # Examples
///
/// ```
/// use save2md::sanitize_filename;
///
/// assert_eq!(sanitize_filename("a:b/c*d"), "abcd");
/// assert_eq!(sanitize_filename("  a   b  "), "a-b");
/// assert_eq!(sanitize_filename("Rust: The Book?"), "Rust-The-Book");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let cleaned = FILENAME_ILLEGAL.replace_all(name, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");

    let stem = collapsed.strip_prefix('-').unwrap_or(&collapsed);
    let stem = stem.strip_suffix('-').unwrap_or(stem);

    stem.chars().take(MAX_FILENAME_CHARS).collect()
}

/// `{stem}.md` for a page title, using [`FALLBACK_STEM`] when the title has
/// no usable characters.
#[must_use]
pub fn markdown_filename(title: &str) -> String {
    let stem = sanitize_filename(title);
    if stem.is_empty() {
        format!("{FALLBACK_STEM}.md")
    } else {
        format!("{stem}.md")
    }
}
