//! Compiled regex patterns used across the pipeline.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Content Locator
// =============================================================================

/// Class/id words that raise a candidate's score.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"article|post|entry|content|story|body|main").expect("POSITIVE_CLASS regex")
});

/// Class/id words that lower a candidate's score.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sidebar|menu|comment|widget").expect("NEGATIVE_CLASS regex")
});

// =============================================================================
// Markdown Renderer
// =============================================================================

/// Any run of whitespace inside a text node.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Two or more consecutive plain spaces.
pub static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("SPACE_RUN regex"));

/// `language-xxx` / `lang-xxx` class naming a code block's language.
pub static CODE_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:language|lang)-([A-Za-z0-9_]+)").expect("CODE_LANGUAGE regex")
});

// =============================================================================
// Filenames
// =============================================================================

/// Characters that are illegal in filenames on common platforms.
pub static FILENAME_ILLEGAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).expect("FILENAME_ILLEGAL regex")
});

/// Runs of hyphens.
pub static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("HYPHEN_RUN regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_and_negative_class_words() {
        assert!(POSITIVE_CLASS.is_match("main-content"));
        assert!(POSITIVE_CLASS.is_match("entry-body"));
        assert!(!POSITIVE_CLASS.is_match("footer"));
        assert!(NEGATIVE_CLASS.is_match("left-sidebar"));
        assert!(NEGATIVE_CLASS.is_match("comment-list"));
        assert!(!NEGATIVE_CLASS.is_match("article"));
    }

    #[test]
    fn code_language_takes_first_match() {
        let caps = CODE_LANGUAGE
            .captures("hljs language-rust lang-python")
            .expect("match");
        assert_eq!(&caps[1], "rust");
        let caps = CODE_LANGUAGE.captures("lang-python").expect("match");
        assert_eq!(&caps[1], "python");
        assert!(CODE_LANGUAGE.captures("highlight").is_none());
    }

    #[test]
    fn whitespace_run_includes_nbsp() {
        assert_eq!(WHITESPACE_RUN.replace_all("a\u{a0}\n\t b", " "), "a b");
    }

    #[test]
    fn filename_illegal_covers_control_chars() {
        assert!(FILENAME_ILLEGAL.is_match("\u{1f}"));
        assert!(FILENAME_ILLEGAL.is_match("a:b"));
        assert!(!FILENAME_ILLEGAL.is_match("plain-name"));
    }
}
