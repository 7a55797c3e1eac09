//! Markdown text utilities.
//!
//! Escaping of text-node content, the whitespace normalization applied once
//! to a finished document, and GitHub Flavored Markdown pipe tables.

use std::borrow::Cow;

use crate::patterns::{MULTIPLE_NEWLINES, SPACE_RUN, WHITESPACE_RUN};

/// Characters that have special meaning in Markdown and need escaping.
const MARKDOWN_SPECIAL_CHARS: &[char] = &[
    '\\', '*', '_', '`', '[', ']', '(', ')', '#', '+', '-', '.', '!', '|', '{', '}',
];

/// Escape Markdown metacharacters by prefixing each with a backslash.
///
/// A literal backslash becomes `\\`, so escaping is never doubled.
///
/// # Examples
///
/// ```
/// use save2md::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("*not italic*"), r"\*not italic\*");
/// assert_eq!(escape_markdown("v1.2"), r"v1\.2");
/// assert_eq!(escape_markdown(r"a\*b"), r"a\\\*b");
/// ```
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&ch) {
            result.push('\\');
        }
        result.push(ch);
    }

    result
}

/// Collapse every whitespace run (newlines and NBSP included) to one space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Render a raw text node: collapse whitespace, then escape.
#[must_use]
pub fn text_node_markdown(raw: &str) -> String {
    escape_markdown(&collapse_whitespace(raw))
}

/// Prefix of the fence lines written by [`fenced_code`].
///
/// HTML parsing replaces NUL in text and attribute values, so rendered
/// content never contains it.
pub const FENCE_MARK: char = '\0';

/// Fenced code block with marked fence lines, surrounded by blank lines.
///
/// The marks are stripped by [`normalize_document`].
#[must_use]
pub fn fenced_code(lang: &str, code: &str) -> String {
    format!("\n\n{FENCE_MARK}```{lang}\n{code}\n{FENCE_MARK}```\n\n")
}

/// Final pass over a whole rendered document.
///
/// Collapses 3+ newlines to a blank line, trims the ends and collapses runs
/// of spaces to one. Lines between the fences of a [`fenced_code`] block
/// keep their spacing.
#[must_use]
pub fn normalize_document(raw: &str) -> String {
    let collapsed = MULTIPLE_NEWLINES.replace_all(raw, "\n\n");
    let trimmed = collapsed.trim();

    let mut out = String::with_capacity(trimmed.len());
    let mut in_fence = false;

    for (i, line) in trimmed.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // A flattened table cell can hold both fences of a block on one line.
        let marks = line.matches(FENCE_MARK).count();
        if in_fence && marks == 0 {
            out.push_str(line);
        } else {
            let unmarked = line.replace(FENCE_MARK, "");
            out.push_str(&SPACE_RUN.replace_all(&unmarked, " "));
        }
        if marks % 2 == 1 {
            in_fence = !in_fence;
        }
    }
    out
}

/// Prepare a rendered cell for a pipe table row.
///
/// Pipes are escaped and newlines become spaces so the cell stays on one line.
#[must_use]
pub fn table_cell(rendered: &str) -> String {
    rendered.trim().replace('|', "\\|").replace('\n', " ")
}

/// Build a GitHub Flavored Markdown pipe table.
///
/// Rows shorter than the widest row are padded with empty cells. The first
/// row is the header and is followed by a `---` separator row. An empty
/// `rows` yields an empty string.
///
/// # Example
///
/// ```
/// use save2md::markdown::pipe_table;
///
/// let rows = vec![
///     vec!["A".to_string(), "B".to_string()],
///     vec!["1".to_string()],
/// ];
/// assert_eq!(pipe_table(rows), "| A | B |\n| --- | --- |\n| 1 |  |");
/// ```
#[must_use]
pub fn pipe_table(mut rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(col_count, String::new());
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(table_row(&rows[0]));
    lines.push(table_row(&vec!["---".to_string(); col_count]));
    lines.extend(rows[1..].iter().map(|row| table_row(row)));

    lines.join("\n")
}

fn table_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
