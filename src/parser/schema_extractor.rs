//! CREATE TABLE block extraction
//!
//! Recognizes MySQL/MariaDB dump-style table statements:
//!
//! ```sql
//! CREATE TABLE `name` (
//!   ...column and key clauses...
//! ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_general_ci;
//! ```
//!
//! Statements without an `ENGINE=` tail are not recognized.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Newline followed by any run of whitespace (including further newlines)
static LINE_INDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*").expect("Invalid line indent regex"));

/// The body capture is lazy so it ends at the first `) ENGINE=` rather than the last.
static CREATE_TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)CREATE TABLE `(\w+)` \((.*?)\)\s*ENGINE=\w+.*?(?:COLLATE=\w+)?;")
        .expect("Invalid CREATE TABLE regex")
});

/// A table name paired with the raw text between its outer parentheses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub name: String,
    pub body: String,
}

/// Collapse every newline-plus-whitespace run into a bare newline.
///
/// Drops indentation and blank lines so the table and column patterns only
/// ever see a single `\n` at line boundaries.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    LINE_INDENT_RE.replace_all(text, "\n")
}

/// Find every recognized CREATE TABLE statement, in source order
pub fn extract_tables(text: &str) -> Vec<TableBlock> {
    let normalized = normalize_line_breaks(text);

    CREATE_TABLE_RE
        .captures_iter(&normalized)
        .map(|caps| TableBlock {
            name: caps[1].to_string(),
            body: caps[2].to_string(),
        })
        .collect()
}
