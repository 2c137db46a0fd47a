//! Column clause parsing for a single CREATE TABLE body
//!
//! Runs in three passes:
//! 1. [`strip_key_clauses`] removes table-level key and constraint clauses
//! 2. [`tokenize_columns`] finds each column declaration
//! 3. [`describe_column`] maps a declaration to a [`ColumnDescriptor`]
//!
//! ## Supported Syntax
//!
//! ```sql
//! `name` TYPE[(args)] [UNSIGNED] [ZEROFILL] [NOT NULL|NULL]
//!     [DEFAULT value [ON UPDATE expr]] [AUTO_INCREMENT] [COMMENT 'text']
//! ```
//!
//! Anything that does not fit this shape is skipped.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::default_value::normalize_default;
use crate::model::{ColumnDescriptor, TableColumns};

/// Comma-introduced key/constraint clause, up to and including the next comma.
/// Keywords are matched case-sensitively, as they appear in dumps.
static KEY_CLAUSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s),\s*(?:PRIMARY\s+KEY|KEY|UNIQUE\s+KEY|CONSTRAINT).*?(?:,|$)")
        .expect("Invalid key clause regex")
});

/// One column declaration. Groups: name, type, nullability, default.
static COLUMN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)`(\w+)`\s+",
        r"([A-Za-z0-9_]+\s*(?:\([^)]+\))?(?:\s+UNSIGNED)?(?:\s+ZEROFILL)?)",
        r"\s*(NOT NULL|NULL)?",
        r"(?:\s*DEFAULT\s*([^,\n]+(?:\s+ON\s+UPDATE\s+[^,\n]+)?))?",
        r"(?:\s*AUTO_INCREMENT)?",
        r#"(?:\s*COMMENT\s*['"].*?['"])?"#,
    ))
    .expect("Invalid column regex")
});

/// A column declaration as matched, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawColumn<'a> {
    pub name: &'a str,
    /// Type token, possibly with trailing whitespace
    pub data_type: &'a str,
    /// `NOT NULL` or `NULL` as written, if present
    pub nullability: Option<&'a str>,
    /// Everything after `DEFAULT` up to the next comma or newline
    pub default: Option<&'a str>,
}

/// Remove PRIMARY KEY, KEY, UNIQUE KEY and CONSTRAINT clauses from a table body.
///
/// Each removal starts at the comma before the keyword and ends at the next
/// comma (inclusive) or the end of the body. A multi-column key list
/// therefore only loses its text up to the first inner comma; the remainder
/// has no backtick-name-then-type shape and is skipped by the tokenizer.
pub fn strip_key_clauses(body: &str) -> Cow<'_, str> {
    KEY_CLAUSE_RE.replace_all(body, "")
}

/// Find all column declarations in a (stripped) table body, in order
pub fn tokenize_columns(body: &str) -> Vec<RawColumn<'_>> {
    COLUMN_RE
        .captures_iter(body)
        .filter_map(|caps| {
            Some(RawColumn {
                name: caps.get(1)?.as_str(),
                data_type: caps.get(2)?.as_str(),
                nullability: caps.get(3).map(|m| m.as_str()),
                default: caps.get(4).map(|m| m.as_str()),
            })
        })
        .collect()
}

/// Normalize one matched column declaration
pub fn describe_column(raw: &RawColumn<'_>) -> ColumnDescriptor {
    // Only the exact uppercase keywords count; absence means nullable
    let nullable = match raw.nullability {
        None | Some("NULL") => true,
        Some(_) => false,
    };

    ColumnDescriptor {
        data_type: raw.data_type.trim().to_string(),
        nullable,
        default: raw.default.map(normalize_default),
    }
}

/// Parse a CREATE TABLE body into its ordered column map.
///
/// A repeated column name replaces the earlier descriptor in place.
pub fn normalize_columns(body: &str) -> TableColumns {
    let stripped = strip_key_clauses(body);
    let trimmed = stripped.trim().trim_end_matches(',');

    let mut columns = TableColumns::new();
    for raw in tokenize_columns(trimmed) {
        columns.insert(raw.name.to_string(), describe_column(&raw));
    }
    columns
}
