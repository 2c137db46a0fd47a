//! DEFAULT clause normalization

use crate::model::ColumnDefault;
use crate::util::eq_ci;

const CURRENT_TIMESTAMP: &str = "CURRENT_TIMESTAMP";

/// Normalize the raw text captured after `DEFAULT`.
///
/// - surrounding whitespace is trimmed
/// - a value opening with `'` or `"` loses that quote and one matching closing quote
/// - otherwise `current_timestamp` in any case becomes `CURRENT_TIMESTAMP`
/// - a resulting literal `NULL` becomes [`ColumnDefault::Null`]
///
/// Only the bare keyword is canonicalized: `CURRENT_TIMESTAMP ON UPDATE ...`
/// is kept verbatim.
pub fn normalize_default(raw: &str) -> ColumnDefault {
    let value = raw.trim();

    let value = if value.starts_with('\'') || value.starts_with('"') {
        strip_quote_layer(value)
    } else if eq_ci(value, CURRENT_TIMESTAMP) {
        CURRENT_TIMESTAMP
    } else {
        value
    };

    if value == "NULL" {
        ColumnDefault::Null
    } else {
        ColumnDefault::Value(value.to_string())
    }
}

/// Remove the opening quote and, if present, the same quote character at the end.
fn strip_quote_layer(value: &str) -> &str {
    let mut chars = value.chars();
    let Some(quote) = chars.next() else {
        return value;
    };
    let rest = chars.as_str();
    rest.strip_suffix(quote).unwrap_or(rest)
}
