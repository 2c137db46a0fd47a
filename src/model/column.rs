//! Column descriptor types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default value declared for a column.
///
/// `DEFAULT NULL` is kept distinct from a column with no DEFAULT clause: the
/// former is `Some(ColumnDefault::Null)`, the latter `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDefault {
    /// `DEFAULT NULL`, serialized as JSON `null`
    Null,
    /// Any other literal or expression, with one layer of quotes removed
    Value(String),
}

impl ColumnDefault {
    /// The default as text, `None` for `DEFAULT NULL`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ColumnDefault::Null => None,
            ColumnDefault::Value(v) => Some(v),
        }
    }
}

impl fmt::Display for ColumnDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnDefault::Null => f.write_str("NULL"),
            ColumnDefault::Value(v) => f.write_str(v),
        }
    }
}

impl Serialize for ColumnDefault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnDefault::Null => serializer.serialize_none(),
            ColumnDefault::Value(v) => serializer.serialize_str(v),
        }
    }
}

/// Normalized metadata for a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Declared type including size and modifiers (e.g., "INT(11) UNSIGNED")
    #[serde(rename = "type")]
    pub data_type: String,
    /// Serialized as "YES"/"NO"
    #[serde(with = "yes_no")]
    pub nullable: bool,
    /// Absent when the column has no DEFAULT clause
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present_default"
    )]
    pub default: Option<ColumnDefault>,
}

impl ColumnDescriptor {
    /// Nullability as it appears in the serialized dictionary
    pub fn nullable_label(&self) -> &'static str {
        yes_no::label(self.nullable)
    }
}

/// A key that is present always yields `Some`; JSON `null` becomes `ColumnDefault::Null`.
fn deserialize_present_default<'de, D>(deserializer: D) -> Result<Option<ColumnDefault>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(Some(match value {
        Some(v) => ColumnDefault::Value(v),
        None => ColumnDefault::Null,
    }))
}

/// serde adapter mapping `bool` to the strings "YES" and "NO"
mod yes_no {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn label(value: bool) -> &'static str {
        if value {
            "YES"
        } else {
            "NO"
        }
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(label(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "YES" => Ok(true),
            "NO" => Ok(false),
            other => Err(D::Error::custom(format!(
                "expected \"YES\" or \"NO\", found \"{}\"",
                other
            ))),
        }
    }
}
