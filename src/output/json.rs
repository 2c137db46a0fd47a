//! JSON rendering of the data dictionary

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::DictionaryError;
use crate::model::DataDictionary;

const INDENT: &[u8] = b"    ";

/// Render as pretty JSON with 4-space indentation and no trailing newline
pub fn to_json_string(dictionary: &DataDictionary) -> Result<String, DictionaryError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    dictionary.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| DictionaryError::SerializationError {
        message: e.to_string(),
    })
}

/// Parse a previously saved JSON data dictionary
pub fn from_json_str(json: &str) -> Result<DataDictionary, DictionaryError> {
    Ok(serde_json::from_str(json)?)
}
