//! Schema dump parsing: table extraction + column normalization

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use super::column_parser::normalize_columns;
use super::schema_extractor::extract_tables;
use crate::error::DictionaryError;
use crate::model::DataDictionary;
use crate::util::read_file_with_encoding_fallback;

/// Build a data dictionary from schema text.
///
/// Never fails: statements and columns that are not recognized are left
/// out. Tables without any recognized column are dropped, and a later table
/// with the same name replaces an earlier one in its original position.
pub fn parse_schema(text: &str) -> DataDictionary {
    let mut dictionary = DataDictionary::new();

    for block in extract_tables(text) {
        let columns = normalize_columns(&block.body);
        if columns.is_empty() {
            debug!(table = %block.name, "skipping table with no recognizable columns");
            continue;
        }

        debug!(table = %block.name, columns = columns.len(), "parsed table");
        if dictionary.insert_table(block.name.as_str(), columns).is_some() {
            debug!(table = %block.name, "duplicate table definition replaced earlier one");
        }
    }

    dictionary
}

/// Read and parse a schema file
pub fn parse_schema_file(path: &Path) -> Result<DataDictionary> {
    let content = read_file_with_encoding_fallback(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DictionaryError::InputNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::InvalidData => DictionaryError::InvalidEncoding {
            path: path.to_path_buf(),
        },
        _ => DictionaryError::InputReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!(path = %path.display(), bytes = content.len(), "read schema file");

    Ok(parse_schema(&content))
}
