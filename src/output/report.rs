//! Console sample of a parsed data dictionary

use std::fmt::Write;

use crate::error::DictionaryError;
use crate::model::{DataDictionary, TableColumns};

/// Render the sample shown after parsing.
///
/// Shows `preferred` when the dictionary has it, otherwise the first table.
pub fn render_sample(dictionary: &DataDictionary, preferred: &str) -> Result<String, DictionaryError> {
    let mut out = String::new();

    if let Some(columns) = dictionary.table(preferred) {
        let _ = writeln!(out, "Sample: {} table", preferred);
        write_columns(&mut out, columns)?;
    } else {
        let _ = writeln!(
            out,
            "{} table not found in schema. Here's a sample table:",
            preferred
        );
        if let Some((name, columns)) = dictionary.first_table() {
            let _ = writeln!(out, "Table: {}", name);
            write_columns(&mut out, columns)?;
        }
    }

    Ok(out)
}

/// Print the sample to stdout
pub fn print_sample(dictionary: &DataDictionary, preferred: &str) -> Result<(), DictionaryError> {
    print!("{}", render_sample(dictionary, preferred)?);
    Ok(())
}

fn write_columns(out: &mut String, columns: &TableColumns) -> Result<(), DictionaryError> {
    for (name, column) in columns {
        let details = serde_json::to_string(column)?;
        let _ = writeln!(out, "  {}: {}", name, details);
    }
    Ok(())
}
