//! sql-data-dictionary: extract a data dictionary from MySQL/MariaDB schema dumps
//!
//! Reads `CREATE TABLE ... ENGINE=...;` statements and records, per table,
//! each column's declared type, nullability and default value. The result
//! is saved as JSON or as a plain-text report.

pub mod error;
pub mod model;
pub mod output;
pub mod parser;
mod util;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

pub use error::DictionaryError;
pub use model::{ColumnDefault, ColumnDescriptor, DataDictionary, TableColumns};
pub use output::OutputFormat;

/// Options for building a data dictionary
#[derive(Debug, Clone)]
pub struct DictionaryOptions {
    /// Path to the schema dump
    pub schema_path: PathBuf,
    /// Output file path without extension
    pub output_stem: PathBuf,
    /// Output format selector ("json" or "txt")
    pub format: String,
    /// Table shown in the console sample
    pub sample_table: String,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("schema.sql"),
            output_stem: PathBuf::from("openemr_data_dictionary"),
            format: "json".to_string(),
            sample_table: "patient_data".to_string(),
        }
    }
}

/// Parse the schema, print a sample table and save the dictionary.
///
/// Returns the path of the written file.
pub fn build_data_dictionary(options: &DictionaryOptions) -> Result<PathBuf> {
    // Reject the format before doing any work so nothing is written
    let format: OutputFormat = options.format.parse()?;

    // Step 1: Parse the schema file
    let dictionary = parser::parse_schema_file(&options.schema_path)?;

    info!(
        tables = dictionary.len(),
        columns = dictionary.column_count(),
        "parsed {}",
        options.schema_path.display()
    );

    // Step 2: Show a sample on the console
    output::report::print_sample(&dictionary, &options.sample_table)?;

    // Step 3: Save the full dictionary
    let output_path = output::save_data_dictionary(&dictionary, format, &options.output_stem)?;

    info!("wrote {}", output_path.display());

    Ok(output_path)
}
