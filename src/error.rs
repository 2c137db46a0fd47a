//! Error types for sql-data-dictionary

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a data dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Schema file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read schema file: {path}")]
    InputReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema file contains invalid characters: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Unsupported output format '{format}'. Use 'json' or 'txt'.")]
    UnsupportedFormat { format: String },

    #[error("Failed to write data dictionary to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {message}")]
    SerializationError { message: String },
}

impl From<serde_json::Error> for DictionaryError {
    fn from(err: serde_json::Error) -> Self {
        DictionaryError::SerializationError {
            message: err.to_string(),
        }
    }
}
