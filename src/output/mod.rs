//! Data dictionary output: JSON, text report, console sample

pub mod json;
pub mod report;
pub mod text;

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;

use crate::error::DictionaryError;
use crate::model::DataDictionary;

/// Serialization format for a saved data dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    /// File extension appended to the output stem
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }

    /// Render the dictionary in this format
    pub fn render(self, dictionary: &DataDictionary) -> Result<String, DictionaryError> {
        match self {
            OutputFormat::Json => json::to_json_string(dictionary),
            OutputFormat::Text => Ok(text::render_text_report(dictionary)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(DictionaryError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `<stem>.<ext>`, appended rather than replacing any dot already in the stem
pub fn output_path(stem: &Path, format: OutputFormat) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Write the dictionary to `<stem>.<ext>` and return the written path.
///
/// The whole document is rendered before the file is created, so a
/// rendering failure leaves nothing on disk.
pub fn save_data_dictionary(
    dictionary: &DataDictionary,
    format: OutputFormat,
    stem: &Path,
) -> Result<PathBuf> {
    let rendered = format.render(dictionary)?;
    let path = output_path(stem, format);

    std::fs::write(&path, rendered).map_err(|e| DictionaryError::OutputWriteError {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
