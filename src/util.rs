//! Shared utility helpers.

use std::io;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

/// Case-insensitive (ASCII) whole-string comparison.
#[inline]
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.as_bytes().eq_ignore_ascii_case(b.as_bytes())
}

/// Read a file as a string, trying UTF-8 first, then Windows-1252 as fallback.
///
/// Schema dumps exported on Windows hosts are frequently not valid UTF-8.
/// A leading UTF-8 BOM is removed.
pub fn read_file_with_encoding_fallback(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    decode_with_fallback(bytes)
}

fn decode_with_fallback(bytes: Vec<u8>) -> io::Result<String> {
    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "File contains invalid characters",
                ));
            }
            decoded.into_owned()
        }
    };

    match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}
