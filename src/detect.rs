//! Source format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Format of a page source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Plain UTF-8 text, pages separated by form feeds
    Text,
    /// JSON page dump
    Json,
}

impl SourceFormat {
    /// Canonical file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Text => "txt",
            SourceFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Text => write!(f, "Text"),
            SourceFormat::Json => write!(f, "JSON"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
/// Number of leading bytes inspected when sniffing.
const SNIFF_LEN: usize = 1024;

/// Detect the source format of a file from its leading bytes.
///
/// # Example
/// ```no_run
/// use iramuteq_prep::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("entrevista.dat").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let mut header = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the source format from bytes.
///
/// Data whose first non-blank character is `{` is a JSON page dump; other
/// UTF-8 data is plain text.
///
/// # Returns
/// * `Err(Error::UnsupportedFormat)` for PDF data, which must be converted
///   to text first
/// * `Err(Error::UnknownFormat)` for empty or binary data
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    if data.starts_with(PDF_MAGIC) {
        return Err(Error::UnsupportedFormat("pdf".into()));
    }

    let head = &data[..data.len().min(SNIFF_LEN)];
    let text = match std::str::from_utf8(head) {
        Ok(text) => text,
        // A multi-byte character cut by the sniff window is still text.
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return Err(Error::UnknownFormat),
    };

    if text.contains('\0') {
        return Err(Error::UnknownFormat);
    }

    match text.trim_start().chars().next() {
        Some('{') => Ok(SourceFormat::Json),
        Some(_) => Ok(SourceFormat::Text),
        None => Err(Error::UnknownFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json() {
        let data = b"  \n{\"pages\": [\"um\"]}";
        assert_eq!(detect_format_from_bytes(data).unwrap(), SourceFormat::Json);
    }

    #[test]
    fn test_detect_text() {
        let data = "Introdução\x0cSegunda página".as_bytes();
        assert_eq!(detect_format_from_bytes(data).unwrap(), SourceFormat::Text);
    }

    #[test]
    fn test_detect_bom() {
        let data = b"\xEF\xBB\xBF{}";
        assert_eq!(detect_format_from_bytes(data).unwrap(), SourceFormat::Json);
    }

    #[test]
    fn test_detect_pdf_is_unsupported() {
        let result = detect_format_from_bytes(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_detect_binary() {
        assert!(matches!(
            detect_format_from_bytes(b"\x89PNG\r\n\x1a\n\x00\x00"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b"   "),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_truncated_multibyte() {
        let mut data = vec![b'a'; SNIFF_LEN - 1];
        data.extend_from_slice("ç".as_bytes());
        assert_eq!(detect_format_from_bytes(&data).unwrap(), SourceFormat::Text);
    }

    #[test]
    fn test_extension() {
        assert_eq!(SourceFormat::Text.extension(), "txt");
        assert_eq!(SourceFormat::Json.to_string(), "JSON");
    }
}
