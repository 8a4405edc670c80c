//! Document format detection from magic bytes.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detected document format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentFormat {
    /// PDF document with its header version (e.g., "1.7", "2.0")
    Pdf { version: String },
    /// ZIP-based Office Open XML word-processing document
    Docx,
}

impl DocumentFormat {
    /// Lowercase extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf { .. } => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf { version } => write!(f, "PDF {}", version),
            DocumentFormat::Docx => write!(f, "DOCX"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// ZIP local file header signature.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

const HEADER_LEN: usize = 16;

/// Detect the document format of a file.
///
/// Only the first bytes of the file are read. A DOCX is recognized by its ZIP
/// signature alone; whether it actually holds a word-processing document is
/// checked when it is extracted.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentFormat> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.by_ref()
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .map_err(|e| Error::file_access(path, e))?;
    detect_format_from_bytes(&header)
}

/// Detect the document format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocumentFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(DocumentFormat::Docx);
    }

    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(DocumentFormat::Pdf { version })
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if a file starts with a valid PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(DocumentFormat::Pdf { .. }))
}

/// Check if a file starts with a ZIP signature.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(DocumentFormat::Docx))
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(DocumentFormat::Pdf { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(
            format,
            DocumentFormat::Pdf {
                version: "1.7".into()
            }
        );
        assert_eq!(format.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_detect_docx() {
        let data = b"PK\x03\x04\x14\x00\x06\x00";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format, DocumentFormat::Docx);
        assert_eq!(format.extension(), "docx");
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_format_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_format_from_bytes(b"%PDF");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_bad_version() {
        let result = detect_format_from_bytes(b"%PDF-x.y\n");
        assert!(matches!(result, Err(Error::UnsupportedVersion(v)) if v == "x.y"));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"PK\x03\x04"));
        assert!(!is_pdf_bytes(b""));
    }

    #[test]
    fn test_detect_missing_file() {
        let result = detect_format_from_path("/nonexistent/doccat/input.pdf");
        assert!(matches!(result, Err(Error::FileAccess { .. })));
        assert!(!is_pdf("/nonexistent/doccat/input.pdf"));
    }

    #[test]
    fn test_is_pdf_and_is_docx_on_files() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("a.pdf");
        let docx = dir.path().join("b.docx");
        std::fs::write(&pdf, b"%PDF-1.5\n%%EOF\n").unwrap();
        std::fs::write(&docx, b"PK\x03\x04\x14\x00\x06\x00\x08\x00").unwrap();

        assert!(is_pdf(&pdf));
        assert!(!is_docx(&pdf));
        assert!(is_docx(&docx));
        assert!(!is_pdf(&docx));
        assert!(!is_docx("/nonexistent/doccat/input.docx"));
    }

    #[test]
    fn test_version_validation() {
        assert!(is_valid_version("1.0"));
        assert!(is_valid_version("2.0"));
        assert!(!is_valid_version("10.0"));
        assert!(!is_valid_version("abc"));
    }
}
