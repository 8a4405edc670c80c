//! Error types for doccat library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for doccat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting or writing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened, read, or created.
    #[error("Cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file format is not recognized as PDF or DOCX.
    #[error("Unknown file format: not a PDF or DOCX document")]
    UnknownFormat,

    /// The PDF header carries an unreadable version.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be opened without a password.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a PDF page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The DOCX container or its XML could not be parsed.
    #[error("DOCX parsing error: {0}")]
    DocxParse(String),

    /// A part required by the DOCX package is missing.
    #[error("Missing DOCX part: {0}")]
    MissingPart(String),

    /// No extractor handles the given file extension.
    #[error("No extractor for extension: {0}")]
    UnsupportedExtension(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Whether this error comes from opening or reading a file rather than
    /// from the document contents.
    pub fn is_file_access(&self) -> bool {
        matches!(self, Error::FileAccess { .. } | Error::Io(_))
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::MissingPart(crate::docx::DOCUMENT_PART.to_string())
            }
            _ => Error::DocxParse(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::DocxParse(err.to_string())
    }
}
