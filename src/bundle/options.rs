//! Bundle configuration.

use std::path::PathBuf;

/// Header title of the PDF section unless overridden.
pub const DEFAULT_PDF_TITLE: &str = "TEAM PROJECT INSTRUCTIONS";

/// Header title of the DOCX section unless overridden.
pub const DEFAULT_DOCX_TITLE: &str = "BASE CASE 1";

/// Inputs, output and section titles of one bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// PDF document written in the first section
    pub pdf: PathBuf,

    /// DOCX document written in the second section
    pub docx: PathBuf,

    /// Destination text file (created or truncated)
    pub output: PathBuf,

    /// Title of the PDF section header
    pub pdf_title: String,

    /// Title of the DOCX section header
    pub docx_title: String,
}

impl BundleConfig {
    /// Create a configuration with the default section titles.
    pub fn new(
        pdf: impl Into<PathBuf>,
        docx: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pdf: pdf.into(),
            docx: docx.into(),
            output: output.into(),
            pdf_title: DEFAULT_PDF_TITLE.to_string(),
            docx_title: DEFAULT_DOCX_TITLE.to_string(),
        }
    }

    /// Set the PDF section title.
    pub fn with_pdf_title(mut self, title: impl Into<String>) -> Self {
        self.pdf_title = title.into();
        self
    }

    /// Set the DOCX section title.
    pub fn with_docx_title(mut self, title: impl Into<String>) -> Self {
        self.docx_title = title.into();
        self
    }
}
