//! # doccat
//!
//! Extract the text of a PDF and a DOCX document and concatenate both into a
//! single UTF-8 text file under labeled section headers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doccat::{bundle, BundleConfig};
//!
//! fn main() -> doccat::Result<()> {
//!     let config = BundleConfig::new(
//!         "Team Project Instructions.pdf",
//!         "Base Case 1.docx",
//!         "docs_output.txt",
//!     );
//!     bundle(&config)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Text layout
//!
//! - **PDF**: the text of every page followed by one line feed, the last page
//!   included.
//! - **DOCX**: the text of every body paragraph, joined by one line feed, with
//!   nothing after the last paragraph.

pub mod bundle;
pub mod detect;
pub mod docx;
pub mod error;
pub mod extract;
pub mod model;
pub mod pdf;

// Re-export commonly used types
pub use bundle::{
    bundle, bundle_with_progress, render_sections, write_sections, BundleConfig, BundleReport,
    BundleStep,
};
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, is_docx, is_pdf, DocumentFormat,
};
pub use error::{Error, Result};
pub use extract::{DocxExtractor, ExtractorRegistry, PdfExtractor, TextExtractor};
pub use model::{DocumentKind, Extraction, Section};

use std::path::{Path, PathBuf};

/// Extract the text of every page of a PDF file.
///
/// # Example
///
/// ```no_run
/// let text = doccat::extract_pdf_text("instructions.pdf").unwrap();
/// assert!(text.is_empty() || text.ends_with('\n'));
/// ```
pub fn extract_pdf_text<P: AsRef<Path>>(path: P) -> Result<String> {
    pdf::extract_text(path)
}

/// Extract the text of every body paragraph of a DOCX file.
///
/// # Example
///
/// ```no_run
/// let text = doccat::extract_docx_text("base_case.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_docx_text<P: AsRef<Path>>(path: P) -> Result<String> {
    docx::extract_text(path)
}

/// Extract text from a PDF or DOCX file, choosing the extractor from the
/// file's leading bytes.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    ExtractorRegistry::with_defaults().extract_detected(path.as_ref())
}

/// Builder for a bundle run.
///
/// # Example
///
/// ```no_run
/// use doccat::Doccat;
///
/// let report = Doccat::new()
///     .pdf("instructions.pdf")
///     .docx("base_case.docx")
///     .pdf_title("BRIEF")
///     .write_to("out.txt")?;
/// println!("{} bytes", report.bytes_written);
/// # Ok::<(), doccat::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Doccat {
    pdf: Option<PathBuf>,
    docx: Option<PathBuf>,
    pdf_title: Option<String>,
    docx_title: Option<String>,
}

impl Doccat {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PDF input.
    pub fn pdf(mut self, path: impl Into<PathBuf>) -> Self {
        self.pdf = Some(path.into());
        self
    }

    /// Set the DOCX input.
    pub fn docx(mut self, path: impl Into<PathBuf>) -> Self {
        self.docx = Some(path.into());
        self
    }

    /// Override the PDF section title.
    pub fn pdf_title(mut self, title: impl Into<String>) -> Self {
        self.pdf_title = Some(title.into());
        self
    }

    /// Override the DOCX section title.
    pub fn docx_title(mut self, title: impl Into<String>) -> Self {
        self.docx_title = Some(title.into());
        self
    }

    /// Build the configuration for writing to `output`.
    pub fn config(self, output: impl Into<PathBuf>) -> Result<BundleConfig> {
        let pdf = self
            .pdf
            .ok_or_else(|| Error::Other("No PDF input given".into()))?;
        let docx = self
            .docx
            .ok_or_else(|| Error::Other("No DOCX input given".into()))?;

        let mut config = BundleConfig::new(pdf, docx, output);
        if let Some(title) = self.pdf_title {
            config = config.with_pdf_title(title);
        }
        if let Some(title) = self.docx_title {
            config = config.with_docx_title(title);
        }
        Ok(config)
    }

    /// Extract both inputs and write them to `output`.
    pub fn write_to(self, output: impl Into<PathBuf>) -> Result<BundleReport> {
        let config = self.config(output)?;
        bundle(&config)
    }
}
