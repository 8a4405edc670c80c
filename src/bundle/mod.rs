//! Concatenate a PDF and a DOCX into one labeled text file.
//!
//! The output has the layout
//!
//! ```text
//! === TEAM PROJECT INSTRUCTIONS ===
//! <pdf text, one line feed after every page>
//! === BASE CASE 1 ===
//! <docx paragraphs joined by line feeds>
//! ```
//!
//! where the second header line is preceded by its own line feed. Both
//! documents are extracted before the output is opened, so a missing or
//! malformed input leaves an existing output file untouched.

mod options;
mod writer;

pub use options::{BundleConfig, DEFAULT_DOCX_TITLE, DEFAULT_PDF_TITLE};
pub use writer::{render_sections, write_sections, write_sections_to};

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::model::Section;

/// Stage reached by a bundle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleStep {
    ExtractingPdf,
    ExtractingDocx,
    Writing,
}

impl BundleStep {
    pub fn message(&self) -> &'static str {
        match self {
            BundleStep::ExtractingPdf => "Extracting PDF text...",
            BundleStep::ExtractingDocx => "Extracting DOCX text...",
            BundleStep::Writing => "Writing output...",
        }
    }
}

/// Summary of a completed bundle run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleReport {
    pub output: PathBuf,
    pub pdf_pages: usize,
    pub docx_paragraphs: usize,
    pub bytes_written: u64,
}

/// Extract both documents and write them to `config.output`.
///
/// # Example
///
/// ```no_run
/// use doccat::{bundle, BundleConfig};
///
/// let config = BundleConfig::new("instructions.pdf", "base_case.docx", "docs_output.txt");
/// let report = bundle(&config)?;
/// println!("{} bytes written", report.bytes_written);
/// # Ok::<(), doccat::Error>(())
/// ```
pub fn bundle(config: &BundleConfig) -> Result<BundleReport> {
    bundle_with_progress(config, |_| {})
}

/// Like [`bundle`], calling `progress` as each stage starts.
pub fn bundle_with_progress<F>(config: &BundleConfig, mut progress: F) -> Result<BundleReport>
where
    F: FnMut(BundleStep),
{
    progress(BundleStep::ExtractingPdf);
    let pdf = crate::pdf::extract(&config.pdf)?;

    progress(BundleStep::ExtractingDocx);
    let docx = crate::docx::extract(&config.docx)?;

    progress(BundleStep::Writing);
    let sections = [
        Section::new(config.pdf_title.as_str(), pdf.text),
        Section::new(config.docx_title.as_str(), docx.text),
    ];
    let bytes_written = write_sections(&config.output, &sections)?;

    log::info!(
        "Wrote {} bytes to {}",
        bytes_written,
        config.output.display()
    );

    Ok(BundleReport {
        output: config.output.clone(),
        pdf_pages: pdf.units,
        docx_paragraphs: docx.units,
        bytes_written,
    })
}
