//! PDF text extraction.
//!
//! Every page contributes its text followed by a single `\n`, the last page
//! included. A document without pages yields an empty string.

pub mod backend;
mod text;

pub use backend::{ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue};
pub use text::page_text;

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Extraction;

/// Open a PDF file and extract the text of all pages.
///
/// # Example
///
/// ```no_run
/// let text = doccat::pdf::extract_text("instructions.pdf")?;
/// print!("{}", text);
/// # Ok::<(), doccat::Error>(())
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(extract(path)?.text)
}

/// Open a PDF file and extract its text along with the page count.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let backend = LopdfBackend::load_reader(file).map_err(|e| match e {
        Error::Io(source) => Error::file_access(path, source),
        other => other,
    })?;
    let extraction = extract_from_backend(&backend)?;
    log::info!(
        "Extracted {} pages ({} bytes) from {}",
        extraction.units,
        extraction.text.len(),
        path.display()
    );
    Ok(extraction)
}

/// Extract the text of all pages from an in-memory PDF.
pub fn extract_bytes(data: &[u8]) -> Result<Extraction> {
    let backend = LopdfBackend::load_bytes(data)?;
    extract_from_backend(&backend)
}

/// Concatenate page texts, each followed by `\n`, in page-number order.
pub fn extract_from_backend<B: PdfBackend + ?Sized>(backend: &B) -> Result<Extraction> {
    let pages = backend.pages();
    let mut text = String::new();

    for (page_num, page_id) in &pages {
        let page = page_text(backend, *page_id).map_err(|e| match e {
            Error::PdfParse(msg) => Error::TextExtract(format!("page {}: {}", page_num, msg)),
            other => other,
        })?;
        log::debug!("Page {}: {} chars", page_num, page.chars().count());
        text.push_str(&page);
        text.push('\n');
    }

    Ok(Extraction::pdf(text, pages.len()))
}
