//! PDF extractor registration.

use crate::error::Result;
use crate::model::Extraction;
use std::path::Path;

use super::TextExtractor;

/// PDF text extractor: one line feed after every page.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract(&self, path: &Path) -> Result<Extraction> {
        crate::pdf::extract(path)
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<Extraction> {
        crate::pdf::extract_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_extensions() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.supported_extensions(), &["pdf"]);
        assert!(extractor.supports_extension("PDF"));
        assert!(!extractor.supports_extension("docx"));
    }
}
