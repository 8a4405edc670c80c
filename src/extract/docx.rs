//! DOCX extractor registration.

use crate::error::Result;
use crate::model::Extraction;
use std::path::Path;

use super::TextExtractor;

/// DOCX text extractor: body paragraphs joined by line feeds.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    _private: (),
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract(&self, path: &Path) -> Result<Extraction> {
        crate::docx::extract(path)
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<Extraction> {
        crate::docx::extract_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_extractor_name() {
        let extractor = DocxExtractor::new();
        assert_eq!(extractor.name(), "docx");
        assert!(extractor.supports_extension("Docx"));
    }
}
