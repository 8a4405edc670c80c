//! Extractor registry dispatching on file extension or detected format.
//!
//! Both document formats sit behind the [`TextExtractor`] trait so callers
//! that only hold a path can get its text without knowing the format.
//!
//! # Example
//!
//! ```no_run
//! use doccat::extract::ExtractorRegistry;
//! use std::path::Path;
//!
//! fn main() -> doccat::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let extraction = registry.extract(Path::new("base_case.docx"))?;
//!     println!("{}", extraction.text);
//!     Ok(())
//! }
//! ```

mod docx;
mod pdf;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::Extraction;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for document text extractors.
///
/// Implement this trait to add support for a new document format.
pub trait TextExtractor: Send + Sync {
    /// Supported file extensions, lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text from a file at the given path.
    fn extract(&self, path: &Path) -> Result<Extraction>;

    /// Extract text from bytes.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<Extraction>;

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to extractors.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
    by_name: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the PDF and DOCX extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry
    }

    /// Register an extractor for all its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors
                .insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Extract a file using the extractor registered for its extension.
    pub fn extract(&self, path: &Path) -> Result<Extraction> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other("File has no extension".into()))?;

        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedExtension(ext.to_string()))?;

        extractor.extract(path)
    }

    /// Extract a file using the extractor for its detected format,
    /// ignoring the extension.
    pub fn extract_detected(&self, path: &Path) -> Result<Extraction> {
        let format = detect_format_from_path(path)?;
        let extractor = self
            .get_by_extension(format.extension())
            .ok_or_else(|| Error::UnsupportedExtension(format.extension().to_string()))?;
        extractor.extract(path)
    }

    /// Extract bytes using the specified extension to choose the extractor.
    pub fn extract_bytes(&self, bytes: &[u8], ext: &str) -> Result<Extraction> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedExtension(ext.to_string()))?;

        extractor.extract_bytes(bytes)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
