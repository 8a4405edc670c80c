//! Extracted text and where it came from.

use serde::{Deserialize, Serialize};

/// Kind of document text was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Name of the unit the document is split into for extraction.
    pub fn unit_name(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pages",
            DocumentKind::Docx => "paragraphs",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
        }
    }
}

/// Text extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Source document kind
    pub kind: DocumentKind,

    /// Pages (PDF) or paragraphs (DOCX) the text was assembled from
    pub units: usize,

    /// The concatenated text
    pub text: String,
}

impl Extraction {
    /// Text assembled from `pages` PDF pages.
    pub fn pdf(text: String, pages: usize) -> Self {
        Self {
            kind: DocumentKind::Pdf,
            units: pages,
            text,
        }
    }

    /// Text assembled from `paragraphs` DOCX paragraphs.
    pub fn docx(text: String, paragraphs: usize) -> Self {
        Self {
            kind: DocumentKind::Docx,
            units: paragraphs,
            text,
        }
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
