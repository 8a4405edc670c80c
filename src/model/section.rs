//! Labeled sections of the output file.

/// A block of text written under a `=== TITLE ===` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub text: String,
}

impl Section {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// The header line, without line terminator.
    pub fn header(&self) -> String {
        format!("=== {} ===", self.title)
    }
}
