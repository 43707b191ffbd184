// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A single piece of input text plus a label saying where it
// came from ("inline", a filename, ...). Documents are built
// fresh for every generation run and dropped afterwards.

use serde::{Deserialize, Serialize};

/// A raw document handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The filename, or "inline" for text passed on the command line
    pub source: String,

    /// The extracted plain text. Empty when extraction failed.
    pub text: String,
}

impl Document {
    /// Create a new Document with a source label and text content.
    ///
    /// Example:
    ///   let doc = Document::new("notes.txt", "The cat sat on the mat.");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Convenience constructor for text typed directly by the user
    pub fn inline(text: impl Into<String>) -> Self {
        Self::new("inline", text)
    }

    /// True when the document carries no usable text at all
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Join several documents into the single text a generation run consumes.
/// Each document starts a new paragraph; blank documents are skipped.
pub fn combine_documents(docs: &[Document]) -> String {
    docs.iter()
        .filter(|d| !d.is_blank())
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
