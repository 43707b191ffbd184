// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
//
//   .txt / .docx files, or inline text
//       │
//       ▼
//   FileLoader / InlineSource  → Documents
//       │
//       ▼
//   combine_documents          → one string
//       │
//       ▼
//   Preprocessor               → cleaned text for the annotator

/// Reads .txt and .docx files (docx-rs) into Documents
pub mod loader;

/// Cleans and normalises raw extracted text
pub mod preprocessor;
