// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// system works with: documents, annotated sentences and the
// multiple-choice questions produced from them.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - NO annotation heuristics (those live in `nlp`)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A loaded document from disk or from inline text
pub mod document;

// Sentences, tokens and part-of-speech tags
pub mod token;

// The multiple-choice question record and its answer letter
pub mod mcq;

// Seams implemented by the data and nlp layers
pub mod traits;
