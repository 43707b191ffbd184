// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two collaborators the generator depends on but does not
// own. The application layer only ever sees these traits:
//
//   - DocumentSource → FileLoader, InlineSource (data layer)
//   - TextAnnotator  → NlpruleAnnotator (nlp layer)
//
// Randomness is the third injected capability; it is any
// `rand::Rng`, so it needs no trait of its own here.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::document::Document;
use crate::domain::token::Sentence;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce documents to generate questions from.
pub trait DocumentSource {
    /// Load every available document. A single unreadable file should
    /// come back as an empty Document rather than an Err.
    fn load_all(&self) -> Result<Vec<Document>>;
}

// ─── TextAnnotator ────────────────────────────────────────────────────────────
/// Splits text into sentences of lemmatised, POS-tagged tokens.
pub trait TextAnnotator {
    /// Annotate `text`. Empty or non-linguistic input yields an empty Vec,
    /// never a failure. Returned sentences are trimmed and non-empty.
    fn annotate(&self, text: &str) -> Vec<Sentence>;
}
