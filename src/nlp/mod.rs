// ============================================================
// Layer 4b — English Annotation
// ============================================================
// Implements the domain TextAnnotator trait on top of nlprule,
// a rule-based tokenizer that also tags, lemmatises and chunks:
//
//   raw text
//       │
//       ▼
//   paragraph split (regex, blank lines)
//       │
//       ▼
//   nlprule Tokenizer::pipe → sentences of tokens, each with
//                             candidate (POS, lemma) readings
//                             and chunk labels
//       │
//       ▼
//   penn::resolve          → one PartOfSpeech + lemma per token
//
// The tokenizer needs the English binary (en_tokenizer.bin)
// from the nlprule release matching the crate version.
//
// Reference: nlprule crate documentation

/// nlprule-backed TextAnnotator
pub mod annotator;

/// Penn Treebank tag mapping and reading selection
pub mod penn;

#[cfg(test)]
pub(crate) mod fixture;

pub use annotator::NlpruleAnnotator;
