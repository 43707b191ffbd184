// ============================================================
// Layer 5 — Question Generation Core
// ============================================================
// Turns annotated sentences into fill-in-the-blank MCQs.
//
//   Vec<Sentence>
//       │
//       ▼
//   noun_pool      → global pool (whole document), local pool (one sentence)
//       │
//       ▼
//   sampler        → up to N sentences, without replacement
//       │
//       ▼
//   question       → subject, blank, distractors, shuffled answers
//       │
//       ▼
//   engine         → ordered Vec<Mcq>, skips dropped
//
// Nothing in here can fail. Degenerate input produces fewer
// questions, never an error. Every random draw goes through an
// `R: rand::Rng` passed in by the caller, so a seeded StdRng
// makes a run reproducible.
//
// Reference: rand crate documentation (seq::SliceRandom, seq::index)

/// Order-preserving noun pools and most-common-lemma selection
pub mod noun_pool;

/// Uniform sentence sampling without replacement
pub mod sampler;

/// Builds one MCQ from one sentence
pub mod question;

/// Orchestrates the whole pipeline for one document
pub mod engine;

pub use engine::McqGenerationEngine;
pub use noun_pool::NounPool;
pub use question::QuestionBuilder;
