// Layered layout, outermost first:
//
//   cli          — argument parsing and routing
//   application  — use cases (generate, annotate)
//   domain       — documents, tokens, MCQ records, trait seams
//   data         — file loading and text cleanup
//   nlp          — nlprule-backed English annotator
//   mcq          — the question-generation core
//   infra        — config persistence and output rendering

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod mcq;
pub mod nlp;
