// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: load documents, clean them, hand
// the text to the annotator or the MCQ engine. No printing here
// (Layer 1) and no file formats here (Layers 4 and 6).

/// Question generation from documents
pub mod generate_use_case;

/// Annotation dump for inspecting the annotator
pub mod annotate_use_case;
