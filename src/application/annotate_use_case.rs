// ============================================================
// Layer 2 — AnnotateUseCase
// ============================================================
// Shows what the generator sees: the cleaned text split into
// sentences, each token's lemma and tag, and the document-wide
// noun pool that distractors are drawn from.

use anyhow::Result;
use serde::Serialize;

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::combine_documents;
use crate::domain::token::Sentence;
use crate::domain::traits::{DocumentSource, TextAnnotator};
use crate::mcq::noun_pool::build_global_pool;

/// Annotation of a whole input, ready for printing
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationReport {
    pub sentences: Vec<Sentence>,
    pub noun_pool: Vec<String>,
}

impl AnnotationReport {
    /// One block per sentence: the text, then `text/lemma/TAG` tokens
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, sentence) in self.sentences.iter().enumerate() {
            out.push_str(&format!("[{}] {}\n", i + 1, sentence.text));
            let tokens: Vec<String> = sentence
                .tokens
                .iter()
                .map(|t| format!("{}/{}/{}", t.text, t.lemma, t.pos))
                .collect();
            out.push_str(&format!("    {}\n", tokens.join(" ")));
        }
        out.push_str(&format!("Noun pool ({}): {}\n", self.noun_pool.len(), self.noun_pool.join(", ")));
        out
    }
}

pub struct AnnotateUseCase<A> {
    preprocessor: Preprocessor,
    annotator:    A,
}

impl<A: TextAnnotator> AnnotateUseCase<A> {
    pub fn new(annotator: A) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            annotator,
        }
    }

    pub fn execute(&self, source: &dyn DocumentSource) -> Result<AnnotationReport> {
        let docs      = source.load_all()?;
        let text      = self.preprocessor.clean(&combine_documents(&docs));
        let sentences = self.annotator.annotate(&text);
        let noun_pool = build_global_pool(&sentences).iter().map(str::to_string).collect();

        tracing::info!("Annotated {} sentences", sentences.len());
        Ok(AnnotationReport { sentences, noun_pool })
    }
}
