// ============================================================
// Layer 5 — MCQ Generation Engine
// ============================================================
// Runs the whole pipeline for one document:
//
//   Step 1: Annotate the text          (TextAnnotator)
//   Step 2: Build the global noun pool (noun_pool)
//   Step 3: Sample sentences           (sampler)
//   Step 4: Build one MCQ per sentence (question), dropping skips
//
// Results come back in sampling order. Single pass, no retries,
// nothing kept between calls.

use rand::Rng;

use crate::domain::mcq::Mcq;
use crate::domain::token::Sentence;
use crate::domain::traits::TextAnnotator;
use crate::mcq::noun_pool::build_global_pool;
use crate::mcq::question::QuestionBuilder;
use crate::mcq::sampler::sample_sentences;

/// Generates MCQs from raw text using an injected annotator.
pub struct McqGenerationEngine<A> {
    annotator: A,
}

impl<A: TextAnnotator> McqGenerationEngine<A> {
    pub fn new(annotator: A) -> Self {
        Self { annotator }
    }

    /// Generate up to `requested` questions using the thread-local RNG.
    pub fn generate(&self, text: &str, requested: usize) -> Vec<Mcq> {
        self.generate_with(text, requested, &mut rand::thread_rng())
    }

    /// Generate up to `requested` questions drawing from `rng`.
    /// Pass a seeded StdRng to make the output reproducible.
    pub fn generate_with<R: Rng + ?Sized>(&self, text: &str, requested: usize, rng: &mut R) -> Vec<Mcq> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let sentences: Vec<Sentence> = self
            .annotator
            .annotate(text)
            .into_iter()
            .filter(|s| !s.text.trim().is_empty())
            .collect();

        tracing::debug!("Annotated {} sentences", sentences.len());
        generate_from_sentences(&sentences, requested, rng)
    }
}

/// The annotator-free half of the pipeline, for callers that already
/// hold annotated sentences.
pub fn generate_from_sentences<R: Rng + ?Sized>(
    sentences: &[Sentence],
    requested: usize,
    rng:       &mut R,
) -> Vec<Mcq> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let global_pool = build_global_pool(sentences);
    tracing::debug!("Global noun pool holds {} lemmas", global_pool.len());

    let builder  = QuestionBuilder::new(&global_pool);
    let selected = sample_sentences(sentences, requested, rng);

    let mcqs: Vec<Mcq> = selected
        .into_iter()
        .filter_map(|sentence| builder.build(sentence, rng))
        .collect();

    tracing::debug!("Built {} questions ({} requested)", mcqs.len(), requested);
    mcqs
}
