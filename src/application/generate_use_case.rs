// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates one question-generation run:
//
//   Step 1: Load documents            (Layer 4 - data)
//   Step 2: Combine and clean text    (Layer 4 - data)
//   Step 3: Generate MCQs             (Layer 5 - mcq)
//   Step 4: Number them from 1        (Layer 3 - domain)
//
// Rendering and writing the result is left to the CLI layer.

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::combine_documents;
use crate::domain::mcq::{number_mcqs, NumberedMcq};
use crate::domain::traits::{DocumentSource, TextAnnotator};
use crate::infra::render::OutputFormat;
use crate::mcq::McqGenerationEngine;

/// Question count used when the caller gives none, or gives garbage
pub const DEFAULT_QUESTION_COUNT: usize = 5;

// ─── Generation Configuration ────────────────────────────────────────────────
// Serialisable so a run's settings can be saved and replayed
// through infra::config_store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Upper bound on the number of questions (clamped to the sentence count)
    pub num_questions: usize,

    /// Fixed RNG seed for reproducible output; None draws from the thread RNG
    pub seed: Option<u64>,

    pub format: OutputFormat,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            num_questions: DEFAULT_QUESTION_COUNT,
            seed:          None,
            format:        OutputFormat::Text,
        }
    }
}

/// Interpret a raw, user-typed question count.
///
///   missing / blank / non-numeric → DEFAULT_QUESTION_COUNT
///   negative                      → 0 (no questions)
///   anything else                 → that number
pub fn parse_question_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return DEFAULT_QUESTION_COUNT;
    };
    match raw.parse::<i64>() {
        Ok(n) if n < 0 => 0,
        Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
        Err(_) => {
            tracing::warn!(
                "Question count '{}' is not a number, using {}",
                raw,
                DEFAULT_QUESTION_COUNT
            );
            DEFAULT_QUESTION_COUNT
        }
    }
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase<A> {
    config:       GenerateConfig,
    preprocessor: Preprocessor,
    engine:       McqGenerationEngine<A>,
}

impl<A: TextAnnotator> GenerateUseCase<A> {
    pub fn new(config: GenerateConfig, annotator: A) -> Self {
        Self {
            config,
            preprocessor: Preprocessor::new(),
            engine:       McqGenerationEngine::new(annotator),
        }
    }

    /// Run the pipeline against every document `source` provides.
    pub fn execute(&self, source: &dyn DocumentSource) -> Result<Vec<NumberedMcq>> {
        let cfg = &self.config;

        // ── Step 1: Load documents ────────────────────────────────────────────
        let docs = source.load_all()?;

        // ── Step 2: Combine and clean ─────────────────────────────────────────
        let text = self.preprocessor.clean(&combine_documents(&docs));
        tracing::info!(
            "Generating up to {} questions from {} documents ({} chars)",
            cfg.num_questions,
            docs.len(),
            text.len()
        );

        // ── Step 3: Generate ──────────────────────────────────────────────────
        let mcqs = match cfg.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.engine.generate_with(&text, cfg.num_questions, &mut rng)
            }
            None => self.engine.generate(&text, cfg.num_questions),
        };

        if mcqs.len() < cfg.num_questions {
            tracing::info!(
                "Generated {} of {} requested questions (not enough usable sentences)",
                mcqs.len(),
                cfg.num_questions
            );
        } else {
            tracing::info!("Generated {} questions", mcqs.len());
        }

        // ── Step 4: Number for display ────────────────────────────────────────
        Ok(number_mcqs(mcqs))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::InlineSource;
    use crate::domain::document::Document;
    use crate::domain::mcq::SENTINEL_DISTRACTOR;
    use crate::nlp::fixture::KeywordAnnotator;

    fn seeded(num_questions: usize, seed: u64) -> GenerateUseCase<KeywordAnnotator> {
        let config = GenerateConfig {
            num_questions,
            seed: Some(seed),
            ..GenerateConfig::default()
        };
        let nouns = ["cat", "mat", "dog", "rain", "volcano", "magma", "surface", "lava", "rock", "ash", "chapter"];
        GenerateUseCase::new(config, KeywordAnnotator::new(&nouns))
    }

    /// Several documents at once, as a FileLoader would return them
    struct Documents(Vec<Document>);

    impl DocumentSource for Documents {
        fn load_all(&self) -> Result<Vec<Document>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_parse_question_count() {
        assert_eq!(parse_question_count(None), 5);
        assert_eq!(parse_question_count(Some("")), 5);
        assert_eq!(parse_question_count(Some("ten")), 5);
        assert_eq!(parse_question_count(Some(" 3 ")), 3);
        assert_eq!(parse_question_count(Some("0")), 0);
        assert_eq!(parse_question_count(Some("-4")), 0);
    }

    #[test]
    fn test_numbered_output_for_scenario_text() {
        let source = InlineSource::new("The cat sat on the mat. The dog chased the cat.");
        let result = seeded(2, 1).execute(&source).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].index, 1);
        assert_eq!(result[1].index, 2);
    }

    #[test]
    fn test_empty_input_yields_no_questions() {
        let result = seeded(5, 1).execute(&InlineSource::new("")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_requested_yields_no_questions() {
        let source = InlineSource::new("The cat sat on the mat.");
        assert!(seeded(0, 1).execute(&source).unwrap().is_empty());
    }

    #[test]
    fn test_single_noun_document() {
        let result = seeded(5, 2).execute(&InlineSource::new("Rain fell.")).unwrap();
        assert_eq!(result.len(), 1);
        let mcq = &result[0].mcq;
        assert_eq!(mcq.correct_choice(), "rain");
        assert_eq!(mcq.choices.iter().filter(|c| *c == SENTINEL_DISTRACTOR).count(), 3);
    }

    #[test]
    fn test_seed_makes_runs_repeatable() {
        let text = "Volcanoes form where magma reaches the surface. \
                    Lava cools into rock. \
                    Ash clouds can disrupt flights across a continent.";
        let a = seeded(3, 99).execute(&InlineSource::new(text)).unwrap();
        let b = seeded(3, 99).execute(&InlineSource::new(text)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrapped_lines_are_joined_before_annotation() {
        let source = InlineSource::new("The cat sat\non the mat.");
        let result = seeded(1, 5).execute(&source).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].mcq.stem, "The ______ sat on the mat.");
    }

    #[test]
    fn test_document_boundary_stays_a_sentence_boundary() {
        // The first file has no closing period; it must not swallow
        // the first sentence of the second file.
        let source = Documents(vec![
            Document::new("a.txt", "Chapter One"),
            Document::new("b.txt", "The cat sat on the mat."),
        ]);
        let result = seeded(5, 3).execute(&source).unwrap();

        let mut stems: Vec<&str> = result.iter().map(|n| n.mcq.stem.as_str()).collect();
        stems.sort();
        assert_eq!(stems, vec!["The ______ sat on the mat.", "______ One"]);
    }
}
