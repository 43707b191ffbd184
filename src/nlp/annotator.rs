// ============================================================
// Layer 4b — nlprule Annotator
// ============================================================
// Wraps an nlprule Tokenizer behind TextAnnotator.
//
//   Step 1: Split the text into paragraphs at blank lines, so a
//           heading never merges into the sentence below it
//   Step 2: Let nlprule split, tag, lemmatise and chunk each
//           paragraph
//   Step 3: Resolve every token to one tag + lemma (penn.rs)
//
// Sentences with nothing but punctuation are dropped.

use anyhow::Result;
use nlprule::Tokenizer;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::domain::token::{PartOfSpeech, Sentence, Token};
use crate::domain::traits::TextAnnotator;
use crate::nlp::penn::{resolve, Reading};

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("paragraph pattern is valid"));

/// English annotator backed by an nlprule tokenizer binary.
pub struct NlpruleAnnotator {
    tokenizer: Tokenizer,
}

impl NlpruleAnnotator {
    /// Load the tokenizer binary (en_tokenizer.bin) from disk.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading nlprule tokenizer from '{}'", path.display());
        let tokenizer = Tokenizer::new(path).map_err(|e| {
            anyhow::anyhow!(
                "Cannot load nlprule tokenizer from '{}': {} \
                 (download en_tokenizer.bin from the nlprule release matching the crate version)",
                path.display(),
                e
            )
        })?;
        Ok(Self::from_tokenizer(tokenizer))
    }

    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl TextAnnotator for NlpruleAnnotator {
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        // ── Step 1: Paragraphs ───────────────────────────────────────────────
        for paragraph in PARAGRAPH_BREAK.split(text) {
            if paragraph.trim().is_empty() {
                continue;
            }

            // ── Step 2: nlprule pipeline ─────────────────────────────────────
            for sentence in self.tokenizer.pipe(paragraph) {
                let sentence_text = sentence.text().trim();
                if sentence_text.is_empty() {
                    continue;
                }

                // ── Step 3: One reading per token ────────────────────────────
                let tokens: Vec<Token> = sentence
                    .tokens()
                    .iter()
                    .filter(|t| !t.word().text().as_str().trim().is_empty())
                    .map(|t| {
                        let surface = t.word().text().as_str();
                        let readings: Vec<Reading<'_>> = t
                            .word()
                            .tags()
                            .iter()
                            .map(|data| Reading {
                                pos:   data.pos().as_str(),
                                lemma: data.lemma().as_str(),
                            })
                            .collect();
                        let (pos, lemma) = resolve(surface, &readings, t.chunks());
                        Token::new(surface, lemma, pos)
                    })
                    .collect();

                if tokens.iter().all(|t| t.pos == PartOfSpeech::Punctuation) {
                    continue;
                }
                sentences.push(Sentence::new(sentence_text, tokens));
            }
        }

        tracing::trace!("Annotated {} sentences", sentences.len());
        sentences
    }
}
