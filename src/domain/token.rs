// ============================================================
// Layer 3 — Annotated Text Types
// ============================================================
// What a TextAnnotator hands back:
//
//   Sentence
//     ├── text   (trimmed span of the original document)
//     └── tokens: Vec<Token>
//           └── Token { text, lemma, pos }
//
// Only NOUN and PROPN tokens take part in question generation;
// the remaining tags exist so the annotator can be inspected
// and tested on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech tag, named after the Universal Dependencies tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    #[serde(rename = "PROPN")]
    ProperNoun,
    Verb,
    #[serde(rename = "AUX")]
    Auxiliary,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    Adposition,
    #[serde(rename = "CCONJ")]
    Conjunction,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PUNCT")]
    Punctuation,
    #[serde(rename = "X")]
    Other,
}

impl PartOfSpeech {
    /// Short tag label, e.g. "NOUN" or "PROPN"
    pub fn label(self) -> &'static str {
        match self {
            Self::Noun        => "NOUN",
            Self::ProperNoun  => "PROPN",
            Self::Verb        => "VERB",
            Self::Auxiliary   => "AUX",
            Self::Adjective   => "ADJ",
            Self::Adverb      => "ADV",
            Self::Pronoun     => "PRON",
            Self::Determiner  => "DET",
            Self::Adposition  => "ADP",
            Self::Conjunction => "CCONJ",
            Self::Particle    => "PART",
            Self::Numeral     => "NUM",
            Self::Punctuation => "PUNCT",
            Self::Other       => "X",
        }
    }

    /// NOUN or PROPN — the only tags that can become subjects or distractors
    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One annotated word or punctuation mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text exactly as it appears in the sentence
    pub text: String,

    /// Normalised base form ("cats" → "cat")
    pub lemma: String,

    pub pos: PartOfSpeech,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text:  text.into(),
            lemma: lemma.into(),
            pos,
        }
    }
}

/// A sentence and its tokens. Immutable once the annotator has produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text, used to build the question stem
    pub text: String,

    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Lemmas of every NOUN/PROPN token in sentence order, duplicates included.
    /// Empty lemmas are dropped here so nothing downstream has to care.
    pub fn noun_lemmas(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens
            .iter()
            .filter(|t| t.pos.is_nominal())
            .map(|t| t.lemma.as_str())
            .filter(|lemma| !lemma.is_empty())
    }
}
