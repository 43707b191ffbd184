// ============================================================
// Layer 3 — Multiple-Choice Question Domain Type
// ============================================================
// One generated question:
//
//   stem:    "The ______ sat on the mat."
//   choices: ["dog", "cat", "mat", "[distractor]"]
//   correct: B
//
// Invariant: choices[correct.index()] is the subject lemma the
// stem was built from. The choice array is fixed at four so the
// type itself rules out short or long answer lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that replaces the subject inside the stem
pub const BLANK_MARKER: &str = "______";

/// Filler used when the document has too few distinct nouns
pub const SENTINEL_DISTRACTOR: &str = "[distractor]";

/// Every question offers exactly this many choices
pub const CHOICE_COUNT: usize = 4;

/// Number of wrong answers offered next to the subject
pub const DISTRACTOR_COUNT: usize = CHOICE_COUNT - 1;

/// Letter identifying one of the four choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; CHOICE_COUNT] = [Self::A, Self::B, Self::C, Self::D];

    /// 0 → A, 1 → B, 2 → C, 3 → D. Anything else has no letter.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this letter in the choice array
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A fill-in-the-blank question with four shuffled choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    /// Sentence text with the subject replaced by BLANK_MARKER
    pub stem: String,

    /// Subject plus three distractors, in display order
    pub choices: [String; CHOICE_COUNT],

    /// Which choice is the subject
    pub correct: AnswerLetter,
}

impl Mcq {
    /// The text of the correct choice
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct.index()]
    }

    /// Iterate `(letter, choice)` pairs in display order
    pub fn lettered_choices(&self) -> impl Iterator<Item = (AnswerLetter, &str)> + '_ {
        AnswerLetter::ALL
            .iter()
            .copied()
            .zip(self.choices.iter().map(String::as_str))
    }
}

/// An MCQ with its 1-based display position, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedMcq {
    pub index: usize,

    #[serde(flatten)]
    pub mcq: Mcq,
}

/// Attach display numbers 1, 2, 3, ... in result order.
pub fn number_mcqs(mcqs: Vec<Mcq>) -> Vec<NumberedMcq> {
    mcqs.into_iter()
        .enumerate()
        .map(|(i, mcq)| NumberedMcq { index: i + 1, mcq })
        .collect()
}
