// Test-only annotator: regex sentence/word splitting and a fixed
// noun list, so core and use-case tests don't need the nlprule binary.

use regex::Regex;

use crate::domain::token::{PartOfSpeech, Sentence, Token};
use crate::domain::traits::TextAnnotator;

pub struct KeywordAnnotator {
    nouns:  Vec<String>,
    proper: Vec<String>,
}

impl KeywordAnnotator {
    /// `nouns` are lowercase singular lemmas; a trailing "s" on the
    /// surface form is stripped when matching.
    pub fn new(nouns: &[&str]) -> Self {
        Self {
            nouns:  nouns.iter().map(|n| n.to_string()).collect(),
            proper: Vec::new(),
        }
    }

    pub fn with_proper(mut self, names: &[&str]) -> Self {
        self.proper = names.iter().map(|n| n.to_string()).collect();
        self
    }

    fn tag(&self, word: &str) -> Token {
        let lower = word.to_lowercase();
        if self.proper.iter().any(|p| p == word) {
            return Token::new(word, word, PartOfSpeech::ProperNoun);
        }
        if self.nouns.contains(&lower) {
            return Token::new(word, lower, PartOfSpeech::Noun);
        }
        if let Some(singular) = lower.strip_suffix('s').filter(|s| self.nouns.iter().any(|n| n.as_str() == *s)) {
            return Token::new(word, singular, PartOfSpeech::Noun);
        }
        if !word.chars().any(char::is_alphanumeric) {
            return Token::new(word, word, PartOfSpeech::Punctuation);
        }
        Token::new(word, lower, PartOfSpeech::Other)
    }
}

impl TextAnnotator for KeywordAnnotator {
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        let sentence_re = Regex::new(r"[^.!?\n]+[.!?]*").unwrap();
        let word_re = Regex::new(r"\w+(?:'\w+)?|[^\w\s]").unwrap();

        sentence_re
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(|s| Sentence::new(s, word_re.find_iter(s).map(|w| self.tag(w.as_str())).collect()))
            .filter(|s| s.tokens.iter().any(|t| t.pos != PartOfSpeech::Punctuation))
            .collect()
    }
}
