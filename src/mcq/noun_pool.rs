// ============================================================
// Layer 5 — Noun Pools
// ============================================================
// A NounPool is an ordered set of lemmas: insertion order is
// kept, duplicates are dropped (case-sensitively) and membership
// checks are O(1). IndexSet gives us all three at once.
//
// Two pools exist per run:
//   - global: every NOUN/PROPN lemma in the document
//   - local:  the same, for a single sentence

use indexmap::{IndexMap, IndexSet};

use crate::domain::token::Sentence;

/// Ordered, deduplicated set of noun lemmas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NounPool {
    lemmas: IndexSet<String>,
}

impl NounPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lemma unless it is empty or already present.
    /// Returns true when the pool grew.
    pub fn insert(&mut self, lemma: &str) -> bool {
        if lemma.is_empty() || self.lemmas.contains(lemma) {
            return false;
        }
        self.lemmas.insert(lemma.to_string())
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    /// Lemma at a given position in first-seen order
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lemmas.get_index(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lemmas.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for NounPool {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut pool = NounPool::new();
        for lemma in iter {
            pool.insert(lemma);
        }
        pool
    }
}

/// Pool of every noun lemma across the whole document.
pub fn build_global_pool(sentences: &[Sentence]) -> NounPool {
    sentences.iter().flat_map(Sentence::noun_lemmas).collect()
}

/// Pool of the noun lemmas inside one sentence.
pub fn build_sentence_pool(sentence: &Sentence) -> NounPool {
    sentence.noun_lemmas().collect()
}

/// The noun lemma that occurs most often in `sentence`.
///
/// Ties go to whichever lemma appeared first. The counting map
/// keeps first-seen order, and only a strictly greater count can
/// replace the current best, so the earliest lemma wins a tie.
pub fn most_common_lemma(sentence: &Sentence) -> Option<&str> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for lemma in sentence.noun_lemmas() {
        *counts.entry(lemma).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (lemma, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((lemma, count)),
        }
    }
    best.map(|(lemma, _)| lemma)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::{PartOfSpeech, Token};

    fn noun(lemma: &str) -> Token {
        Token::new(lemma, lemma, PartOfSpeech::Noun)
    }

    fn word(text: &str) -> Token {
        Token::new(text, text.to_lowercase(), PartOfSpeech::Other)
    }

    #[test]
    fn test_pool_keeps_first_seen_order_and_drops_duplicates() {
        let pool: NounPool = ["cat", "mat", "cat", "", "dog"].into_iter().collect();
        let lemmas: Vec<&str> = pool.iter().collect();
        assert_eq!(lemmas, vec!["cat", "mat", "dog"]);
    }

    #[test]
    fn test_pool_dedupe_is_case_sensitive() {
        let pool: NounPool = ["Apple", "apple"].into_iter().collect();
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("Apple"));
        assert_eq!(pool.get(1), Some("apple"));
    }

    #[test]
    fn test_global_pool_spans_sentences() {
        let sentences = vec![
            Sentence::new("The cat sat.", vec![word("The"), noun("cat"), word("sat")]),
            Sentence::new("A dog and a cat.", vec![word("A"), noun("dog"), word("and"), word("a"), noun("cat")]),
        ];
        let pool = build_global_pool(&sentences);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
        assert_eq!(build_sentence_pool(&sentences[1]).iter().collect::<Vec<_>>(), vec!["dog", "cat"]);
    }

    #[test]
    fn test_most_common_prefers_highest_count() {
        let s = Sentence::new("", vec![noun("mat"), noun("cat"), noun("cat")]);
        assert_eq!(most_common_lemma(&s), Some("cat"));
    }

    #[test]
    fn test_most_common_tie_goes_to_first_seen() {
        let s = Sentence::new("", vec![noun("dog"), noun("cat"), noun("cat"), noun("dog")]);
        assert_eq!(most_common_lemma(&s), Some("dog"));
    }

    #[test]
    fn test_most_common_without_nouns() {
        let s = Sentence::new("Run!", vec![word("Run"), word("!")]);
        assert_eq!(most_common_lemma(&s), None);
    }
}
