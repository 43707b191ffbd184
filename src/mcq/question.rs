// ============================================================
// Layer 5 — Question Builder
// ============================================================
// Builds one MCQ from one sentence:
//
//   1. Local noun pool for the sentence
//   2. Subject: most frequent local noun (ties → first seen),
//      else a random global noun, else skip the sentence
//   3. Stem: first case-insensitive match of the subject → "______"
//   4. Distractor pool: local + global nouns minus the subject
//   5. Pad with "[distractor]" up to three entries
//   6. Draw three distractors as a uniform random subset
//   7. Shuffle subject + distractors into the four choices
//   8. Record the subject's letter
//
// Skipping (returning None) is the only non-producing outcome.

use indexmap::IndexSet;
use rand::{seq::SliceRandom, Rng};
use std::ops::Range;

use crate::domain::mcq::{
    AnswerLetter, Mcq, BLANK_MARKER, CHOICE_COUNT, DISTRACTOR_COUNT, SENTINEL_DISTRACTOR,
};
use crate::domain::token::Sentence;
use crate::mcq::noun_pool::{build_sentence_pool, most_common_lemma, NounPool};

/// Builds questions against one document's global noun pool.
pub struct QuestionBuilder<'p> {
    global_pool: &'p NounPool,
}

impl<'p> QuestionBuilder<'p> {
    pub fn new(global_pool: &'p NounPool) -> Self {
        Self { global_pool }
    }

    /// Build a question from `sentence`, or None when no subject can be found.
    pub fn build<R: Rng + ?Sized>(&self, sentence: &Sentence, rng: &mut R) -> Option<Mcq> {
        let local_pool = build_sentence_pool(sentence);

        let Some(subject) = self.choose_subject(sentence, rng) else {
            tracing::debug!("No noun available, skipping sentence: {:?}", sentence.text);
            return None;
        };
        tracing::trace!("Subject '{}' for sentence: {:?}", subject, sentence.text);

        let stem = blank_subject(&sentence.text, &subject);

        let mut pool = distractor_pool(&subject, &local_pool, self.global_pool);
        while pool.len() < DISTRACTOR_COUNT {
            pool.push(SENTINEL_DISTRACTOR.to_string());
        }

        // partial_shuffle yields a uniformly random subset of the requested size
        let (picked, _) = pool.partial_shuffle(rng, DISTRACTOR_COUNT);

        let mut candidates: [String; CHOICE_COUNT] = [
            subject,
            std::mem::take(&mut picked[0]),
            std::mem::take(&mut picked[1]),
            std::mem::take(&mut picked[2]),
        ];

        // Shuffle positions rather than strings so the subject is tracked by
        // identity even if a distractor happens to share its text.
        let mut order: [usize; CHOICE_COUNT] = [0, 1, 2, 3];
        order.shuffle(rng);

        let correct = order
            .iter()
            .position(|&i| i == 0)
            .and_then(AnswerLetter::from_index)?;
        let choices = order.map(|i| std::mem::take(&mut candidates[i]));

        Some(Mcq { stem, choices, correct })
    }

    /// Most frequent local noun, falling back to a random global noun.
    fn choose_subject<R: Rng + ?Sized>(&self, sentence: &Sentence, rng: &mut R) -> Option<String> {
        if let Some(lemma) = most_common_lemma(sentence) {
            return Some(lemma.to_string());
        }
        if self.global_pool.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.global_pool.len());
        self.global_pool.get(index).map(str::to_string)
    }
}

/// Replace the subject in `text` with the blank marker.
///
/// Tries a case-insensitive match first, then an exact one. When the
/// subject does not occur at all the sentence comes back unchanged.
pub fn blank_subject(text: &str, subject: &str) -> String {
    if let Some(span) = find_case_insensitive(text, subject) {
        let mut stem = String::with_capacity(text.len());
        stem.push_str(&text[..span.start]);
        stem.push_str(BLANK_MARKER);
        stem.push_str(&text[span.end..]);
        return stem;
    }
    if !subject.is_empty() && text.contains(subject) {
        return text.replacen(subject, BLANK_MARKER, 1);
    }
    text.to_string()
}

/// Byte range of the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Comparison is done on lowercased chars, and the returned range always
/// sits on char boundaries of the original haystack, so it is safe to
/// slice with even when lowercasing changes a character's byte length.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let target: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();

    'start: for (start, _) in haystack.char_indices() {
        let mut want = target.as_slice();
        for (offset, c) in haystack[start..].char_indices() {
            for lower in c.to_lowercase() {
                match want.split_first() {
                    Some((&expected, rest)) if expected == lower => want = rest,
                    _ => continue 'start,
                }
            }
            if want.is_empty() {
                return Some(start..start + offset + c.len_utf8());
            }
        }
        // Ran off the end of the haystack; later starts are even shorter.
        return None;
    }
    None
}

/// Local nouns then global nouns, without the subject (compared
/// case-insensitively) and without duplicates, in first-seen order.
fn distractor_pool(subject: &str, local: &NounPool, global: &NounPool) -> Vec<String> {
    let subject_lower = subject.to_lowercase();
    let pool: IndexSet<&str> = local
        .iter()
        .chain(global.iter())
        .filter(|lemma| lemma.to_lowercase() != subject_lower)
        .collect();
    pool.into_iter().map(str::to_string).collect()
}
