// ============================================================
// Layer 5 — Sentence Sampler
// ============================================================
// Picks which sentences become questions. The result is in the
// order the draw produced, not document order, so a caller that
// asks for every sentence still gets them shuffled.

use rand::Rng;

use crate::domain::token::Sentence;

/// Choose `min(requested, sentences.len())` distinct sentences uniformly at random.
pub fn sample_sentences<'a, R: Rng + ?Sized>(
    sentences: &'a [Sentence],
    requested: usize,
    rng:       &mut R,
) -> Vec<&'a Sentence> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let amount = requested.min(sentences.len());

    // index::sample returns the drawn positions already shuffled
    rand::seq::index::sample(rng, sentences.len(), amount)
        .into_iter()
        .map(|i| &sentences[i])
        .collect()
}
