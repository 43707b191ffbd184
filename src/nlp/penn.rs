// ============================================================
// Layer 4b — Penn Tag Resolution
// ============================================================
// nlprule hands back every reading its dictionary knows for a
// word ("release" → NN and VB/VBP) plus the chunk the word sits
// in ("B-NP-singular", "B-VP", ...). The chunk decides between
// readings:
//
//   inside a noun phrase  → first nominal reading
//   anywhere else         → first non-nominal reading
//
// Words the dictionary does not know get no readings at all;
// inside a noun phrase they become nouns (capitalised → PROPN).

use crate::domain::token::PartOfSpeech;

/// Tags that only mark sentence edges
const SENTENCE_MARKERS: &[&str] = &["SENT_START", "SENT_END", "PARA_END"];

/// One candidate analysis of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading<'a> {
    pub pos:   &'a str,
    pub lemma: &'a str,
}

/// Map a Penn Treebank tag (with LanguageTool extensions such as
/// `NN:UN`) onto the coarse tag set.
pub fn pos_from_penn(tag: &str) -> PartOfSpeech {
    match tag {
        "PRP$" | "WP$" | "DT" | "PDT" | "WDT" => PartOfSpeech::Determiner,
        "PRP" | "WP" | "EX"                  => PartOfSpeech::Pronoun,
        "MD"                                 => PartOfSpeech::Auxiliary,
        "IN"                                 => PartOfSpeech::Adposition,
        "CC"                                 => PartOfSpeech::Conjunction,
        "TO" | "RP" | "POS"                  => PartOfSpeech::Particle,
        "CD"                                 => PartOfSpeech::Numeral,
        "RB" | "RBR" | "RBS" | "WRB"         => PartOfSpeech::Adverb,
        "PCT" | "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "#" | "$" => {
            PartOfSpeech::Punctuation
        }
        t if t.starts_with("NNP") => PartOfSpeech::ProperNoun,
        t if t.starts_with("NN")  => PartOfSpeech::Noun,
        t if t.starts_with("VB")  => PartOfSpeech::Verb,
        t if t.starts_with("JJ")  => PartOfSpeech::Adjective,
        _                         => PartOfSpeech::Other,
    }
}

fn in_noun_phrase(chunks: &[String]) -> bool {
    chunks.iter().any(|c| c.contains("NP"))
}

/// Choose the tag and lemma for a token.
///
/// Common-noun lemmas are lowercased so "Cats" and "cats" land on
/// the same pool entry; proper nouns keep their surface form.
pub fn resolve(text: &str, readings: &[Reading<'_>], chunks: &[String]) -> (PartOfSpeech, String) {
    let noun_phrase = in_noun_phrase(chunks);

    let tagged: Vec<(PartOfSpeech, &str)> = readings
        .iter()
        .filter(|r| !r.pos.is_empty() && !SENTENCE_MARKERS.contains(&r.pos))
        .map(|r| (pos_from_penn(r.pos), r.lemma))
        .collect();

    let picked = if noun_phrase {
        tagged.iter().find(|(pos, _)| pos.is_nominal())
    } else {
        tagged.iter().find(|(pos, _)| !pos.is_nominal())
    }
    .or(tagged.first());

    let (pos, lemma) = match picked {
        Some(&(pos, lemma)) => (pos, lemma),
        None => (guess_unknown(text, noun_phrase), ""),
    };

    let lemma = match pos {
        PartOfSpeech::ProperNoun => text.to_string(),
        _ if lemma.is_empty()    => text.to_lowercase(),
        _                        => lemma.to_lowercase(),
    };
    (pos, lemma)
}

fn guess_unknown(text: &str, noun_phrase: bool) -> PartOfSpeech {
    if !text.chars().any(char::is_alphanumeric) {
        PartOfSpeech::Punctuation
    } else if text.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',')) {
        PartOfSpeech::Numeral
    } else if !noun_phrase {
        PartOfSpeech::Other
    } else if text.chars().next().is_some_and(char::is_uppercase) {
        PartOfSpeech::ProperNoun
    } else {
        PartOfSpeech::Noun
    }
}
