// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans extracted text before annotation. Text copied out of
// Word files or hard-wrapped .txt files tends to contain:
//
//   - non-breaking / zero-width spaces and byte order marks
//   - Windows line endings
//   - words hyphenated across a line break ("infor-\nmation")
//   - sentences hard-wrapped over several lines
//
// Cleaning steps (applied in order):
//   1. Normalise whitespace and control characters
//   2. Re-join words hyphenated across line breaks
//   3. Collapse runs of spaces and trim every line
//   4. Join wrapped lines into one line per paragraph,
//      keeping a blank line between paragraphs
//
// Paragraph breaks matter downstream: the annotator
// treats a blank line as a sentence boundary, so a heading
// never gets glued to the sentence below it.
//
// Reference: Rust Book §8 (Strings in Rust)

use once_cell::sync::Lazy;
use regex::Regex;

/// A letter, a hyphen at the end of a line, and a lowercase letter
/// opening the next one
static HYPHEN_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\p{L})-[ ]*\n[ ]*(\p{Ll})").expect("hyphen-break pattern is valid")
});

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("space pattern is valid"));

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw text string for annotation.
    pub fn clean(&self, text: &str) -> String {
        let normalised = normalise_chars(text);
        let dehyphenated = join_hyphenated_breaks(&normalised);

        // ── Steps 3 + 4: per-line cleanup, then paragraph joining ────────────
        let mut paragraphs: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in dehyphenated.lines() {
            let line = collapse_spaces(line);
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        paragraphs.join("\n\n")
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Step 1: map awkward characters to plain spaces and newlines.
fn normalise_chars(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            '\r' => '\n',
            c if c.is_control() && c != '\n' => ' ',
            c => c,
        })
        .collect()
}

/// Step 2: "infor-\nmation" → "information".
/// A capitalised continuation is probably a real dash and is left alone.
fn join_hyphenated_breaks(text: &str) -> String {
    HYPHEN_BREAK.replace_all(text, "$1$2").into_owned()
}

/// Step 3: collapse runs of spaces into one and trim the line.
fn collapse_spaces(line: &str) -> String {
    SPACE_RUN.replace_all(line.trim(), " ").into_owned()
}
