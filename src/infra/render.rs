// ============================================================
// Layer 6 — Question Renderer
// ============================================================
// Formats numbered MCQs for output. Three formats:
//
//   text — for reading in a terminal
//
//     1. The ______ sat on the mat.
//        A) dog
//        B) cat
//        C) mat
//        D) [distractor]
//        Answer: B
//
//   json — the NumberedMcq records, pretty-printed
//   csv  — index,stem,a,b,c,d,answer (RFC 4180 quoting)
//
// ReportWriter then sends the rendered string to stdout or a file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Write as _},
    fs,
    io::Write,
    path::PathBuf,
    str::FromStr,
};

use crate::domain::mcq::NumberedMcq;

/// Printed instead of an empty list in text mode
pub const NO_QUESTIONS_MESSAGE: &str = "No questions could be generated from the given text.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json"         => Ok(Self::Json),
            "csv"          => Ok(Self::Csv),
            other          => Err(format!("unknown format '{other}' (expected text, json or csv)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv  => "csv",
        };
        f.write_str(name)
    }
}

/// Render `mcqs` in the requested format.
pub fn render(mcqs: &[NumberedMcq], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(mcqs)),
        OutputFormat::Json => to_json(mcqs),
        OutputFormat::Csv  => Ok(render_csv(mcqs)),
    }
}

/// Pretty JSON with a trailing newline, like the other formats.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn render_text(mcqs: &[NumberedMcq]) -> String {
    if mcqs.is_empty() {
        return format!("{NO_QUESTIONS_MESSAGE}\n");
    }

    let mut out = String::new();
    for (i, numbered) in mcqs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}. {}", numbered.index, numbered.mcq.stem);
        for (letter, choice) in numbered.mcq.lettered_choices() {
            let _ = writeln!(out, "   {letter}) {choice}");
        }
        let _ = writeln!(out, "   Answer: {}", numbered.mcq.correct);
    }
    out
}

fn render_csv(mcqs: &[NumberedMcq]) -> String {
    let mut out = String::from("index,stem,a,b,c,d,answer\n");
    for numbered in mcqs {
        let mut row = vec![numbered.index.to_string(), csv_field(&numbered.mcq.stem)];
        row.extend(numbered.mcq.choices.iter().map(|c| csv_field(c)));
        row.push(numbered.mcq.correct.to_string());
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ─── ReportWriter ─────────────────────────────────────────────────────────────
/// Writes rendered output to a file, or to stdout when no path is set.
pub struct ReportWriter {
    path: Option<PathBuf>,
}

impl ReportWriter {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn write(&self, content: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                fs::write(path, content)
                    .with_context(|| format!("Cannot write output to '{}'", path.display()))?;
                tracing::info!("Wrote output to '{}'", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes()).context("Cannot write to stdout")?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
