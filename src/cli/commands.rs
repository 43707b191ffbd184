// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `generate` and `annotate`,
// plus the input flags they share.
//
// The question count is taken as a raw string so
// that "ten" or "-3" reach the lenient parser in Layer 2
// instead of being rejected by clap.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use crate::application::generate_use_case::{parse_question_count, GenerateConfig};
use crate::data::loader::{FileLoader, InlineSource};
use crate::domain::traits::DocumentSource;
use crate::infra::config_store::ConfigStore;
use crate::infra::render::OutputFormat;
use crate::nlp::NlpruleAnnotator;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate fill-in-the-blank multiple-choice questions
    Generate(GenerateArgs),

    /// Show sentences, tokens and the noun pool the generator works from
    Annotate(AnnotateArgs),
}

/// Where the text comes from. Files win over --text; with neither,
/// text is read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to generate questions from
    #[arg(long)]
    pub text: Option<String>,

    /// .txt or .docx file, or a directory of them (repeatable)
    #[arg(long = "file", short = 'f')]
    pub files: Vec<PathBuf>,
}

impl InputArgs {
    pub fn into_source(self) -> Result<Box<dyn DocumentSource>> {
        if !self.files.is_empty() {
            return Ok(Box::new(FileLoader::new(self.files)));
        }
        let text = match self.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read text from stdin")?;
                buf
            }
        };
        Ok(Box::new(InlineSource::new(text)))
    }
}

/// The nlprule English tokenizer binary both subcommands annotate with.
#[derive(Args, Debug, Clone)]
pub struct AnnotatorArgs {
    /// Path to en_tokenizer.bin from the nlprule release
    #[arg(long, env = "DOC_MCQ_TOKENIZER", default_value = "en_tokenizer.bin")]
    pub tokenizer: PathBuf,
}

impl AnnotatorArgs {
    pub fn load(&self) -> Result<NlpruleAnnotator> {
        NlpruleAnnotator::load(&self.tokenizer)
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub annotator: AnnotatorArgs,

    /// How many questions to generate (non-numeric → 5, negative → 0)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub num_questions: Option<String>,

    /// Seed for reproducible questions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: text, json or csv
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Write the rendered questions here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Load settings from a JSON config file; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save the effective settings to a JSON config file
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Config file (or defaults) first, then explicit flags on top.
    pub fn resolve_config(&self) -> Result<GenerateConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::new(path).load()?,
            None => GenerateConfig::default(),
        };

        if self.num_questions.is_some() {
            cfg.num_questions = parse_question_count(self.num_questions.as_deref());
        }
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(format) = self.format {
            cfg.format = format;
        }
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub annotator: AnnotatorArgs,

    /// Print the annotation as JSON
    #[arg(long)]
    pub json: bool,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Generate(args) => args,
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = generate_args(&["doc-mcq", "generate", "--text", "Rain fell."]);
        assert_eq!(args.resolve_config().unwrap(), GenerateConfig::default());
    }

    #[test]
    fn test_lenient_question_count() {
        let args = generate_args(&["doc-mcq", "generate", "-n", "many"]);
        assert_eq!(args.resolve_config().unwrap().num_questions, 5);

        let args = generate_args(&["doc-mcq", "generate", "-n", "-2"]);
        assert_eq!(args.resolve_config().unwrap().num_questions, 0);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        ConfigStore::new(&path)
            .save(&GenerateConfig { num_questions: 9, seed: Some(4), format: OutputFormat::Csv })
            .unwrap();

        let path_str = path.to_str().unwrap();
        let args = generate_args(&["doc-mcq", "generate", "--config", path_str, "--format", "json"]);
        let cfg  = args.resolve_config().unwrap();

        assert_eq!(cfg.num_questions, 9);
        assert_eq!(cfg.seed, Some(4));
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn test_repeated_file_flags() {
        let args = generate_args(&["doc-mcq", "generate", "-f", "a.txt", "--file", "b.docx"]);
        assert_eq!(args.input.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.docx")]);
    }

    #[test]
    fn test_tokenizer_path_flag() {
        let args = generate_args(&["doc-mcq", "generate", "--tokenizer", "models/en_tokenizer.bin"]);
        assert_eq!(args.annotator.tokenizer, PathBuf::from("models/en_tokenizer.bin"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["doc-mcq", "generate", "--format", "xml"]).is_err());
    }
}
