// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to Layer 2.
//
//   1. `generate` — build MCQs from text, files or stdin
//   2. `annotate` — print what the annotator sees
//
// Rendered output goes to stdout (or --output); logs go to stderr.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnnotateArgs, Commands, GenerateArgs};

use crate::application::annotate_use_case::AnnotateUseCase;
use crate::application::generate_use_case::GenerateUseCase;
use crate::infra::config_store::ConfigStore;
use crate::infra::render::{render, to_json, ReportWriter};

#[derive(Parser, Debug)]
#[command(
    name = "doc-mcq",
    version,
    about = "Generate fill-in-the-blank multiple-choice questions from documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => run_generate(args),
            Commands::Annotate(args) => run_annotate(args),
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let cfg = args.resolve_config()?;

    if let Some(path) = &args.save_config {
        ConfigStore::new(path).save(&cfg)?;
    }

    let annotator = args.annotator.load()?;
    let format    = cfg.format;
    let source    = args.input.into_source()?;
    let use_case  = GenerateUseCase::new(cfg, annotator);
    let mcqs      = use_case.execute(source.as_ref())?;

    ReportWriter::new(args.output).write(&render(&mcqs, format)?)
}

fn run_annotate(args: AnnotateArgs) -> Result<()> {
    let annotator = args.annotator.load()?;
    let source    = args.input.into_source()?;
    let report    = AnnotateUseCase::new(annotator).execute(source.as_ref())?;

    let content = if args.json {
        to_json(&report)?
    } else {
        report.to_text()
    };
    ReportWriter::new(None).write(&content)
}
