//! CLI command definitions and handlers.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use newsai_core::{Analyzer, SentimentClassifier, SeverityLexicon};
use newsai_model::{InferenceClient, LexiconClassifier};

pub mod analyze;
pub mod serve;

/// NewsAI - News Sentiment & Severity Analysis
#[derive(Parser)]
#[command(name = "newsai")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the analysis HTTP server
    Serve(serve::ServeArgs),

    /// Analyze a piece of text from the command line
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
        }
    }
}

/// Classifier backend selection.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Hosted inference server over HTTP
    Http,
    /// Offline keyword lexicon
    Lexicon,
}

/// Options shared by commands that need an analyzer.
#[derive(clap::Args)]
pub struct ModelArgs {
    /// Classifier backend
    #[arg(long, value_enum, default_value = "http")]
    pub backend: Backend,

    /// Inference server URL (http backend)
    #[arg(long, env = "NEWSAI_MODEL_URL", default_value = newsai_model::DEFAULT_INFERENCE_URL)]
    pub model_url: String,

    /// TOML file overriding the severity keyword lists
    #[arg(long)]
    pub lexicon: Option<std::path::PathBuf>,
}

impl ModelArgs {
    /// Build an analyzer from the CLI selection.
    pub fn build_analyzer(&self) -> Result<Analyzer> {
        let lexicon = match &self.lexicon {
            Some(path) => SeverityLexicon::from_toml_file(path)?,
            None => SeverityLexicon::default(),
        };

        let classifier: Arc<dyn SentimentClassifier> = match self.backend {
            Backend::Http => Arc::new(InferenceClient::new(&self.model_url)),
            Backend::Lexicon => Arc::new(LexiconClassifier::new()),
        };

        Ok(Analyzer::new(classifier, lexicon))
    }
}
