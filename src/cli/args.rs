//! Command-line argument parsing for ragbuddy
//!
//! Flags override values from the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::cli::config::Config;
use crate::rag::store::DecodePolicy;

/// ragbuddy - Ask a local Ollama model about your text documents
#[derive(Parser, Debug)]
#[command(name = "ragbuddy")]
#[command(version)]
#[command(about = "Answer questions from a folder of text documents with a local Ollama model", long_about = None)]
pub struct Args {
    /// Directory containing (or receiving converted) text documents
    #[arg(value_name = "DOCS_DIR")]
    pub docs_dir: PathBuf,

    /// Question to ask
    #[arg(short, long)]
    pub question: String,

    /// Number of documents to retrieve
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Convert HTML files from this directory into DOCS_DIR first
    #[arg(long, value_name = "DIR")]
    pub html_dir: Option<PathBuf>,

    /// Ollama model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama generate endpoint
    #[arg(long)]
    pub ollama_url: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip documents that are not valid UTF-8 instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Print the prompt and exit without calling the model
    #[arg(long)]
    pub print_prompt: bool,

    /// Verbosity level: -v (info), -vv (debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(top_k) = self.top_k {
            config.retrieval.search.top_k = top_k;
        }
        if let Some(model) = &self.model {
            config.ollama.model = model.clone();
        }
        if let Some(url) = &self.ollama_url {
            config.ollama.url = url.clone();
        }
        if self.skip_unreadable {
            config.retrieval.store.decode_policy = DecodePolicy::Skip;
        }
    }

    /// Default log filter for the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "ragbuddy=warn",
            1 => "ragbuddy=info",
            _ => "ragbuddy=debug",
        }
    }
}
