//! ragbuddy - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ragbuddy::{
    cli::{Args, Config},
    html,
    ollama::OllamaClient,
    rag::RagPipeline,
};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_to(&mut config);
    config.validate().context("Invalid configuration")?;

    if let Some(html_dir) = &args.html_dir {
        let written = html::convert_directory(html_dir, &args.docs_dir)
            .context("Failed to convert HTML documents")?;
        info!(files = written.len(), "Converted HTML into text documents");
    }

    let pipeline = RagPipeline::with_config(args.docs_dir.clone(), config.retrieval.clone());
    let result = pipeline
        .run(&args.question)
        .context("Failed to build prompt from documents")?;

    info!(
        loaded = result.documents_loaded,
        sources = ?result.sources,
        "Retrieved context"
    );

    if args.print_prompt {
        println!("{}", result.prompt);
        return Ok(());
    }

    let client = OllamaClient::with_config(&config.ollama.url, &config.ollama.model, config.timeout())?;
    let answer = client
        .generate(&result.prompt)
        .await
        .with_context(|| format!("Request to {} failed", client.url()))?;

    println!("{}", answer);
    Ok(())
}
