use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kotoba_jisho::JishoClient;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod reporter;

use self::config::Config;
use self::reporter::ConsoleReporter;

/// Fetch dictionary definitions for a word list and write them to a text file.
#[derive(Parser)]
#[command(name = "kotoba", version, about)]
struct Cli {
    /// Input file: words separated by commas, Japanese commas, or spaces
    input: PathBuf,

    /// Output file for the formatted definitions
    output: PathBuf,

    /// Override the word-search endpoint (defaults to JISHO_API_URL or Jisho)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new();
    let api_url = cli.api_url.unwrap_or(config.api_url);

    let client = JishoClient::new(api_url);
    let reporter = ConsoleReporter::new();

    let report = kotoba_batch::run(&client, &cli.input, &cli.output, &reporter)
        .await
        .context("batch lookup failed")?;

    tracing::info!(
        "wrote {} definitions to {} ({} not found)",
        report.found,
        cli.output.display(),
        report.not_found.len()
    );

    Ok(())
}
