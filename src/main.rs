use anyhow::Result;
use brewup::config::{Config, DEFAULT_DOWNLOAD_BASE, DEFAULT_ORG, Settings};
use brewup::download::HttpDownloader;
use brewup::logging::init_logging;
use brewup::update::update_formula;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brewup")]
#[command(about = "Update Homebrew formula with new version and checksums")]
struct Cli {
    /// Repository name (e.g., sbomasm)
    #[arg(long, short = 'r')]
    repo: String,

    /// Version tag (e.g., v1.0.5)
    #[arg(long, short = 'v')]
    version: String,

    /// Path to Homebrew formula file (e.g., sbomasm.rb)
    #[arg(long, short = 'f')]
    file: PathBuf,

    /// Preview changes without modifying the file
    #[arg(long)]
    dry_run: bool,

    /// GitHub organisation that publishes the releases
    #[arg(long)]
    org: Option<String>,

    /// Base URL of the release host
    #[arg(long)]
    download_base: Option<String>,

    /// Settings file (defaults to ~/.brewup/config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = Config::new(&cli.repo, &cli.version, cli.file);
    config.dry_run = cli.dry_run;
    config.validate()?;

    let settings = Settings::load(cli.config.as_deref()).await?;
    config.org = cli
        .org
        .or(settings.org)
        .unwrap_or_else(|| DEFAULT_ORG.to_string());
    config.download_base = cli
        .download_base
        .or(settings.download_base)
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_BASE.to_string());

    let downloader = HttpDownloader::new()?;
    update_formula(config, &downloader).await?;

    Ok(())
}
