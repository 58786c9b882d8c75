//! Console entry point.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use game_guess::{Session, SessionConfig};

#[derive(Parser)]
#[command(name = "game-guess")]
#[command(about = "Guess which game is being set up from its area and items", long_about = None)]
struct Cli {
    /// JSON configuration file (roster, rules, exit word)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Classify again using the entered items before reporting the title
    #[arg(long)]
    reclassify: bool,

    /// Word that ends item entry
    #[arg(long)]
    exit_word: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if cli.reclassify {
        config.reclassify_on_exit = true;
    }
    if let Some(word) = cli.exit_word {
        config.exit_word = word;
    }

    let stdin = io::stdin();
    Session::new(stdin.lock(), io::stdout(), config)
        .run()
        .context("interactive session failed")?;

    Ok(())
}
