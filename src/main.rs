//! Tic Tac Toe - console entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::Path;
use tictactoe_match::{Cli, Command, GameConfig, MatchArgs, Session, autoplay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Play { rules, no_clear } => run_play(apply(base, &rules)?, no_clear),
        Command::Autoplay { rules, matches } => run_autoplay(apply(base, &rules)?, matches),
    }
}

/// Logs go to a file when given, otherwise stderr so they stay off the board.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn apply(config: GameConfig, rules: &MatchArgs) -> Result<GameConfig> {
    Ok(config.with_overrides(rules.target, rules.first_mover, rules.seed)?)
}

/// Run an interactive session on the terminal
#[instrument(skip(config))]
fn run_play(config: GameConfig, no_clear: bool) -> Result<()> {
    let config = if no_clear {
        config.without_clear_screen()
    } else {
        config
    };
    info!(?config, "Starting interactive session");

    let mut session = Session::new(config, io::stdin().lock(), io::stdout(), io::stdout());
    let results = session.run()?;
    info!(matches = results.len(), "Session ended");
    Ok(())
}

/// Run unattended matches and print the summary
#[instrument(skip(config))]
fn run_autoplay(config: GameConfig, matches: u32) -> Result<()> {
    info!(?config, "Starting autoplay");
    let summary = autoplay(&config, matches)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
