//! Command-line interface for tictactoe_match.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::FirstMover;

/// Tic Tac Toe against a rule-based computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_match")]
#[command(about = "Play tic-tac-toe matches in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Match rule overrides shared by every mode.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Round wins needed to take the match
    #[arg(short, long)]
    pub target: Option<u32>,

    /// Who opens each round: human, computer or alternate
    #[arg(long)]
    pub first_mover: Option<FirstMover>,

    /// Seed for random moves
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively against the computer
    Play {
        /// Rule overrides
        #[command(flatten)]
        rules: MatchArgs,

        /// Do not clear the screen between moves
        #[arg(long)]
        no_clear: bool,
    },

    /// Let a random player face the computer and print a JSON summary
    Autoplay {
        /// Rule overrides
        #[command(flatten)]
        rules: MatchArgs,

        /// Number of matches to play
        #[arg(short, long, default_value = "10")]
        matches: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            rules: MatchArgs::default(),
            no_clear: false,
        }
    }
}
