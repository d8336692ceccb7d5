//! Tic-tac-toe matches in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: board, heuristic opponent and match controller live in
//!   [`tictactoe_engine`]
//! - **Console**: stdin input and stdout rendering plugged into the engine
//! - **Session**: back-to-back matches with a "play again" prompt
//! - **Autoplay**: unattended matches summarised as JSON
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_match::{GameConfig, Session};
//!
//! let config = GameConfig::from_toml("target_wins = 1\nseed = 3\nclear_screen = false").unwrap();
//! // Cycles through every square, then declines a rematch.
//! let answers = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(50) + "n\n";
//! let mut session = Session::new(config, Cursor::new(answers), Vec::new(), Vec::new());
//! let results = session.run().unwrap();
//! assert_eq!(results.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod cli;
mod config;
mod console;
mod session;

pub use autoplay::{AutoplaySummary, autoplay};
pub use cli::{Cli, Command, MatchArgs};
pub use config::{ConfigError, GameConfig};
pub use console::{
    ConsoleInput, ConsoleRenderer, GOODBYE, INVALID_CHOICE, WELCOME, join_or, round_message,
};
pub use session::Session;
