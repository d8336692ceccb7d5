//! Tic-tac-toe engine: board, heuristic opponent and match controller.
//!
//! # Architecture
//!
//! - **Board**: nine squares addressed by [`Position`] (1-9), win and full checks
//! - **Players**: [`MoveSelector`] implementations seated for [`Player::Human`]
//!   and [`Player::Computer`]
//! - **Controller**: [`MatchController`] alternates turns, ends rounds and
//!   keeps the [`Scoreboard`] until one side reaches the target
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use tictactoe_engine::{
//!     HeuristicSelector, MatchController, MatchSettings, RandomSelector, TracingRenderer,
//! };
//!
//! let mut controller = MatchController::new(
//!     MatchSettings::default(),
//!     RandomSelector::new(ChaCha20Rng::seed_from_u64(1)),
//!     HeuristicSelector::new(ChaCha20Rng::seed_from_u64(2)),
//!     TracingRenderer,
//! );
//! let over = controller.play_match().unwrap();
//! assert_eq!(over.scoreboard().wins_for(over.winner()), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod error;
mod phases;
mod players;
mod position;
mod renderer;
pub mod rules;
mod scoreboard;
mod settings;
mod types;

pub use action::{BoardError, Move};
pub use controller::MatchController;
pub use error::{InputError, SelectError};
pub use phases::{MatchOver, RoundResult, TurnState};
pub use players::{
    HeuristicSelector, HumanInput, HumanSelector, MoveSelector, RandomSelector,
    find_at_risk_square, validate_choice,
};
pub use position::{Position, WinningLine};
pub use renderer::{MatchEvent, Renderer, TracingRenderer};
pub use scoreboard::Scoreboard;
pub use settings::{FirstMover, MatchSettings};
pub use types::{Board, Player, Square};
