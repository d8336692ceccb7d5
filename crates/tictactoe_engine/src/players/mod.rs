//! Move selector trait and implementations.

mod heuristic;
mod human;
mod random;

pub use heuristic::{HeuristicSelector, find_at_risk_square};
pub use human::{HumanInput, HumanSelector, validate_choice};
pub use random::RandomSelector;

use crate::{Board, Player, Position, SelectError};

/// Capability for choosing a square.
///
/// The controller dispatches on [`Player`] to the selector seated for that
/// side; the selector never mutates the board.
pub trait MoveSelector {
    /// Chooses an unused square on `board` for `player`.
    fn select(&mut self, board: &Board, player: Player) -> Result<Position, SelectError>;
}

impl<S: MoveSelector + ?Sized> MoveSelector for &mut S {
    fn select(&mut self, board: &Board, player: Player) -> Result<Position, SelectError> {
        (**self).select(board, player)
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select(&mut self, board: &Board, player: Player) -> Result<Position, SelectError> {
        (**self).select(board, player)
    }
}
