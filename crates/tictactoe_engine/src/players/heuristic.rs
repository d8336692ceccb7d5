//! Rule-based computer opponent.

use super::MoveSelector;
use crate::{Board, Player, Position, SelectError, WinningLine};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// The empty square of the first line holding two of `player`'s markers
/// and one empty square.
///
/// Lines are scanned rows, columns, then diagonals.
#[instrument(skip(board))]
pub fn find_at_risk_square(board: &Board, player: Player) -> Option<Position> {
    WinningLine::ALL.iter().find_map(|line| {
        let positions = line.positions();
        if board.count_markers_for(player, positions) != 2 {
            return None;
        }
        positions.iter().copied().find(|&pos| board.is_unused(pos))
    })
}

/// Computer opponent: win, else block, else center, else random.
///
/// Only the last step consumes the random source.
#[derive(Debug, Clone)]
pub struct HeuristicSelector<R> {
    rng: R,
}

impl<R: Rng> HeuristicSelector<R> {
    /// Creates a selector drawing fallback moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Runs the priority rules for `player` against its opponent.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board, player: Player) -> Option<Position> {
        if let Some(pos) = find_at_risk_square(board, player) {
            debug!(position = %pos, "Completing own line");
            return Some(pos);
        }
        if let Some(pos) = find_at_risk_square(board, player.opponent()) {
            debug!(position = %pos, "Blocking opponent line");
            return Some(pos);
        }
        if board.is_unused(Position::Center) {
            debug!("Taking center");
            return Some(Position::Center);
        }
        let pos = board.unused_positions().choose(&mut self.rng).copied();
        debug!(position = ?pos, "Random square");
        pos
    }
}

impl<R: Rng> MoveSelector for HeuristicSelector<R> {
    fn select(&mut self, board: &Board, player: Player) -> Result<Position, SelectError> {
        self.choose(board, player)
            .ok_or(SelectError::NoMovesAvailable)
    }
}
