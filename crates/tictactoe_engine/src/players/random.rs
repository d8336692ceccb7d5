//! Uniformly random player, used to fill a seat in unattended play.

use super::MoveSelector;
use crate::{Board, Player, Position, SelectError};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Picks any unused square with equal probability.
#[derive(Debug, Clone)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    /// Creates a selector drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select(&mut self, board: &Board, player: Player) -> Result<Position, SelectError> {
        let pos = board
            .unused_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SelectError::NoMovesAvailable)?;
        debug!(%player, position = %pos, "Random choice");
        Ok(pos)
    }
}
