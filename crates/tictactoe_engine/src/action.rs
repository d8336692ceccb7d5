//! Moves and the errors raised when applying them.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their marker at a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the marker goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error raised when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The requested number is outside 1-9.
    #[display("Position {} is outside 1-9", _0)]
    InvalidPosition(usize),

    /// The square already holds a marker.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for BoardError {}
