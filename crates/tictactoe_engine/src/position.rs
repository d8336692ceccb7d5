//! Board positions and the fixed winning lines.

use crate::action::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board, numbered 1-9 in row-major order.
///
/// ```text
///  1 | 2 | 3
///  4 | 5 | 6
///  7 | 8 | 9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// The number players type for this square (1-9).
    pub fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Converts to a zero-based board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a zero-based board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from the number a player typed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] outside 1-9.
    #[instrument]
    pub fn from_number(number: usize) -> Result<Self, BoardError> {
        number
            .checked_sub(1)
            .and_then(Self::from_index)
            .ok_or(BoardError::InvalidPosition(number))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One of the 8 three-in-a-row combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Rows, then columns, then diagonals. Heuristic tie-breaks rely on this order.
    pub const ALL: [WinningLine; 8] = {
        use Position::*;
        [
            // Rows
            WinningLine([TopLeft, TopCenter, TopRight]),
            WinningLine([MiddleLeft, Center, MiddleRight]),
            WinningLine([BottomLeft, BottomCenter, BottomRight]),
            // Columns
            WinningLine([TopLeft, MiddleLeft, BottomLeft]),
            WinningLine([TopCenter, Center, BottomCenter]),
            WinningLine([TopRight, MiddleRight, BottomRight]),
            // Diagonals
            WinningLine([TopLeft, Center, BottomRight]),
            WinningLine([TopRight, Center, BottomLeft]),
        ]
    };

    /// The three positions of this line.
    pub fn positions(&self) -> &[Position; 3] {
        &self.0
    }
}
