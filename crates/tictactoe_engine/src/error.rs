//! Errors surfaced by move selectors and the match controller.

use crate::action::BoardError;
use derive_more::{Display, Error};
use tracing::instrument;

/// The human collaborator could not produce a choice.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Why a move could not be obtained or applied.
#[derive(Debug, Clone, Display)]
pub enum SelectError {
    /// The human collaborator failed.
    #[display("{}", _0)]
    Input(InputError),

    /// The chosen square was rejected by the board.
    #[display("{}", _0)]
    Board(BoardError),

    /// Asked for a move on a full board.
    #[display("No unused squares remain")]
    NoMovesAvailable,
}

impl From<InputError> for SelectError {
    fn from(err: InputError) -> Self {
        SelectError::Input(err)
    }
}

impl From<BoardError> for SelectError {
    fn from(err: BoardError) -> Self {
        SelectError::Board(err)
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectError::Input(err) => Some(err),
            SelectError::Board(err) => Some(err),
            SelectError::NoMovesAvailable => None,
        }
    }
}
