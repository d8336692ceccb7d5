//! Human player backed by an external input source.

use super::MoveSelector;
use crate::{Board, BoardError, InputError, Player, Position, SelectError};
use tracing::{debug, instrument, warn};

/// Source of the numbers a person types.
///
/// Implementations block until they have something to return.
pub trait HumanInput {
    /// Asks for a square, offering `valid` as the current choices.
    fn request_position(&mut self, valid: &[Position]) -> Result<usize, InputError>;

    /// Tells the person their last answer was refused.
    fn reject(&mut self, _requested: usize, _reason: &BoardError) {}
}

impl<I: HumanInput + ?Sized> HumanInput for &mut I {
    fn request_position(&mut self, valid: &[Position]) -> Result<usize, InputError> {
        (**self).request_position(valid)
    }

    fn reject(&mut self, requested: usize, reason: &BoardError) {
        (**self).reject(requested, reason)
    }
}

/// Checks a requested square against the board.
///
/// # Errors
///
/// [`BoardError::InvalidPosition`] outside 1-9, [`BoardError::CellOccupied`]
/// for a marked square.
#[instrument(skip(board))]
pub fn validate_choice(board: &Board, requested: usize) -> Result<Position, BoardError> {
    let pos = Position::from_number(requested)?;
    if !board.is_unused(pos) {
        return Err(BoardError::CellOccupied(pos));
    }
    Ok(pos)
}

/// Selector that only accepts unused squares from a [`HumanInput`].
#[derive(Debug)]
pub struct HumanSelector<I> {
    input: I,
}

impl<I: HumanInput> HumanSelector<I> {
    /// Wraps an input source.
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: HumanInput> MoveSelector for HumanSelector<I> {
    #[instrument(skip(self, board))]
    fn select(&mut self, board: &Board, player: Player) -> Result<Position, SelectError> {
        let valid = board.unused_positions();
        if valid.is_empty() {
            return Err(SelectError::NoMovesAvailable);
        }

        loop {
            let requested = self.input.request_position(&valid)?;
            match validate_choice(board, requested) {
                Ok(pos) => {
                    debug!(position = %pos, "Human choice accepted");
                    return Ok(pos);
                }
                Err(reason) => {
                    warn!(requested, %reason, "Human choice rejected");
                    self.input.reject(requested, &reason);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        answers: VecDeque<usize>,
        rejected: Vec<usize>,
    }

    impl HumanInput for Scripted {
        fn request_position(&mut self, _valid: &[Position]) -> Result<usize, InputError> {
            self.answers
                .pop_front()
                .ok_or_else(|| InputError::new("script exhausted"))
        }

        fn reject(&mut self, requested: usize, _reason: &BoardError) {
            self.rejected.push(requested);
        }
    }

    #[test]
    fn test_validate_choice() {
        let mut board = Board::new();
        board.mark_at(5, Player::Computer).unwrap();
        assert_eq!(validate_choice(&board, 1), Ok(Position::TopLeft));
        assert_eq!(
            validate_choice(&board, 5),
            Err(BoardError::CellOccupied(Position::Center))
        );
        assert_eq!(validate_choice(&board, 42), Err(BoardError::InvalidPosition(42)));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut board = Board::new();
        board.mark_at(5, Player::Computer).unwrap();
        let mut script = Scripted {
            answers: VecDeque::from([0, 5, 12, 7]),
            rejected: Vec::new(),
        };
        let mut human = HumanSelector::new(&mut script);
        assert_eq!(
            human.select(&board, Player::Human).unwrap(),
            Position::BottomLeft
        );
        assert_eq!(script.rejected, vec![0, 5, 12]);
    }

    #[test]
    fn test_input_failure_propagates() {
        let mut human = HumanSelector::new(Scripted {
            answers: VecDeque::new(),
            rejected: Vec::new(),
        });
        assert!(matches!(
            human.select(&Board::new(), Player::Human),
            Err(SelectError::Input(_))
        ));
    }
}
