//! Terminal-state evaluation for a round.

use crate::{Board, RoundResult};
use tracing::instrument;

/// Decides whether the round is over.
///
/// A winning line is checked before fullness, so a move that both fills the
/// board and completes a line is a win, never a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<RoundResult> {
    if let Some(winner) = board.winner() {
        return Some(RoundResult::won_by(winner));
    }
    if board.is_full() {
        return Some(RoundResult::Tie);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_from(layout: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in layout.chars().enumerate() {
            let player = match c {
                'X' => Player::Human,
                'O' => Player::Computer,
                _ => continue,
            };
            board.mark_at(i + 1, player).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert_eq!(evaluate(&board), Some(RoundResult::Tie));
    }

    #[test]
    fn test_win_on_last_square_is_not_tie() {
        // X O X / O X O / O X X, X completes the diagonal with the ninth mark
        let board = board_from("XOXOXOOXX");
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Some(RoundResult::HumanWin));
    }

    #[test]
    fn test_computer_row() {
        let board = board_from("XX.OOO...");
        assert_eq!(evaluate(&board), Some(RoundResult::ComputerWin));
    }
}
