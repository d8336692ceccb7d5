//! Core domain types for tic-tac-toe.

use crate::action::BoardError;
use crate::position::{Position, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who sits at the board. The marker never changes during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The person at the keyboard, marks with `X`.
    Human,
    /// The heuristic opponent, marks with `O`.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The symbol drawn on the board.
    pub fn marker(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol drawn for this square, a blank when empty.
    pub fn marker(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.marker(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_unused(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Marks the square a player typed (1-9).
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPosition`] outside 1-9, [`BoardError::CellOccupied`]
    /// if the square already holds a marker.
    #[instrument(skip(self))]
    pub fn mark_at(&mut self, number: usize, player: Player) -> Result<Position, BoardError> {
        let pos = Position::from_number(number)?;
        self.place(pos, player)?;
        Ok(pos)
    }

    /// Places a player's marker at a position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if the square is not empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.is_unused(pos) {
            return Err(BoardError::CellOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        debug!(position = %pos, marker = %player.marker(), "Square marked");
        Ok(())
    }

    /// Empty positions in ascending order.
    pub fn unused_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_unused(pos))
            .collect()
    }

    /// True once no empty square remains.
    pub fn is_full(&self) -> bool {
        self.unused_positions().is_empty()
    }

    /// Counts how many of the given positions hold the player's marker.
    pub fn count_markers_for(&self, player: Player, positions: &[Position]) -> usize {
        positions
            .iter()
            .filter(|&&pos| self.get(pos) == Square::Occupied(player))
            .count()
    }

    /// The player holding all three squares of a winning line, if any.
    ///
    /// Lines are checked rows first, then columns, then diagonals.
    pub fn winner(&self) -> Option<Player> {
        WinningLine::ALL.iter().find_map(|line| {
            [Player::Human, Player::Computer]
                .into_iter()
                .find(|&player| self.count_markers_for(player, line.positions()) == 3)
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----+-----+-----")?;
            }
            writeln!(f, "     |     |")?;
            writeln!(
                f,
                "  {}  |  {}  |  {}",
                cells[0].marker(),
                cells[1].marker(),
                cells[2].marker()
            )?;
            writeln!(f, "     |     |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(human: &[usize], computer: &[usize]) -> Board {
        let mut board = Board::new();
        for &n in human {
            board.mark_at(n, Player::Human).unwrap();
        }
        for &n in computer {
            board.mark_at(n, Player::Computer).unwrap();
        }
        board
    }

    #[test]
    fn test_mark_at_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.mark_at(0, Player::Human),
            Err(BoardError::InvalidPosition(0))
        );
        assert_eq!(
            board.mark_at(10, Player::Human),
            Err(BoardError::InvalidPosition(10))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_mark_at_occupied() {
        let mut board = board_with(&[5], &[]);
        assert_eq!(
            board.mark_at(5, Player::Computer),
            Err(BoardError::CellOccupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::Human));
    }

    #[test]
    fn test_unused_positions_ascending() {
        let board = board_with(&[1, 9], &[5]);
        let numbers: Vec<usize> = board.unused_positions().iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_full_only_when_all_marked() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert!(!board.is_full());
            let player = if i % 2 == 0 { Player::Human } else { Player::Computer };
            board.place(*pos, player).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_count_markers_for() {
        let board = board_with(&[1, 2], &[3]);
        let top = WinningLine::ALL[0];
        assert_eq!(board.count_markers_for(Player::Human, top.positions()), 2);
        assert_eq!(board.count_markers_for(Player::Computer, top.positions()), 1);
    }

    #[test]
    fn test_winner_column_and_diagonal() {
        assert_eq!(board_with(&[2, 5, 8], &[1, 3]).winner(), Some(Player::Human));
        assert_eq!(board_with(&[1, 2], &[3, 5, 7]).winner(), Some(Player::Computer));
        assert_eq!(board_with(&[1, 2], &[3, 5]).winner(), None);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = board_with(&[1, 2], &[5]);
        board.reset();
        assert_eq!(board.unused_positions().len(), 9);
    }

    #[test]
    fn test_display_draws_markers() {
        let board = board_with(&[1], &[5]);
        let text = board.to_string();
        assert!(text.starts_with("     |     |\n  X  |     |   \n"));
        assert!(text.contains("     |  O  |   "));
        assert_eq!(text.matches("-----+-----+-----").count(), 2);
    }
}
