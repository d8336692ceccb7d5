//! Text rendering of the board, score and results.

use std::io::Write;
use tictactoe_engine::{Board, MatchEvent, Player, RoundResult, Scoreboard};
use tracing::warn;

const CLEAR: &str = "\x1B[2J\x1B[1;1H";

/// Draws to a terminal or any writer.
#[derive(Debug)]
pub struct ConsoleRenderer<W> {
    output: W,
    clear_screen: bool,
    target_wins: u32,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer; `target_wins` is shown next to the score.
    pub fn new(output: W, clear_screen: bool, target_wins: u32) -> Self {
        Self {
            output,
            clear_screen,
            target_wins,
        }
    }

    /// Writes a line of free text.
    pub fn say(&mut self, text: &str) {
        self.emit(format_args!("{text}\n"));
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|()| self.output.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

/// Message for the end of a round.
pub fn round_message(result: RoundResult) -> &'static str {
    match result {
        RoundResult::HumanWin => "You won! Congratulations!",
        RoundResult::ComputerWin => "I won! I won! Take that, human!",
        RoundResult::Tie => "A tie game. How boring.",
    }
}

impl<W: Write> tictactoe_engine::Renderer for ConsoleRenderer<W> {
    fn render(&mut self, board: &Board, scoreboard: &Scoreboard) {
        if self.clear_screen {
            self.emit(format_args!("{CLEAR}"));
        }
        let target = self.target_wins;
        self.emit(format_args!(
            "You are {}. Computer is {}.\nScore: You {} - Computer {} (first to {})\n\n{}\n",
            Player::Human.marker(),
            Player::Computer.marker(),
            scoreboard.human(),
            scoreboard.computer(),
            target,
            board
        ));
    }

    fn announce(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::RoundStarted { round, opener } => {
                let who = match opener {
                    Player::Human => "You go",
                    Player::Computer => "The computer goes",
                };
                self.emit(format_args!("Round {round}. {who} first.\n"));
            }
            MatchEvent::MoveMade(_) => {}
            MatchEvent::RoundOver { result, .. } => {
                self.emit(format_args!("{}\n", round_message(*result)));
            }
            MatchEvent::MatchOver(over) => {
                let score = over.scoreboard();
                let headline = match over.winner() {
                    Player::Human => "You won the match",
                    Player::Computer => "The computer won the match",
                };
                self.emit(format_args!(
                    "{headline} {}-{}!\n",
                    score.wins_for(over.winner()),
                    score.wins_for(over.winner().opponent())
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Renderer;

    #[test]
    fn test_render_without_clear() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), false, 3);
        let mut board = Board::new();
        board.mark_at(1, Player::Human).unwrap();
        renderer.render(&board, &Scoreboard::new());

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(!text.contains(CLEAR));
        assert!(text.starts_with("You are X. Computer is O.\nScore: You 0 - Computer 0 (first to 3)\n"));
        assert!(text.contains("  X  |     |   "));
    }

    #[test]
    fn test_render_shows_configured_target() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), false, 5);
        let mut scoreboard = Scoreboard::new();
        scoreboard.record(RoundResult::HumanWin);
        renderer.render(&Board::new(), &scoreboard);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("Score: You 1 - Computer 0 (first to 5)"));
    }

    #[test]
    fn test_render_clears_when_enabled() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), true, 3);
        renderer.render(&Board::new(), &Scoreboard::new());
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with(CLEAR));
    }

    #[test]
    fn test_round_messages() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), false, 3);
        renderer.announce(&MatchEvent::RoundOver {
            round: 1,
            result: RoundResult::Tie,
            scoreboard: Scoreboard::new(),
        });
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "A tie game. How boring.\n");
    }
}
