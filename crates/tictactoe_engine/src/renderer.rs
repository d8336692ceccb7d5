//! Observers notified by the match controller.

use crate::{Board, MatchOver, Move, Player, RoundResult, Scoreboard};
use tracing::{debug, info};

/// Notifications sent from the controller to its renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A round began on a cleared board.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
        /// Who moves first.
        opener: Player,
    },
    /// A marker was placed.
    MoveMade(Move),
    /// A round reached a terminal state; the score is already updated.
    RoundOver {
        /// Round number, starting at 1.
        round: u32,
        /// How it ended.
        result: RoundResult,
        /// Score after this round.
        scoreboard: Scoreboard,
    },
    /// One side reached the target.
    MatchOver(MatchOver),
}

/// Side-effecting sink for board state. Nothing it does feeds back into play.
pub trait Renderer {
    /// Draws the current board and score.
    fn render(&mut self, board: &Board, scoreboard: &Scoreboard);

    /// Reports a round or match milestone.
    fn announce(&mut self, _event: &MatchEvent) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, board: &Board, scoreboard: &Scoreboard) {
        (**self).render(board, scoreboard)
    }

    fn announce(&mut self, event: &MatchEvent) {
        (**self).announce(event)
    }
}

/// Renderer that only emits tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRenderer;

impl Renderer for TracingRenderer {
    fn render(&mut self, board: &Board, scoreboard: &Scoreboard) {
        debug!(
            unused = board.unused_positions().len(),
            score = %scoreboard,
            "Board updated"
        );
    }

    fn announce(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::RoundStarted { round, opener } => {
                debug!(round, %opener, "Round started")
            }
            MatchEvent::MoveMade(mv) => debug!(%mv, "Move made"),
            MatchEvent::RoundOver {
                round,
                result,
                scoreboard,
            } => info!(round, %result, score = %scoreboard, "Round over"),
            MatchEvent::MatchOver(over) => info!(%over, "Match over"),
        }
    }
}
