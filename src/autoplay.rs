//! Unattended matches: a random player in the human seat.

use crate::config::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tictactoe_engine::{
    Board, HeuristicSelector, MatchController, MatchEvent, Player, RandomSelector, Renderer,
    Scoreboard, SelectError, TracingRenderer,
};
use tracing::{info, instrument};

/// Totals over a batch of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AutoplaySummary {
    /// Seed both seats were derived from.
    pub seed: u64,
    /// Matches played.
    pub matches: u32,
    /// Matches won by the random player.
    pub human_match_wins: u32,
    /// Matches won by the heuristic player.
    pub computer_match_wins: u32,
    /// Rounds played across all matches.
    pub rounds: u32,
    /// Rounds that ended without a line.
    pub ties: u32,
}

/// Counts ties on top of the tracing output.
#[derive(Debug, Default)]
struct TieCounter {
    ties: u32,
    inner: TracingRenderer,
}

impl Renderer for TieCounter {
    fn render(&mut self, board: &Board, scoreboard: &Scoreboard) {
        self.inner.render(board, scoreboard);
    }

    fn announce(&mut self, event: &MatchEvent) {
        if let MatchEvent::RoundOver { result, .. } = event
            && result.is_tie()
        {
            self.ties += 1;
        }
        self.inner.announce(event);
    }
}

/// Plays `matches` matches and tallies the outcome.
///
/// The random seat uses the configured seed, the computer the seed plus one;
/// without a configured seed one is drawn from entropy and reported.
///
/// # Errors
///
/// Only fails if a selector is asked to move on a full board.
#[instrument(skip(config))]
pub fn autoplay(config: &GameConfig, matches: u32) -> Result<AutoplaySummary, SelectError> {
    let seed = config.seed().unwrap_or_else(rand::random::<u64>);
    let mut tally = TieCounter::default();
    let mut summary = AutoplaySummary {
        seed,
        ..AutoplaySummary::default()
    };

    let mut controller = MatchController::new(
        config.match_settings(),
        RandomSelector::new(ChaCha20Rng::seed_from_u64(seed)),
        HeuristicSelector::new(ChaCha20Rng::seed_from_u64(seed.wrapping_add(1))),
        &mut tally,
    );
    for _ in 0..matches {
        let over = controller.play_match()?;
        summary.matches += 1;
        summary.rounds += over.rounds();
        match over.winner() {
            Player::Human => summary.human_match_wins += 1,
            Player::Computer => summary.computer_match_wins += 1,
        }
    }
    drop(controller);

    summary.ties = tally.ties;
    info!(?summary, "Autoplay finished");
    Ok(summary)
}
