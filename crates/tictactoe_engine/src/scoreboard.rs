//! Round-win counters for a match.

use crate::{Player, RoundResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Rounds won by each side in the current match. Ties are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    human: u32,
    computer: u32,
}

impl Scoreboard {
    /// Creates a scoreboard at 0-0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by the human.
    pub fn human(&self) -> u32 {
        self.human
    }

    /// Rounds won by the computer.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Rounds won by the given player.
    pub fn wins_for(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    /// Adds one to the round winner's counter; ties leave it unchanged.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: RoundResult) {
        match result.winner() {
            Some(Player::Human) => self.human += 1,
            Some(Player::Computer) => self.computer += 1,
            None => {}
        }
        info!(human = self.human, computer = self.computer, "Score updated");
    }

    /// The player whose counter has reached `target`, if any.
    pub fn leader_at(&self, target: u32) -> Option<Player> {
        [Player::Human, Player::Computer]
            .into_iter()
            .find(|&player| self.wins_for(player) >= target)
    }

    /// Back to 0-0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.human, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_not_counted() {
        let mut score = Scoreboard::new();
        score.record(RoundResult::Tie);
        assert_eq!(score, Scoreboard::new());
    }

    #[test]
    fn test_record_and_leader() {
        let mut score = Scoreboard::new();
        score.record(RoundResult::HumanWin);
        score.record(RoundResult::ComputerWin);
        score.record(RoundResult::ComputerWin);
        assert_eq!((score.human(), score.computer()), (1, 2));
        assert_eq!(score.leader_at(3), None);
        assert_eq!(score.leader_at(2), Some(Player::Computer));
        assert_eq!(score.to_string(), "1-2");
    }

    #[test]
    fn test_reset() {
        let mut score = Scoreboard::new();
        score.record(RoundResult::HumanWin);
        score.reset();
        assert_eq!(score.wins_for(Player::Human), 0);
    }
}
