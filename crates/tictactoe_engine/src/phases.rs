//! Round and match phases.

use crate::{Player, Scoreboard};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RoundResult {
    /// The human completed a line.
    #[display("Human wins")]
    HumanWin,
    /// The computer completed a line.
    #[display("Computer wins")]
    ComputerWin,
    /// Board filled without a line.
    #[display("Tie")]
    Tie,
}

impl RoundResult {
    /// Result for a round the given player won.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => RoundResult::HumanWin,
            Player::Computer => RoundResult::ComputerWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundResult::HumanWin => Some(Player::Human),
            RoundResult::ComputerWin => Some(Player::Computer),
            RoundResult::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(self) -> bool {
        matches!(self, RoundResult::Tie)
    }
}

/// Where a round currently stands.
///
/// `AwaitingMove` → `Evaluating` → `RoundOver` or `AwaitingMove` of the
/// other player. `RoundOver` is terminal until the next round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting on this player's selector.
    AwaitingMove(Player),
    /// This player just placed a marker; the board has not been checked yet.
    Evaluating(Player),
    /// No further moves will be solicited.
    RoundOver(RoundResult),
}

/// Final result of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOver {
    winner: Player,
    scoreboard: Scoreboard,
    rounds: u32,
}

impl MatchOver {
    pub(crate) fn new(winner: Player, scoreboard: Scoreboard, rounds: u32) -> Self {
        Self {
            winner,
            scoreboard,
            rounds,
        }
    }

    /// The side that reached the target first.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Score at the end of the match.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Rounds played, ties included.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl std::fmt::Display for MatchOver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} wins the match {} after {} rounds",
            self.winner, self.scoreboard, self.rounds
        )
    }
}
