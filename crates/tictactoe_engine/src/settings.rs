//! Match settings: target score and who opens each round.

use crate::Player;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who takes the first move of a round.
///
/// Defaults to [`FirstMover::Human`] so the player always opens.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstMover {
    /// The human opens every round.
    #[default]
    Human,
    /// The computer opens every round.
    Computer,
    /// The human opens round 1, then the opener switches every round.
    Alternate,
}

impl FirstMover {
    /// The opener of a round, counting rounds from 1.
    #[instrument]
    pub fn opener(self, round: u32) -> Player {
        match self {
            FirstMover::Human => Player::Human,
            FirstMover::Computer => Player::Computer,
            FirstMover::Alternate if round % 2 == 1 => Player::Human,
            FirstMover::Alternate => Player::Computer,
        }
    }
}

/// Rules for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
#[setters(prefix = "with_")]
pub struct MatchSettings {
    /// Round wins needed to take the match.
    pub target_wins: u32,
    /// Opening policy.
    pub first_mover: FirstMover,
}

impl MatchSettings {
    /// Default target of three round wins.
    pub const DEFAULT_TARGET_WINS: u32 = 3;
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            target_wins: Self::DEFAULT_TARGET_WINS,
            first_mover: FirstMover::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate_switches_each_round() {
        let openers: Vec<Player> = (1..=4).map(|r| FirstMover::Alternate.opener(r)).collect();
        assert_eq!(
            openers,
            vec![Player::Human, Player::Computer, Player::Human, Player::Computer]
        );
    }

    #[test]
    fn test_fixed_openers() {
        assert_eq!(FirstMover::Human.opener(2), Player::Human);
        assert_eq!(FirstMover::Computer.opener(1), Player::Computer);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Alternate".parse::<FirstMover>(), Ok(FirstMover::Alternate));
        assert_eq!(FirstMover::Computer.to_string(), "computer");
        assert!("sometimes".parse::<FirstMover>().is_err());
    }

    #[test]
    fn test_setters() {
        let settings = MatchSettings::default()
            .with_target_wins(5)
            .with_first_mover(FirstMover::Alternate);
        assert_eq!(settings.target_wins, 5);
        assert_eq!(settings.first_mover, FirstMover::Alternate);
    }
}
