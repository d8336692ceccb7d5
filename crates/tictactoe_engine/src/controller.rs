//! Round and match controller.

use crate::{
    Board, MatchEvent, MatchOver, MatchSettings, Move, MoveSelector, Player, Renderer,
    RoundResult, Scoreboard, SelectError, TurnState, rules,
};
use tracing::{debug, info, instrument};

/// Drives turns, rounds and scoring for one human/computer pairing.
///
/// Owns the board and scoreboard. The board is cleared at the start of every
/// round; the scoreboard only at the start of every match.
pub struct MatchController<'a> {
    settings: MatchSettings,
    board: Board,
    scoreboard: Scoreboard,
    human: Box<dyn MoveSelector + 'a>,
    computer: Box<dyn MoveSelector + 'a>,
    renderer: Box<dyn Renderer + 'a>,
    state: TurnState,
    round: u32,
    history: Vec<Move>,
}

impl<'a> MatchController<'a> {
    /// Seats the two selectors and a renderer.
    #[instrument(skip(human, computer, renderer))]
    pub fn new(
        settings: MatchSettings,
        human: impl MoveSelector + 'a,
        computer: impl MoveSelector + 'a,
        renderer: impl Renderer + 'a,
    ) -> Self {
        Self {
            settings,
            board: Board::new(),
            scoreboard: Scoreboard::new(),
            human: Box::new(human),
            computer: Box::new(computer),
            renderer: Box::new(renderer),
            state: TurnState::AwaitingMove(settings.first_mover.opener(1)),
            round: 0,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the score of the current match.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Current round number; 0 until the first round starts.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Moves played in the current round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Resets the score and round counter for a new match.
    #[instrument(skip(self))]
    pub fn start_match(&mut self) {
        self.scoreboard.reset();
        self.board.reset();
        self.history.clear();
        self.round = 0;
        self.state = TurnState::AwaitingMove(self.settings.first_mover.opener(1));
        info!(target_wins = self.settings.target_wins, "Match started");
    }

    /// Clears the board and hands the first move to the round's opener.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) {
        self.round += 1;
        self.board.reset();
        self.history.clear();
        let opener = self.settings.first_mover.opener(self.round);
        self.state = TurnState::AwaitingMove(opener);
        debug!(round = self.round, %opener, "Round started");
        self.renderer.announce(&MatchEvent::RoundStarted {
            round: self.round,
            opener,
        });
        self.renderer.render(&self.board, &self.scoreboard);
    }

    /// Advances the round by one transition and returns the new state.
    ///
    /// `AwaitingMove` asks the player's selector and places the marker,
    /// `Evaluating` checks for a win then a full board, `RoundOver` stays put.
    ///
    /// # Errors
    ///
    /// Fails if the selector cannot produce a move or the board refuses it;
    /// the state is left unchanged.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn step(&mut self) -> Result<TurnState, SelectError> {
        match self.state {
            TurnState::AwaitingMove(player) => {
                let selector = match player {
                    Player::Human => &mut self.human,
                    Player::Computer => &mut self.computer,
                };
                let pos = selector.select(&self.board, player)?;
                self.board.place(pos, player)?;

                let mv = Move::new(player, pos);
                self.history.push(mv);
                self.state = TurnState::Evaluating(player);
                self.renderer.announce(&MatchEvent::MoveMade(mv));
                self.renderer.render(&self.board, &self.scoreboard);
            }
            TurnState::Evaluating(player) => match rules::evaluate(&self.board) {
                Some(result) => self.finish_round(result),
                None => self.state = TurnState::AwaitingMove(player.opponent()),
            },
            TurnState::RoundOver(_) => {}
        }
        Ok(self.state)
    }

    /// Plays a fresh round to completion.
    ///
    /// # Errors
    ///
    /// Propagates selector failures from [`Self::step`].
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<RoundResult, SelectError> {
        self.start_round();
        loop {
            if let TurnState::RoundOver(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Plays rounds from 0-0 until one side reaches the target.
    ///
    /// # Errors
    ///
    /// Propagates selector failures from [`Self::step`].
    #[instrument(skip(self))]
    pub fn play_match(&mut self) -> Result<MatchOver, SelectError> {
        self.start_match();
        // A target of zero would end the match before any play.
        let target = self.settings.target_wins.max(1);
        loop {
            self.play_round()?;
            if let Some(winner) = self.scoreboard.leader_at(target) {
                let over = MatchOver::new(winner, self.scoreboard, self.round);
                info!(%over, "Match over");
                self.renderer.announce(&MatchEvent::MatchOver(over.clone()));
                return Ok(over);
            }
        }
    }

    fn finish_round(&mut self, result: RoundResult) {
        self.state = TurnState::RoundOver(result);
        self.scoreboard.record(result);
        info!(round = self.round, %result, score = %self.scoreboard, "Round over");
        self.renderer.announce(&MatchEvent::RoundOver {
            round: self.round,
            result,
            scoreboard: self.scoreboard,
        });
        self.renderer.render(&self.board, &self.scoreboard);
    }
}

impl std::fmt::Debug for MatchController<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchController")
            .field("settings", &self.settings)
            .field("board", &self.board)
            .field("scoreboard", &self.scoreboard)
            .field("state", &self.state)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}
