//! Interactive session: matches back to back until the player quits.

use crate::config::GameConfig;
use crate::console::{ConsoleInput, ConsoleRenderer, GOODBYE, WELCOME};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{
    HeuristicSelector, HumanSelector, MatchController, MatchOver, SelectError,
};
use tracing::{info, instrument};

/// A human at the console against the heuristic computer.
#[derive(Debug)]
pub struct Session<R, P, S> {
    config: GameConfig,
    input: ConsoleInput<R, P>,
    renderer: ConsoleRenderer<S>,
    rng: ChaCha20Rng,
}

impl<R: BufRead, P: Write, S: Write> Session<R, P, S> {
    /// Creates a session reading answers from `input`, writing prompts to
    /// `prompts` and the board to `screen`.
    #[instrument(skip(input, prompts, screen))]
    pub fn new(config: GameConfig, input: R, prompts: P, screen: S) -> Self {
        let rng = match *config.seed() {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        let renderer = ConsoleRenderer::new(screen, *config.clear_screen(), *config.target_wins());
        Self {
            input: ConsoleInput::new(input, prompts),
            renderer,
            rng,
            config,
        }
    }

    /// Greets, plays matches until the player declines another, says goodbye.
    ///
    /// # Errors
    ///
    /// Fails when the player's input ends or cannot be read.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<MatchOver>, SelectError> {
        self.renderer.say(WELCOME);

        let mut results = Vec::new();
        loop {
            let over = self.play_match()?;
            info!(%over, "Match finished");
            results.push(over);

            if !self.input.confirm("Play again?")? {
                break;
            }
        }

        self.renderer.say(GOODBYE);
        Ok(results)
    }

    /// Plays one match from 0-0.
    fn play_match(&mut self) -> Result<MatchOver, SelectError> {
        let mut controller = MatchController::new(
            self.config.match_settings(),
            HumanSelector::new(&mut self.input),
            HeuristicSelector::new(&mut self.rng),
            &mut self.renderer,
        );
        controller.play_match()
    }

    /// Consumes the session, returning the screen writer.
    pub fn into_screen(self) -> S {
        self.renderer.into_inner()
    }
}
