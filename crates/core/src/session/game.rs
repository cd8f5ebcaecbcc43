use tracing::{debug, info};

use super::models::{GameStatus, Turn};
use crate::{
    code::Code,
    engine::{Mastermind, Rules},
    error::GameError,
};

/// Drives one engine from the first guess to a win or loss.
#[derive(Debug)]
pub struct GameSession {
    engine: Mastermind,
    history: Vec<Turn>,
    status: GameStatus,
}

impl GameSession {
    /// Wrap a freshly created engine.
    pub fn new(engine: Mastermind) -> Self {
        let rules = *engine.rules();
        info!(
            colors = rules.colors,
            slots = rules.slots,
            turns = rules.turns,
            "Game started"
        );
        Self {
            engine,
            history: Vec::with_capacity(rules.turns.min(64) as usize),
            status: GameStatus::Playing,
        }
    }

    /// Score a guess and advance the game.
    pub fn submit(&mut self, guess: Code) -> Result<&Turn, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let feedback = self.engine.evaluate(&guess)?;
        let number = self.history.len() as u32 + 1;

        if feedback.win {
            self.status = GameStatus::Won;
        } else if self.engine.turns_remaining() == 0 {
            self.status = GameStatus::Lost;
        }

        if self.status.is_over() {
            info!(status = ?self.status, turns_used = number, "Game finished");
            debug!(secret = %self.engine.reveal(), "Hidden code");
        }

        self.history.push(Turn {
            number,
            guess,
            feedback,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn turns_remaining(&self) -> u32 {
        self.engine.turns_remaining()
    }

    pub fn rules(&self) -> &Rules {
        self.engine.rules()
    }

    /// The hidden code, once the game is over.
    pub fn reveal(&self) -> Option<Code> {
        self.status.is_over().then(|| self.engine.reveal())
    }

    /// The hidden code regardless of status, for abandoning a game early.
    pub fn forfeit(&mut self) -> Code {
        if !self.status.is_over() {
            info!(turns_used = self.history.len(), "Game abandoned");
            self.status = GameStatus::Lost;
        }
        self.engine.reveal()
    }
}
