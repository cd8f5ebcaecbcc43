use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use mastermind_core::{Code, GameSession, GameStatus};
use tracing::{info, warn};

use crate::render::Renderer;

/// How a run of the prompt loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// Input closed before the game was decided.
    Abandoned,
}

/// Line-oriented game loop: prompt, read a guess, print the keys.
pub struct MastermindApp {
    session: GameSession,
    renderer: Renderer,
}

impl MastermindApp {
    pub fn new(session: GameSession, renderer: Renderer) -> Self {
        Self { session, renderer }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<Outcome> {
        let rules = *self.session.rules();
        writeln!(output, "{}", self.renderer.banner(&rules))?;

        while self.session.status() == GameStatus::Playing {
            write!(output, "{}", self.renderer.prompt(&rules))?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("failed to read guess")?;
            if read == 0 {
                writeln!(output)?;
                let secret = self.session.forfeit();
                info!("Input closed before the game ended");
                writeln!(output, "{}", self.renderer.loss(&secret))?;
                return Ok(Outcome::Abandoned);
            }

            let guess = match Code::parse(&line, rules.slots, rules.colors) {
                Ok(guess) => guess,
                Err(err) => {
                    warn!(input = line.trim(), %err, "Rejected guess");
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            let turn = self.session.submit(guess)?;
            if !turn.feedback.win {
                writeln!(
                    output,
                    "{}",
                    self.renderer.feedback(&turn.guess, &turn.feedback)
                )?;
            }
        }

        match self.session.status() {
            GameStatus::Won => {
                writeln!(output, "{}", self.renderer.win())?;
                Ok(Outcome::Won)
            }
            _ => {
                let secret = self.session.forfeit();
                writeln!(output, "{}", self.renderer.loss(&secret))?;
                Ok(Outcome::Lost)
            }
        }
    }
}
