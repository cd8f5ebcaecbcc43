#![allow(missing_docs)]

use crate::{code::Code, score::Feedback};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses are still being accepted.
    Playing,
    /// The hidden code was guessed.
    Won,
    /// The allowance ran out without a winning guess.
    Lost,
}

impl GameStatus {
    /// True once no further guesses are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// 1-based turn number.
    pub number: u32,
    pub guess: Code,
    pub feedback: Feedback,
}
