//! Error types surfaced by the game engine.

use thiserror::Error;

/// Invalid arguments for constructing a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Palette size outside the supported range.
    #[error("palette size {value} is outside {min}..={max}")]
    Colors {
        /// Requested palette size.
        value: u8,
        /// Smallest accepted palette size.
        min: u8,
        /// Largest accepted palette size.
        max: u8,
    },
    /// Turn allowance below the minimum.
    #[error("turn allowance {value} is below the minimum of {min}")]
    Turns {
        /// Requested allowance.
        value: u32,
        /// Smallest accepted allowance.
        min: u32,
    },
    /// Slot count outside the supported range.
    #[error("slot count {value} is outside {min}..={max}")]
    Slots {
        /// Requested slot count.
        value: usize,
        /// Smallest accepted slot count.
        min: usize,
        /// Largest accepted slot count.
        max: usize,
    },
    /// A fixed secret does not fit the rules it was paired with.
    #[error("secret has {actual} pegs but the rules call for {expected}")]
    SecretLength {
        /// Slot count from the rules.
        expected: usize,
        /// Length of the supplied secret.
        actual: usize,
    },
}

/// Failures while playing a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess and secret differ in length.
    #[error("expected {expected} pegs, got {actual}")]
    LengthMismatch {
        /// Length of the hidden code.
        expected: usize,
        /// Length of the submitted guess.
        actual: usize,
    },
    /// The turn allowance is already used up.
    #[error("no turns remaining")]
    OutOfTurns,
    /// The session already reached a terminal state.
    #[error("the game is already over")]
    GameOver,
}

/// Player input that could not be read as a guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// A token was not a peg number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    /// Wrong number of pegs.
    #[error("please enter exactly {expected} numbers (got {actual})")]
    WrongLength {
        /// Required peg count.
        expected: usize,
        /// Count actually entered.
        actual: usize,
    },
    /// A value does not name a palette color.
    #[error("{value} is not a color; use numbers from 0 to {max}")]
    OutOfPalette {
        /// Offending value.
        value: u8,
        /// Highest valid color.
        max: u8,
    },
}
