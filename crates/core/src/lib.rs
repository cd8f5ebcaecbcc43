#![warn(clippy::all, missing_docs)]

//! Core game logic for terminal Mastermind.
//!
//! This crate hosts the peg and code types, the black/white scoring engine,
//! the game engine and session state machine, the seeded random source, and
//! configuration handling used by the terminal frontend.

pub mod code;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod score;
pub mod session;

pub use crate::code::{Code, Peg};
pub use crate::config::{AppConfig, ClampWarning, Overrides, PEG_SLOTS};
pub use crate::engine::{Mastermind, Rules};
pub use crate::error::{ConfigError, GameError, GuessError};
pub use crate::rng::GameRng;
pub use crate::score::{score, Feedback};
pub use crate::session::{GameSession, GameStatus, Turn};
