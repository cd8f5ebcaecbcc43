#![allow(missing_docs)]

//! Game session state machine and turn history.

mod game;
mod models;

pub use game::GameSession;
pub use models::{GameStatus, Turn};
