//! Black/white key scoring.
//!
//! A guess is scored in two passes. Exact position matches become black keys
//! and remove both slots from play. Each remaining guess peg then claims the
//! first unclaimed hidden peg of the same color, scanning left to right, and
//! earns a white key. No slot on either side is counted twice.

use crate::{code::Peg, error::GameError};

/// Feedback for a single guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    /// Pegs correct in both color and position.
    pub black: usize,
    /// Pegs correct in color only.
    pub white: usize,
    /// Every position matched.
    pub win: bool,
}

/// Score `guess` against `secret`.
pub fn score(secret: &[Peg], guess: &[Peg]) -> Result<Feedback, GameError> {
    if secret.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let slots = secret.len();
    let mut black_matched = vec![false; slots];
    let mut white_matched = vec![false; slots];
    let mut black = 0;
    let mut white = 0;

    for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            black += 1;
            black_matched[i] = true;
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if black_matched[i] {
            continue;
        }
        let hit = (0..slots)
            .find(|&j| !black_matched[j] && !white_matched[j] && secret[j] == *g);
        if let Some(j) = hit {
            white += 1;
            white_matched[j] = true;
        }
    }

    Ok(Feedback {
        black,
        white,
        win: black == slots,
    })
}
