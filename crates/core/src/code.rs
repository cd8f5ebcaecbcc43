//! Pegs and peg sequences.

use std::fmt;

use crate::{error::GuessError, rng::GameRng};

/// A single code peg. The value names a palette color, `0..colors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Peg(pub u8);

impl Peg {
    /// Raw color index.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of pegs, used both for the hidden code and for guesses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Code(Vec<Peg>);

impl Code {
    /// Build a code from raw color indices.
    pub fn from_values(values: &[u8]) -> Self {
        Self(values.iter().copied().map(Peg).collect())
    }

    /// Draw `slots` independent pegs uniformly from `0..colors`.
    ///
    /// `colors` must be non-zero; callers pass validated [`Rules`](crate::engine::Rules).
    pub(crate) fn random(slots: usize, colors: u8, rng: &mut GameRng) -> Self {
        debug_assert!(colors > 0, "palette must not be empty");
        Self((0..slots).map(|_| Peg(rng.gen_range_u8(0..colors))).collect())
    }

    /// Parse whitespace-separated color indices typed by the player.
    ///
    /// Every token must be a number below `colors` and exactly `slots`
    /// tokens must be present.
    pub fn parse(input: &str, slots: usize, colors: u8) -> Result<Self, GuessError> {
        let pegs = input
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u8>()
                    .map(Peg)
                    .map_err(|_| GuessError::InvalidNumber(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if pegs.len() != slots {
            return Err(GuessError::WrongLength {
                expected: slots,
                actual: pegs.len(),
            });
        }

        if let Some(peg) = pegs.iter().find(|peg| peg.0 >= colors) {
            return Err(GuessError::OutOfPalette {
                value: peg.0,
                max: colors.saturating_sub(1),
            });
        }

        Ok(Self(pegs))
    }

    /// Pegs in slot order.
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the code has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, peg) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
