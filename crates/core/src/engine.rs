//! The game engine: hidden code, turn counter, and guess evaluation.

use tracing::debug;

use crate::{
    code::Code,
    config::{MAX_PEG_COLORS, MAX_SLOTS, MIN_PEG_COLORS, MIN_SLOTS, MIN_TURNS},
    error::{ConfigError, GameError},
    rng::GameRng,
    score::{score, Feedback},
};

/// Validated parameters of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Palette size; pegs are `0..colors`.
    pub colors: u8,
    /// Pegs per code.
    pub slots: usize,
    /// Guesses allowed.
    pub turns: u32,
}

impl Rules {
    /// Build rules, rejecting values outside the playable range.
    pub fn new(colors: u8, slots: usize, turns: u32) -> Result<Self, ConfigError> {
        let rules = Self {
            colors,
            slots,
            turns,
        };
        rules.validate()?;
        Ok(rules)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PEG_COLORS..=MAX_PEG_COLORS).contains(&self.colors) {
            return Err(ConfigError::Colors {
                value: self.colors,
                min: MIN_PEG_COLORS,
                max: MAX_PEG_COLORS,
            });
        }
        if self.turns < MIN_TURNS {
            return Err(ConfigError::Turns {
                value: self.turns,
                min: MIN_TURNS,
            });
        }
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&self.slots) {
            return Err(ConfigError::Slots {
                value: self.slots,
                min: MIN_SLOTS,
                max: MAX_SLOTS,
            });
        }
        Ok(())
    }

    /// Highest valid color index.
    pub fn max_color(&self) -> u8 {
        self.colors - 1
    }
}

/// A single game of Mastermind.
///
/// The hidden code is fixed at construction. Each call to
/// [`Mastermind::evaluate`] spends one turn; once the allowance is gone the
/// engine refuses further guesses rather than letting the counter run past
/// zero.
#[derive(Debug)]
pub struct Mastermind {
    rules: Rules,
    secret: Code,
    turns_remaining: u32,
}

impl Mastermind {
    /// Start a game with a hidden code drawn from `rng`.
    pub fn new(rules: Rules, rng: &mut GameRng) -> Result<Self, ConfigError> {
        rules.validate()?;
        let secret = Code::random(rules.slots, rules.colors, rng);
        Ok(Self::from_parts(rules, secret))
    }

    /// Start a game with a known hidden code.
    pub fn with_secret(rules: Rules, secret: Code) -> Result<Self, ConfigError> {
        rules.validate()?;
        if secret.len() != rules.slots {
            return Err(ConfigError::SecretLength {
                expected: rules.slots,
                actual: secret.len(),
            });
        }
        Ok(Self::from_parts(rules, secret))
    }

    fn from_parts(rules: Rules, secret: Code) -> Self {
        Self {
            rules,
            secret,
            turns_remaining: rules.turns,
        }
    }

    /// Spend a turn and score `guess` against the hidden code.
    ///
    /// Guess values outside the palette are accepted and never match.
    pub fn evaluate(&mut self, guess: &Code) -> Result<Feedback, GameError> {
        if guess.len() != self.secret.len() {
            return Err(GameError::LengthMismatch {
                expected: self.secret.len(),
                actual: guess.len(),
            });
        }
        if self.turns_remaining == 0 {
            return Err(GameError::OutOfTurns);
        }

        self.turns_remaining -= 1;
        let feedback = score(self.secret.pegs(), guess.pegs())?;
        debug!(
            black = feedback.black,
            white = feedback.white,
            turns_remaining = self.turns_remaining,
            "Guess scored"
        );
        Ok(feedback)
    }

    /// Guesses left before the game is lost.
    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Copy of the hidden code. Disclosure policy belongs to the caller.
    pub fn reveal(&self) -> Code {
        self.secret.clone()
    }

    /// Rules this game was created with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PEG_SLOTS;

    fn classic() -> Rules {
        Rules::new(8, PEG_SLOTS, 10).unwrap()
    }

    fn game(secret: &[u8]) -> Mastermind {
        Mastermind::with_secret(classic(), Code::from_values(secret)).unwrap()
    }

    #[test]
    fn rules_reject_out_of_range_values() {
        assert_eq!(
            Rules::new(1, 4, 10),
            Err(ConfigError::Colors {
                value: 1,
                min: 2,
                max: 10
            })
        );
        assert!(Rules::new(11, 4, 10).is_err());
        assert_eq!(
            Rules::new(8, 4, 1),
            Err(ConfigError::Turns { value: 1, min: 2 })
        );
        assert!(Rules::new(8, 0, 10).is_err());
        assert!(Rules::new(8, 9, 10).is_err());
        assert!(Rules::new(2, 1, 2).is_ok());
        assert!(Rules::new(10, 8, u32::MAX).is_ok());
    }

    #[test]
    fn construction_revalidates_rules() {
        let bad = Rules {
            colors: 0,
            slots: 4,
            turns: 10,
        };
        assert!(Mastermind::new(bad, &mut GameRng::new(1)).is_err());
        assert!(Mastermind::with_secret(bad, Code::from_values(&[0, 0, 0, 0])).is_err());
    }

    #[test]
    fn secret_must_match_slot_count() {
        let err = Mastermind::with_secret(classic(), Code::from_values(&[1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SecretLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn random_secret_is_seeded_and_in_palette() {
        let a = Mastermind::new(classic(), &mut GameRng::new(17)).unwrap();
        let b = Mastermind::new(classic(), &mut GameRng::new(17)).unwrap();
        assert_eq!(a.reveal(), b.reveal());
        assert_eq!(a.reveal().len(), PEG_SLOTS);
        assert!(a.reveal().pegs().iter().all(|peg| peg.value() < 8));
    }

    #[test]
    fn scenario_exact_guess() {
        let mut game = game(&[1, 2, 3, 4]);
        let fb = game.evaluate(&Code::from_values(&[1, 2, 3, 4])).unwrap();
        assert_eq!((fb.black, fb.white, fb.win), (4, 0, true));
    }

    #[test]
    fn scenario_reversed_guess() {
        let mut game = game(&[1, 2, 3, 4]);
        let fb = game.evaluate(&Code::from_values(&[4, 3, 2, 1])).unwrap();
        assert_eq!((fb.black, fb.white, fb.win), (0, 4, false));
    }

    #[test]
    fn scenario_repeated_colors() {
        let mut game = game(&[1, 1, 2, 3]);
        let fb = game.evaluate(&Code::from_values(&[1, 2, 1, 1])).unwrap();
        assert_eq!((fb.black, fb.white), (1, 2));
    }

    #[test]
    fn every_guess_spends_a_turn() {
        let mut game = game(&[1, 2, 3, 4]);
        game.evaluate(&Code::from_values(&[1, 2, 3, 4])).unwrap();
        assert_eq!(game.turns_remaining(), 9);
        game.evaluate(&Code::from_values(&[9, 9, 9, 9])).unwrap();
        assert_eq!(game.turns_remaining(), 8);
    }

    #[test]
    fn turns_run_out_after_allowance() {
        let rules = Rules::new(6, 4, 3).unwrap();
        let mut game = Mastermind::with_secret(rules, Code::from_values(&[0, 1, 2, 3])).unwrap();
        let guess = Code::from_values(&[5, 5, 5, 5]);

        for expected in (0..3).rev() {
            game.evaluate(&guess).unwrap();
            assert_eq!(game.turns_remaining(), expected);
        }

        assert_eq!(game.evaluate(&guess), Err(GameError::OutOfTurns));
        assert_eq!(game.turns_remaining(), 0);
    }

    #[test]
    fn wrong_length_guess_keeps_the_turn() {
        let mut game = game(&[1, 2, 3, 4]);
        let err = game.evaluate(&Code::from_values(&[1, 2])).unwrap_err();
        assert_eq!(
            err,
            GameError::LengthMismatch {
                expected: 4,
                actual: 2
            }
        );
        assert_eq!(game.turns_remaining(), 10);
    }

    #[test]
    fn reveal_has_no_side_effects() {
        let game = game(&[7, 0, 7, 0]);
        assert_eq!(game.reveal(), Code::from_values(&[7, 0, 7, 0]));
        assert_eq!(game.reveal(), game.reveal());
        assert_eq!(game.turns_remaining(), 10);
    }
}
