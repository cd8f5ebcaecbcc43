//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;
use mastermind_core::Overrides;

#[derive(Parser, Debug, Clone)]
#[command(name = "mastermind")]
#[command(about = "Guess the hidden pegs in as few turns as you can")]
#[command(
    long_about = "Terminal Mastermind. Colors are numbers: with 8 colors the pegs are 0 to 7.
After each guess you get black keys (right color, right place) and white keys
(right color, wrong place).

Settings are read from config.toml and MASTERMIND_* environment variables.
Command-line flags take highest priority."
)]
pub struct Cli {
    /// Numbers [0 --> NUMBER) are used as color pegs; 2 to 10, default 8
    #[arg(
        short = 'c',
        long = "colors",
        value_name = "NUMBER",
        allow_hyphen_values = true,
        value_parser = lenient_number
    )]
    pub colors: Option<i64>,

    /// How many turns are allowed to try; at least 2, default 10
    #[arg(
        short = 't',
        long = "turns",
        value_name = "TRIES_ALLOWED",
        allow_hyphen_values = true,
        value_parser = lenient_number
    )]
    pub turns: Option<i64>,

    /// Pegs in the hidden code; 1 to 8, default 4
    #[arg(
        short = 's',
        long = "slots",
        value_name = "NUMBER",
        allow_hyphen_values = true,
        value_parser = lenient_number
    )]
    pub slots: Option<i64>,

    /// Seed for a reproducible hidden code
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print plain text without terminal colors
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            colors: self.colors,
            turns: self.turns,
            slots: self.slots,
            seed: self.seed,
            no_color: self.no_color,
        }
    }
}

/// Read a numeric flag the way `atoi` does, so any value reaches clamping.
///
/// Leading whitespace and a sign are accepted, digits are read up to the
/// first non-digit, and text with no leading digits reads as 0. Values past
/// the `i64` range saturate.
fn lenient_number(raw: &str) -> Result<i64, String> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};
    use mastermind_core::AppConfig;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plain_invocation_overrides_nothing() {
        let cli = Cli::try_parse_from(["mastermind"]).unwrap();
        assert_eq!(cli.overrides(), Overrides::default());
    }

    #[test]
    fn short_flags_match_classic_usage() {
        let cli = Cli::try_parse_from(["mastermind", "-c", "15", "-t", "3"]).unwrap();
        assert_eq!(cli.colors, Some(15));
        assert_eq!(cli.turns, Some(3));
        assert_eq!(cli.slots, None);
    }

    #[test]
    fn negative_values_reach_clamping() {
        let cli = Cli::try_parse_from(["mastermind", "-c", "-4", "-t", "-1"]).unwrap();
        assert_eq!(cli.colors, Some(-4));
        assert_eq!(cli.turns, Some(-1));
    }

    #[test]
    fn non_numeric_values_read_as_zero() {
        let cli = Cli::try_parse_from(["mastermind", "-c", "abc", "-t", "x"]).unwrap();
        assert_eq!(cli.colors, Some(0));
        assert_eq!(cli.turns, Some(0));

        let mut settings = AppConfig::default();
        settings.apply_overrides(&cli.overrides());
        let (rules, warnings) = settings.clamp();
        assert_eq!(rules.colors, 2);
        assert_eq!(rules.turns, 2);
        assert_eq!(warnings[0].to_string(), "Wrong number of colors, set to 2");
    }

    #[test]
    fn overflowing_values_saturate() {
        let cli = Cli::try_parse_from(["mastermind", "-c", "99999999999999999999"]).unwrap();
        assert_eq!(cli.colors, Some(i64::MAX));

        let cli = Cli::try_parse_from(["mastermind", "-c", "-99999999999999999999"]).unwrap();
        assert_eq!(cli.colors, Some(i64::MIN));

        let cli = Cli::try_parse_from(["mastermind", "-c", "99999999999999999999"]).unwrap();
        let mut settings = AppConfig::default();
        settings.apply_overrides(&cli.overrides());
        let (rules, warnings) = settings.clamp();
        assert_eq!(rules.colors, 10);
        assert_eq!(warnings[0].to_string(), "Wrong number of colors, set to 10");
    }

    #[test]
    fn trailing_junk_is_ignored() {
        assert_eq!(lenient_number("12abc"), Ok(12));
        assert_eq!(lenient_number("  +7"), Ok(7));
        assert_eq!(lenient_number("-3"), Ok(-3));
        assert_eq!(lenient_number(""), Ok(0));
        assert_eq!(lenient_number("-"), Ok(0));
    }

    #[test]
    fn help_is_a_display_request() {
        let err = Cli::try_parse_from(["mastermind", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn long_flags_fill_overrides() {
        let cli = Cli::try_parse_from([
            "mastermind",
            "--slots",
            "5",
            "--seed",
            "99",
            "--no-color",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.slots, Some(5));
        assert_eq!(overrides.seed, Some(99));
        assert!(overrides.no_color);
    }
}
