//! Text shown to the player.

use crossterm::style::{style, Color, Stylize};
use mastermind_core::{Code, Feedback, Peg, Rules};

const PEG_COLORS: [Color; 10] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
];

/// Formats game text, optionally with ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn banner(&self, rules: &Rules) -> String {
        format!(
            "The game is starting. You can try {} turns to guess the {} hidden numbers.\n\
             Each hidden number is from 0 to {}.",
            rules.turns,
            rules.slots,
            rules.max_color()
        )
    }

    pub fn prompt(&self, rules: &Rules) -> String {
        format!(
            "Please input {} numbers[0 -- {}] separated by whitespace: ",
            rules.slots,
            rules.max_color()
        )
    }

    pub fn feedback(&self, guess: &Code, feedback: &Feedback) -> String {
        if !self.color {
            return format!(
                "Black keys: {}, White keys: {}",
                feedback.black, feedback.white
            );
        }

        format!(
            "{}  Black keys: {}, White keys: {}",
            self.code(guess),
            style(feedback.black).bold(),
            style(feedback.white).bold()
        )
    }

    pub fn win(&self) -> String {
        let text = "Congratulations! You win!";
        if self.color {
            style(text).with(Color::Green).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn loss(&self, secret: &Code) -> String {
        let text = "Sorry! You lost!";
        let headline = if self.color {
            style(text).with(Color::Red).bold().to_string()
        } else {
            text.to_string()
        };
        format!("{headline}\nThe hidden pegs: {}", self.code(secret))
    }

    pub fn code(&self, code: &Code) -> String {
        if !self.color {
            return code.to_string();
        }
        code.pegs()
            .iter()
            .map(|peg| self.peg(*peg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn peg(&self, peg: Peg) -> String {
        match PEG_COLORS.get(usize::from(peg.value())) {
            Some(color) => style(peg).with(*color).bold().to_string(),
            None => peg.to_string(),
        }
    }
}
