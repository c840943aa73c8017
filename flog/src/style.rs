//! # Style Provider
//!
//! Named color/weight tokens and the providers that turn them into the
//! literal strings a terminal interprets.

use nu_ansi_term::{Color, Style};
use std::fmt;

const RESET: &str = "\x1b[0m";

/// Hues used by the category tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    White,
    Yellow,
    Red,
    Purple,
    Green,
    Blue,
}

impl Hue {
    pub fn name(&self) -> &'static str {
        match self {
            Hue::White => "white",
            Hue::Yellow => "yellow",
            Hue::Red => "red",
            Hue::Purple => "purple",
            Hue::Green => "green",
            Hue::Blue => "blue",
        }
    }

    fn color(self) -> Color {
        match self {
            Hue::White => Color::White,
            Hue::Yellow => Color::Yellow,
            Hue::Red => Color::Red,
            Hue::Purple => Color::Purple,
            Hue::Green => Color::Green,
            Hue::Blue => Color::Blue,
        }
    }
}

/// A symbolic style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Reset,
    Bold,
    Text(Hue),
    Background(Hue),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Reset => f.write_str("reset"),
            Token::Bold => f.write_str("bold"),
            Token::Text(hue) => write!(f, "text.{}", hue.name()),
            Token::Background(hue) => write!(f, "bg.{}", hue.name()),
        }
    }
}

/// Source of the literal strings for each [`Token`].
pub trait StyleProvider: Send + Sync {
    fn lookup(&self, token: Token) -> String;
}

/// ANSI escape sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl StyleProvider for AnsiStyle {
    fn lookup(&self, token: Token) -> String {
        match token {
            Token::Reset => RESET.to_string(),
            Token::Bold => Style::new().bold().prefix().to_string(),
            Token::Text(hue) => Style::new().fg(hue.color()).prefix().to_string(),
            Token::Background(hue) => Style::new().on(hue.color()).prefix().to_string(),
        }
    }
}

/// Renders every token as an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl StyleProvider for PlainStyle {
    fn lookup(&self, _token: Token) -> String {
        String::new()
    }
}
