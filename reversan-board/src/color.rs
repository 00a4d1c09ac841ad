//! The two sides of the game.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two disc colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting color (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid color name")]
pub struct ParseColorError;

/// Parse a color from its name or its disc symbol ("black" / "X", "white" / "O").
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "x" => Ok(Color::Black),
            "white" | "o" => Ok(Color::White),
            _ => {
                log::debug!("rejected color {:?}", s);
                Err(ParseColorError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn parse() {
        assert_eq!("Black".parse(), Ok(Color::Black));
        assert_eq!("o".parse(), Ok(Color::White));
        assert_eq!("grey".parse::<Color>(), Err(ParseColorError));
    }
}
