//! Card suits and their colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suit of a playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Spades
    Spades,
    /// Hearts
    Hearts,
    /// Diamonds
    Diamonds,
    /// Clubs
    Clubs,
}

/// Color printed on a suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitColor {
    /// Spades and clubs
    Black,
    /// Hearts and diamonds
    Red,
}

impl SuitColor {
    /// Lowercase color name
    pub fn as_str(self) -> &'static str {
        match self {
            SuitColor::Black => "black",
            SuitColor::Red => "red",
        }
    }
}

impl fmt::Display for SuitColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Suit {
    /// Every suit in declaration order
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Lowercase suit name
    pub fn simple_description(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }

    /// Color of the suit
    pub fn color(self) -> SuitColor {
        match self {
            Suit::Spades | Suit::Clubs => SuitColor::Black,
            Suit::Hearts | Suit::Diamonds => SuitColor::Red,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_description())
    }
}
