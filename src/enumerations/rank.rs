// Copyright 2025 Cowboy AI, LLC.

//! Card ranks with integer raw values

use crate::errors::{TourError, TourResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a playing card
///
/// Raw values start at 1 for the ace and increase by one up to the king.
///
/// # Examples
///
/// ```rust
/// use guided_tour::Rank;
///
/// let ace = Rank::Ace;
/// assert_eq!(ace.raw_value(), 1);
/// assert_eq!(Rank::from_raw(12), Some(Rank::Queen));
/// assert_eq!(Rank::from_raw(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Every rank, ordered by raw value
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The raw integer value of this rank
    pub fn raw_value(self) -> u8 {
        self as u8
    }

    /// Look up the rank for a raw value, `None` when nothing matches
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|rank| rank.raw_value() == raw)
    }

    /// Face cards and the ace by name, everything else by number
    pub fn simple_description(self) -> String {
        match self {
            Rank::Ace => "ace".to_string(),
            Rank::Jack => "jack".to_string(),
            Rank::Queen => "queen".to_string(),
            Rank::King => "king".to_string(),
            other => other.raw_value().to_string(),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = TourError;

    fn try_from(raw: u8) -> TourResult<Self> {
        Rank::from_raw(raw).ok_or(TourError::InvalidRank(raw))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_description())
    }
}

/// Compare two ranks by their raw values
pub fn compare_rank(a: Rank, b: Rank) -> bool {
    a.raw_value() == b.raw_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, "ace")]
    #[test_case(2, "2")]
    #[test_case(7, "7")]
    #[test_case(10, "10")]
    #[test_case(11, "jack")]
    #[test_case(12, "queen")]
    #[test_case(13, "king")]
    fn test_simple_description(raw: u8, expected: &str) {
        let rank = Rank::try_from(raw).unwrap();
        assert_eq!(rank.simple_description(), expected);
    }

    #[test_case(0)]
    #[test_case(14)]
    #[test_case(255)]
    fn test_out_of_range_raw_values(raw: u8) {
        assert_eq!(Rank::from_raw(raw), None);
        assert_eq!(Rank::try_from(raw), Err(TourError::InvalidRank(raw)));
    }

    #[test]
    fn test_raw_values_are_sequential() {
        for (index, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.raw_value() as usize, index + 1);
        }
    }

    #[test]
    fn test_compare_rank() {
        assert!(compare_rank(Rank::Ace, Rank::Ace));
        assert!(!compare_rank(Rank::Ace, Rank::King));
    }
}
