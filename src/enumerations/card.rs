// Copyright 2025 Cowboy AI, LLC.

//! Playing cards as copyable value objects

use super::{Rank, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playing card: one rank of one suit
///
/// Cards are plain values. Copying a card never aliases the original.
///
/// # Examples
///
/// ```rust
/// use guided_tour::{Card, Rank, Suit};
///
/// let three_of_spades = Card::new(Rank::Three, Suit::Spades);
/// assert_eq!(three_of_spades.simple_description(), "The 3 of spades");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank of the card
    pub rank: Rank,
    /// Suit of the card
    pub suit: Suit,
}

impl Card {
    /// Create a card
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// "The <rank> of <suit>"
    pub fn simple_description(&self) -> String {
        format!(
            "The {} of {}",
            self.rank.simple_description(),
            self.suit.simple_description()
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_description())
    }
}

/// Build a full deck: one card for every suit and rank pair
///
/// Suits vary slowest, so the deck starts with all the spades.
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_card_description() {
        assert_eq!(
            Card::new(Rank::Queen, Suit::Hearts).simple_description(),
            "The queen of hearts"
        );
    }

    #[test]
    fn test_deck_is_complete_and_unique() {
        let deck = create_deck();
        assert_eq!(deck.len(), 52);

        let distinct: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn test_deck_order() {
        let deck = create_deck();
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck[12], Card::new(Rank::King, Suit::Spades));
        assert_eq!(deck[13], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck[51], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn test_card_is_copied_not_shared() {
        let original = Card::new(Rank::Three, Suit::Spades);
        let mut copy = original;
        copy.suit = Suit::Clubs;
        assert_eq!(original.suit, Suit::Spades);
        assert_eq!(copy.suit, Suit::Clubs);
    }
}
