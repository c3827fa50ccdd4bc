use guided_tour::{create_deck, Card, Rank, Suit, SuitColor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_rank_and_suit_appears_exactly_once(raw in 1u8..=13, suit_index in 0usize..4) {
        let rank = Rank::try_from(raw).unwrap();
        let suit = Suit::ALL[suit_index];
        let card = Card::new(rank, suit);
        let count = create_deck().iter().filter(|c| **c == card).count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn raw_value_round_trips(raw in 1u8..=13) {
        let rank = Rank::from_raw(raw).unwrap();
        prop_assert_eq!(rank.raw_value(), raw);
    }

    #[test]
    fn numbered_ranks_describe_as_numbers(raw in 2u8..=10) {
        let rank = Rank::from_raw(raw).unwrap();
        prop_assert_eq!(rank.simple_description(), raw.to_string());
    }

    #[test]
    fn invalid_raw_values_are_rejected(raw in 14u8..=u8::MAX) {
        prop_assert!(Rank::from_raw(raw).is_none());
    }
}

#[test]
fn deck_has_thirteen_cards_per_suit_and_half_are_red() {
    let deck = create_deck();
    for suit in Suit::ALL {
        assert_eq!(deck.iter().filter(|card| card.suit == suit).count(), 13);
    }
    let red = deck
        .iter()
        .filter(|card| card.suit.color() == SuitColor::Red)
        .count();
    assert_eq!(red, 26);
}
