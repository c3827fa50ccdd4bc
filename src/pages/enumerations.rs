use crate::enumerations::{compare_rank, create_deck, Card, Rank, ServerResponse, Suit, Weather};
use crate::errors::TourResult;
use crate::pages::Page;
use crate::runner::{Demonstration, PageContext};

/// Ranks, suits, cards, server responses and weather
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationsPage;

impl Demonstration for EnumerationsPage {
    fn page(&self) -> Page {
        Page::EnumerationsAndStructures
    }

    fn run(&self, ctx: &mut PageContext<'_>) -> TourResult<()> {
        let ace = Rank::Ace;
        ctx.say(format!("ace raw value: {}", ace.raw_value()));
        ctx.say(format!(
            "ace equals Rank::Ace: {}",
            compare_rank(ace, Rank::Ace)
        ));

        let king = Rank::try_from(13u8)?;
        ctx.say(format!("raw value 13 is the {king}"));
        if let Some(converted) = Rank::from_raw(12) {
            ctx.say(format!("raw value 12 is the {}", converted.simple_description()));
        }
        ctx.say(format!("raw value 0 is {:?}", Rank::from_raw(0)));

        let hearts = Suit::Hearts;
        let diamonds = Suit::Diamonds;
        ctx.say(format!("{} are {}", hearts.simple_description(), hearts.color()));
        ctx.say(format!("{} are {}", diamonds.simple_description(), diamonds.color()));

        let success = ServerResponse::result("6:00 am", "8:09 pm");
        let failure = ServerResponse::failure("Out of cheese.");
        ctx.say(success.describe());
        ctx.say(failure.describe());

        let three_of_spades = Card::new(Rank::Three, Suit::Spades);
        ctx.say(three_of_spades.simple_description());

        let deck = create_deck();
        ctx.say(format!(
            "A full deck has {} cards, from {} to {}",
            deck.len(),
            deck.first().map(Card::simple_description).unwrap_or_default(),
            deck.last().map(Card::simple_description).unwrap_or_default(),
        ));

        ctx.say(format!("snow raw value: {}", Weather::Snow.raw_value()));
        Ok(())
    }
}
