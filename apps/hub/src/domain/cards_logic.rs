//! Card game logic: comparing card strength within a trick, counting suits

use super::cards_types::{Card, Suit};

/// Suit whose cards are counted towards the D-score.
pub const SCORING_SUIT: Suit = Suit::Diamonds;

/// Whether `a` strictly beats `b` in a trick led with `lead`.
///
/// Only lead-suit cards can win; there are no trumps.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    match (a_follows, b_follows) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => a.rank > b.rank,
        (false, false) => false,
    }
}

pub fn count_suit<'a, I>(cards: I, suit: Suit) -> usize
where
    I: IntoIterator<Item = &'a Card>,
{
    cards.into_iter().filter(|c| c.suit == suit).count()
}
