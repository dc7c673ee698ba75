// Proptest generators for domain types.
// Cards are drawn without replacement so every generated set is duplicate-free.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::{Card, PlayerId, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
    ]
}

/// Every distinct card: 4 suits x 16 ranks.
pub fn all_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| {
            (0..=Rank::MAX).filter_map(move |v| Rank::new(v).ok().map(|rank| Card { suit, rank }))
        })
        .collect()
}

/// `n` distinct cards in random order.
pub fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(all_cards(), n).prop_shuffle()
}

/// A complete trick: (leader, plays in temporal order) for 2..=6 players.
pub fn complete_trick() -> impl Strategy<Value = (PlayerId, Vec<(PlayerId, Card)>)> {
    (2usize..=6).prop_flat_map(|players| {
        (0..players, distinct_cards(players)).prop_map(move |(leader, cards)| {
            let plays = cards
                .into_iter()
                .enumerate()
                .map(|(i, card)| ((leader + i) % players, card))
                .collect();
            (leader, plays)
        })
    })
}

/// A deck file's text with `n` distinct cards, plus the cards themselves.
pub fn deck_text(n: usize) -> impl Strategy<Value = (String, Vec<Card>)> {
    distinct_cards(n).prop_map(move |cards| {
        let body: Vec<String> = cards.iter().map(ToString::to_string).collect();
        (format!("{n}\n{}\n", body.join(" ")), cards)
    })
}
