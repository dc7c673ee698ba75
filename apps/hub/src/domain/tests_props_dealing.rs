use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::deal_game;
use crate::domain::deck::parse_deck;
use crate::domain::rules::{hand_size_for, MAX_DECK_CARDS};
use crate::domain::state::{GameSettings, GameState};
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: dealing consumes exactly players * floor(C / players) distinct
    /// cards, in deck order, and leaves the remainder in the deck.
    #[test]
    fn prop_dealing_consumes_exact_blocks(
        (players, (text, cards)) in (2usize..=8).prop_flat_map(|players| {
            (Just(players), (players..=MAX_DECK_CARDS).prop_flat_map(test_gens::deck_text))
        }),
    ) {
        let deck = parse_deck(&text).unwrap();
        prop_assert_eq!(deck.cards(), cards.as_slice());

        let hand_size = hand_size_for(deck.len(), players).unwrap();
        prop_assert_eq!(hand_size, cards.len() / players);

        let settings = GameSettings { player_count: players, threshold: 2, hand_size };
        let mut state = GameState::new(settings, deck);
        deal_game(&mut state).unwrap();

        let dealt: Vec<Card> = state.hands.iter().flatten().copied().collect();
        prop_assert_eq!(dealt.len(), players * hand_size);
        prop_assert_eq!(&dealt[..], &cards[..players * hand_size]);

        let unique: HashSet<Card> = dealt.iter().copied().collect();
        prop_assert_eq!(unique.len(), dealt.len(), "No card may be dealt twice");

        for hand in &state.hands {
            prop_assert_eq!(hand.len(), hand_size);
        }
        prop_assert_eq!(state.deck.cards(), &cards[players * hand_size..]);
    }
}
