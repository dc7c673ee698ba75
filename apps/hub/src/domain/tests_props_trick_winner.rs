use proptest::prelude::*;

use crate::domain::state::RoundRecord;
use crate::domain::tricks::resolve_trick;
use crate::domain::{test_gens, test_prelude, Card, PlayerId};

/// Oracle: earliest play holding the maximum lead-suit rank.
fn oracle_trick_winner(plays: &[(PlayerId, Card)]) -> PlayerId {
    let lead = plays[0].1.suit;
    let best_rank = plays
        .iter()
        .filter(|(_, c)| c.suit == lead)
        .map(|(_, c)| c.rank)
        .max()
        .unwrap_or(plays[0].1.rank);
    plays
        .iter()
        .find(|(_, c)| c.suit == lead && c.rank == best_rank)
        .map(|(who, _)| *who)
        .unwrap_or(plays[0].0)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the winner holds the highest lead-suit card and matches the oracle.
    #[test]
    fn prop_trick_winner_is_highest_lead_card(
        (leader, plays) in test_gens::complete_trick(),
    ) {
        let mut round = RoundRecord::new(leader, plays.len());
        for &(who, card) in &plays {
            round.record(who, card);
        }

        let winner = resolve_trick(&round);
        prop_assert!(winner.is_some(), "Complete trick must have a winner");
        let winner = winner.unwrap();
        prop_assert_eq!(winner, oracle_trick_winner(&plays));

        let lead = plays[0].1.suit;
        let winner_card = round.by_seat[winner].unwrap();
        prop_assert_eq!(winner_card.suit, lead, "Winner must follow the lead suit");
        for (_, card) in plays.iter().filter(|(_, c)| c.suit == lead) {
            prop_assert!(winner_card.rank >= card.rank);
        }
    }

    /// Property: the result does not depend on which seat led, only on the cards.
    #[test]
    fn prop_trick_winner_tracks_the_card_not_the_seat(
        (leader, plays) in test_gens::complete_trick(),
    ) {
        let players = plays.len();
        let mut round = RoundRecord::new(leader, players);
        let mut rotated = RoundRecord::new((leader + 1) % players, players);
        for &(who, card) in &plays {
            round.record(who, card);
            rotated.record((who + 1) % players, card);
        }

        let a = resolve_trick(&round).unwrap();
        let b = resolve_trick(&rotated).unwrap();
        prop_assert_eq!((a + 1) % players, b);
    }
}
