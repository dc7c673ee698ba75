use proptest::prelude::*;

use crate::domain::rules::final_score;
use crate::domain::scoring::final_scores;
use crate::domain::state::{GameSettings, GameState, SeatScore};
use crate::domain::{parse_deck, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: D counts for the player at or above the threshold and
    /// against them below it; tricks always count.
    #[test]
    fn prop_final_score_switches_at_threshold(
        tricks in 0u32..=60,
        d_score in 0u32..=60,
        threshold in 1u32..=70,
    ) {
        let score = final_score(tricks, d_score, threshold);
        let (t, d) = (i64::from(tricks), i64::from(d_score));
        if d_score >= threshold {
            prop_assert_eq!(score, t + d);
        } else {
            prop_assert_eq!(score, t - d);
        }
    }

    /// Property: reaching the threshold exactly is enough, one short is not.
    #[test]
    fn prop_threshold_boundary(tricks in 0u32..=60, threshold in 1u32..=60) {
        let at = final_score(tricks, threshold, threshold);
        let below = final_score(tricks, threshold - 1, threshold);
        prop_assert_eq!(at, i64::from(tricks) + i64::from(threshold));
        prop_assert_eq!(below, i64::from(tricks) - i64::from(threshold - 1));
        prop_assert!(at > below);
    }

    /// Property: final_scores applies the formula seat by seat with the
    /// game's threshold.
    #[test]
    fn prop_final_scores_per_seat(
        seats in prop::collection::vec((0u32..=30, 0u32..=30), 2..=6),
        threshold in 1u32..=30,
    ) {
        let deck = parse_deck("1\nS2").unwrap();
        let settings = GameSettings { player_count: seats.len(), threshold, hand_size: 0 };
        let mut state = GameState::new(settings, deck);
        state.scores = seats
            .iter()
            .map(|&(tricks, d_score)| SeatScore { tricks, d_score })
            .collect();

        let scores = final_scores(&state);
        prop_assert_eq!(scores.len(), seats.len());
        for (score, &(tricks, d_score)) in scores.iter().zip(&seats) {
            prop_assert_eq!(*score, final_score(tricks, d_score, threshold));
        }
    }
}
