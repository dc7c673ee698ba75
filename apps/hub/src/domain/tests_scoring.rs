use crate::domain::dealing::deal_game;
use crate::domain::deck::parse_deck;
use crate::domain::scoring::{apply_round_scoring, final_scores, RoundOutcome};
use crate::domain::state::{GameSettings, GameState, Phase, SeatScore};
use crate::domain::tricks::play_card;
use crate::domain::Card;

fn c(tok: &str) -> Card {
    tok.parse().unwrap()
}

fn dealt_state(deck: &str, player_count: usize, threshold: u32) -> GameState {
    let deck = parse_deck(deck).unwrap();
    let hand_size = deck.len() / player_count;
    let settings = GameSettings {
        player_count,
        threshold,
        hand_size,
    };
    let mut state = GameState::new(settings, deck);
    deal_game(&mut state).unwrap();
    state.phase = Phase::NewRound;
    state
}

/// Play one full round with the given cards, in turn order from the leader.
fn play_round(state: &mut GameState, cards: &[&str]) -> RoundOutcome {
    state.phase = Phase::NewRound;
    state.begin_round().unwrap();
    state.phase = Phase::Playing;
    for tok in cards {
        let who = state.turn.unwrap();
        play_card(state, who, c(tok)).unwrap();
    }
    state.phase = Phase::EndRound;
    apply_round_scoring(state).unwrap()
}

#[test]
fn two_player_scenario_matches_accounting() {
    // P0: S2 H3, P1: D4 C5; threshold 1
    let mut state = dealt_state("4\nS2 H3 D4 C5", 2, 1);

    let first = play_round(&mut state, &["S2", "D4"]);
    assert_eq!(first, RoundOutcome { winner: 0, d_cards: 1 });
    assert_eq!(state.leader, 0);

    let second = play_round(&mut state, &["H3", "C5"]);
    assert_eq!(second, RoundOutcome { winner: 0, d_cards: 0 });

    assert_eq!(state.rounds_played, 2);
    assert!(!state.rounds_remaining());
    assert_eq!(
        state.scores,
        vec![
            SeatScore { tricks: 2, d_score: 1 },
            SeatScore { tricks: 0, d_score: 0 },
        ]
    );
    assert_eq!(final_scores(&state), vec![3, 0]);
}

#[test]
fn winner_leads_next_round() {
    // P0: S2 H3, P1: Sa D4, P2: Db Hc
    let mut state = dealt_state("6\nS2 H3 Sa D4 Db Hc", 3, 2);

    let first = play_round(&mut state, &["S2", "Sa", "Db"]);
    assert_eq!(first, RoundOutcome { winner: 1, d_cards: 1 });
    assert_eq!(state.leader, 1);

    // Leader 1 leads D4, then 2 plays Hc, then 0 plays H3
    let second = play_round(&mut state, &["D4", "Hc", "H3"]);
    assert_eq!(second, RoundOutcome { winner: 1, d_cards: 1 });
    assert_eq!(state.rounds[1].leader, 1);
    assert_eq!(
        state.rounds[1].plays,
        vec![(1, c("D4")), (2, c("Hc")), (0, c("H3"))]
    );

    // P1 collected 2 D cards with threshold 2: 2 + 2
    assert_eq!(final_scores(&state), vec![0, 4, 0]);
}

#[test]
fn below_threshold_subtracts() {
    // P0: D2 D3, P1: D4 D5; P1 wins both rounds holding 4 D cards
    let mut state = dealt_state("4\nD2 D3 D4 D5", 2, 5);
    play_round(&mut state, &["D2", "D4"]);
    play_round(&mut state, &["D5", "D3"]);
    assert_eq!(state.scores[1], SeatScore { tricks: 2, d_score: 4 });
    assert_eq!(final_scores(&state), vec![0, -2]);
}

#[test]
fn scoring_requires_end_round_phase() {
    let mut state = dealt_state("4\nS2 H3 D4 C5", 2, 1);
    assert!(apply_round_scoring(&mut state).is_err());
}
