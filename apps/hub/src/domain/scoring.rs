use crate::domain::cards_logic::{count_suit, SCORING_SUIT};
use crate::domain::rules::final_score;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::resolve_trick;
use crate::errors::domain::DomainError;

/// What a completed round awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: PlayerId,
    /// D-suit cards played this round, all credited to the winner.
    pub d_cards: u32,
}

/// Resolve the current round, credit the winner, make them the next leader
/// and count the round as played.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundOutcome, DomainError> {
    state.require_phase(Phase::EndRound, "apply_round_scoring")?;
    let round = state.current_round()?;
    if !round.is_complete() {
        return Err(DomainError::invariant("scoring an incomplete round"));
    }
    let winner = resolve_trick(round)
        .ok_or_else(|| DomainError::invariant("complete round has no winner"))?;
    let d_cards = count_suit(round.plays.iter().map(|(_, card)| card), SCORING_SUIT) as u32;

    let score = &mut state.scores[winner];
    score.tricks += 1;
    score.d_score += d_cards;
    state.leader = winner;
    state.rounds_played += 1;

    Ok(RoundOutcome { winner, d_cards })
}

/// Final score per seat given the configured threshold.
pub fn final_scores(state: &GameState) -> Vec<i64> {
    state
        .scores
        .iter()
        .map(|s| final_score(s.tricks, s.d_score, state.settings.threshold))
        .collect()
}
