use crate::domain::card_beats;
use crate::domain::state::{next_player, GameState, Phase, PlayerId, RoundRecord};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether every seat has now played in this round.
    pub trick_completed: bool,
    /// Seat expected to play next (None once the trick is complete).
    pub next_turn: Option<PlayerId>,
}

/// Play a card into the current trick, enforcing phase, turn and possession.
///
/// Nothing is mutated unless the play is accepted.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    state.require_phase(Phase::Playing, "play_card")?;

    let turn = state
        .turn
        .ok_or_else(|| DomainError::invariant("turn must be set while Playing"))?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("Player {who} played out of turn (expected {turn})"),
        ));
    }

    let Some(pos) = state.hands[who].iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Player {who} does not hold {card}"),
        ));
    };

    let removed = state.hands[who].remove(pos);
    let last_player = state.last_player;
    let round = state
        .rounds
        .last_mut()
        .ok_or_else(|| DomainError::invariant("no round open while Playing"))?;
    round.record(who, removed);

    let trick_completed = round.is_complete();
    debug_assert_eq!(trick_completed, who == last_player);
    state.turn = if trick_completed {
        None
    } else {
        Some(next_player(who, state.settings.player_count))
    };

    Ok(PlayCardResult {
        trick_completed,
        next_turn: state.turn,
    })
}

/// Resolve a round's winner: the highest lead-suit card, first played on ties.
pub fn resolve_trick(round: &RoundRecord) -> Option<PlayerId> {
    let lead = round.lead_suit()?;
    let (mut best_who, mut best_card) = round.plays[0];
    for &(who, card) in &round.plays[1..] {
        if card_beats(card, best_card, lead) {
            best_who = who;
            best_card = card;
        }
    }
    Some(best_who)
}
