//! Deterministic card dealing from a loaded deck.

use crate::domain::deck::Deck;
use crate::domain::state::{GameState, Phase};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Deal `hand_size` cards to each of `player_count` players in deck order.
///
/// Player 0 receives the first `hand_size` cards, player 1 the next block,
/// and so on. Dealt cards are removed from the deck; any remainder stays.
pub fn deal_hands(
    deck: &mut Deck,
    player_count: usize,
    hand_size: usize,
) -> Result<Vec<Vec<Card>>, DomainError> {
    let mut hands = Vec::with_capacity(player_count);
    for _ in 0..player_count {
        hands.push(deck.draw(hand_size)?);
    }
    Ok(hands)
}

/// Deal the game's hands from its own deck. Only valid in `Start`.
pub fn deal_game(state: &mut GameState) -> Result<(), DomainError> {
    state.require_phase(Phase::Start, "deal_game")?;
    let hands = deal_hands(
        &mut state.deck,
        state.settings.player_count,
        state.settings.hand_size,
    )?;
    state.hands = hands;
    Ok(())
}
