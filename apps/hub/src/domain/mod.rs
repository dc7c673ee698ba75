//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, count_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_game, deal_hands};
pub use deck::{load_deck, parse_deck, Deck};
pub use rules::hand_size_for;
pub use state::{GameSettings, GameState, Phase, PlayerId, RoundRecord};
