//! Deck model and deck-file loading.
//!
//! A deck file is whitespace separated: a decimal card count followed by
//! exactly that many two-character card tokens.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::rules::MAX_DECK_CARDS;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards not yet dealt, in file order. Only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, rejecting duplicates.
    pub fn new(cards: Vec<Card>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(*card) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateCard,
                    format!("Duplicate card in deck: {card}"),
                ));
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Take the next `n` cards from the top, in deck order.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughCards,
                format!("Cannot draw {n} cards from {}", self.cards.len()),
            ));
        }
        Ok(self.cards.drain(..n).collect())
    }
}

/// Parse the textual deck format.
pub fn parse_deck(text: &str) -> Result<Deck, DomainError> {
    let mut tokens = text.split_whitespace();

    let count_tok = tokens.next().ok_or_else(|| {
        DomainError::validation(ValidationKind::DeckCount, "Deck file is empty")
    })?;
    if count_tok.is_empty() || !count_tok.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation(
            ValidationKind::DeckCount,
            format!("Card count is not a number: {count_tok:?}"),
        ));
    }
    let declared: usize = count_tok.parse().map_err(|_| {
        DomainError::validation(
            ValidationKind::DeckCount,
            format!("Card count out of range: {count_tok:?}"),
        )
    })?;
    if !(1..=MAX_DECK_CARDS).contains(&declared) {
        return Err(DomainError::validation(
            ValidationKind::DeckCount,
            format!("Card count must be 1..={MAX_DECK_CARDS}, got {declared}"),
        ));
    }

    let cards = try_parse_cards(tokens)?;
    if cards.len() != declared {
        return Err(DomainError::validation(
            ValidationKind::DeckLength,
            format!("Deck declares {declared} cards but lists {}", cards.len()),
        ));
    }

    Deck::new(cards)
}

/// Read and parse a deck file.
pub fn load_deck(path: &Path) -> Result<Deck, DomainError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DomainError::validation(
            ValidationKind::DeckCount,
            format!("Cannot read deck {}: {e}", path.display()),
        )
    })?;
    parse_deck(&text)
}
