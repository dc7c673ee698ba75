//! Core card-related types: Card, Rank, Suit

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// Wire/deck-file letter for this suit.
    pub const fn as_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = DomainError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'S' => Ok(Suit::Spades),
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid suit: {ch:?}"),
            )),
        }
    }
}

/// Card rank written as one lowercase hex digit; compares by its value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const MAX: u8 = 15;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid rank value: {value}"),
            ));
        }
        Ok(Rank(value))
    }

    pub fn as_char(self) -> char {
        // value is always <= 15
        char::from_digit(u32::from(self.0), 16).unwrap_or('?')
    }
}

impl TryFrom<char> for Rank {
    type Error = DomainError;

    /// Only `0-9` and lowercase `a-f` are ranks.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        let value = match ch {
            '0'..='9' | 'a'..='f' => ch.to_digit(16),
            _ => None,
        };
        value.map(|v| Rank(v as u8)).ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Invalid rank: {ch:?}"))
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

// Note: Ord on Card is only for stable sorting (suit then rank).
// Trick resolution compares ranks within the lead suit; see cards_logic.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
