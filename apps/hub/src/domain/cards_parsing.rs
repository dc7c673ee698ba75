//! Card parsing from and formatting to two-character tokens (e.g., "S2", "Da")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(suit_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s:?}"),
            ));
        };
        let suit = Suit::try_from(suit_ch)?;
        let rank = Rank::try_from(rank_ch)?;
        Ok(Card { suit, rank })
    }
}

/// Wire form: suit letter followed by rank digit, e.g. `Hc`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.as_char(), self.rank.as_char())
    }
}

/// Non-panicking helper to parse card tokens (e.g., "S2", "Hf") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
