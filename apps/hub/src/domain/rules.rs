use crate::errors::domain::{DomainError, ValidationKind};

/// Largest card count a deck file may declare.
pub const MAX_DECK_CARDS: usize = 60;
pub const MIN_PLAYERS: usize = 2;

/// Cards dealt to each player: `floor(deck / players)`, remainder unused.
pub fn hand_size_for(deck_count: usize, player_count: usize) -> Result<usize, DomainError> {
    if player_count < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("At least {MIN_PLAYERS} players required, got {player_count}"),
        ));
    }
    if deck_count < player_count {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughCards,
            format!("{deck_count} cards cannot serve {player_count} players"),
        ));
    }
    Ok(deck_count / player_count)
}

/// Final score: D-score counts for the player once it reaches the threshold.
pub fn final_score(tricks: u32, d_score: u32, threshold: u32) -> i64 {
    let (tricks, d) = (i64::from(tricks), i64::from(d_score));
    if d_score >= threshold {
        tricks + d
    } else {
        tricks - d
    }
}
