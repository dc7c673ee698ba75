//! Message encoders and the `PLAY` decoder.
//!
//! Outbound messages are built as complete lines so each one goes out in a
//! single write.

use crate::domain::{Card, PlayerId};
use crate::protocol::error::{MalformedKind, ProtocolError};

/// The byte a player sends once it is ready.
pub const HANDSHAKE_BYTE: u8 = b'@';

/// Longest inbound line accepted, newline included. `PLAYS2\n` is 7 bytes.
pub const MAX_LINE_LEN: usize = 16;

const PLAY_PREFIX: &str = "PLAY";

/// `HAND<n><card>,<card>,...\n`
pub fn encode_hand(cards: &[Card]) -> String {
    let body: Vec<String> = cards.iter().map(ToString::to_string).collect();
    format!("HAND{}{}\n", cards.len(), body.join(","))
}

/// `NEWROUND<leader>\n`
pub fn encode_new_round(leader: PlayerId) -> String {
    format!("NEWROUND{leader}\n")
}

/// `PLAYED<player>,<card>\n`
pub fn encode_played(player: PlayerId, card: Card) -> String {
    format!("PLAYED{player},{card}\n")
}

pub fn encode_game_over() -> &'static str {
    "GAMEOVER\n"
}

/// Decode one `PLAY<suit><rank>\n` line. Purely syntactic: whether the
/// player holds the card is the engine's business.
pub fn decode_play(line: &[u8]) -> Result<Card, ProtocolError> {
    let Some(body) = line.strip_suffix(b"\n") else {
        return Err(ProtocolError::malformed(line, MalformedKind::Unterminated));
    };
    let Some(payload) = body.strip_prefix(PLAY_PREFIX.as_bytes()) else {
        return Err(ProtocolError::malformed(line, MalformedKind::Prefix));
    };
    if payload.len() != 2 {
        return Err(ProtocolError::malformed(line, MalformedKind::Length));
    }
    std::str::from_utf8(payload)
        .ok()
        .and_then(|tok| tok.parse::<Card>().ok())
        .ok_or_else(|| ProtocolError::malformed(line, MalformedKind::Card))
}
