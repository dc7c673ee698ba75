//! Line protocol spoken between the hub and its players.

pub mod channel;
pub mod error;
pub mod messages;

pub use channel::PlayerChannel;
pub use error::{MalformedKind, ProtocolError};
pub use messages::{
    decode_play, encode_game_over, encode_hand, encode_new_round, encode_played, HANDSHAKE_BYTE,
    MAX_LINE_LEN,
};
