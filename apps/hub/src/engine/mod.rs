//! The round engine: drives one game over a set of player channels.

pub mod report;
pub mod round_engine;

pub use round_engine::{play_game, RoundEngine};
