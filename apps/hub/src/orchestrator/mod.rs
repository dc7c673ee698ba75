//! Player process lifecycle: spawn, handshake, teardown.

pub mod process;
pub mod roster;

pub use process::{handshake, spawn_player, ChildChannel, PlayerProcess};
pub use roster::PlayerRoster;
