//! Process exit statuses for the hub.
//!
//! Every way the hub can finish maps to exactly one variant here. Add new
//! outcomes here; never exit with an ad-hoc number.

use core::fmt;

/// Outcome categories, each with a stable exit code and diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// Game played to completion
    Ok,

    // Startup
    /// Too few command line arguments
    Usage,
    /// Threshold is not a positive integer
    InvalidThreshold,
    /// Deck file missing or malformed
    DeckError,
    /// Fewer cards than players
    NotEnoughCards,
    /// A player could not be spawned or failed the handshake
    PlayerStart,

    // In-game
    /// A player closed its channel mid-game
    PlayerEof,
    /// A player sent something other than a valid play
    InvalidMessage,
    /// A player played a card it does not hold
    InvalidCardChoice,

    // Asynchronous
    /// Hang-up signal received
    Signalled,
}

impl ExitStatus {
    /// Process exit code for this outcome.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Usage => 1,
            Self::InvalidThreshold => 2,
            Self::DeckError => 3,
            Self::NotEnoughCards => 4,
            Self::PlayerStart => 5,
            Self::PlayerEof => 6,
            Self::InvalidMessage => 7,
            Self::InvalidCardChoice => 8,
            Self::Signalled => 9,
        }
    }

    /// The single diagnostic line written to stderr, empty for success.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Ok => "",
            Self::Usage => "Usage: hub deck threshold player0 {player1}",
            Self::InvalidThreshold => "Invalid threshold",
            Self::DeckError => "Deck error",
            Self::NotEnoughCards => "Not enough cards",
            Self::PlayerStart => "Player error",
            Self::PlayerEof => "Player EOF",
            Self::InvalidMessage => "Invalid message",
            Self::InvalidCardChoice => "Invalid card choice",
            Self::Signalled => "Ended due to signal",
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}
