use thiserror::Error;

use crate::domain::{Card, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ExitStatus;
use crate::protocol::ProtocolError;

/// Every way a hub run can fail. Each variant maps to one exit status.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Usage error: {detail}")]
    Usage { detail: String },
    #[error("Invalid threshold: {detail}")]
    InvalidThreshold { detail: String },
    #[error("Deck error: {source}")]
    Deck { source: DomainError },
    #[error("Not enough cards: {source}")]
    NotEnoughCards { source: DomainError },
    #[error("Player {seat} failed to start: {detail}")]
    PlayerStart { seat: PlayerId, detail: String },
    #[error("Player {seat} closed its channel: {source}")]
    PlayerEof {
        seat: PlayerId,
        source: ProtocolError,
    },
    #[error("Player {seat} sent an invalid message: {source}")]
    InvalidMessage {
        seat: PlayerId,
        source: ProtocolError,
    },
    #[error("Player {seat} played {card}, which it does not hold")]
    InvalidCardChoice { seat: PlayerId, card: Card },
    #[error("Hang-up signal received")]
    Signalled,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl HubError {
    /// Exit category for this failure.
    pub fn status(&self) -> ExitStatus {
        match self {
            HubError::Usage { .. } => ExitStatus::Usage,
            HubError::InvalidThreshold { .. } => ExitStatus::InvalidThreshold,
            HubError::Deck { .. } => ExitStatus::DeckError,
            HubError::NotEnoughCards { .. } => ExitStatus::NotEnoughCards,
            HubError::PlayerStart { .. } => ExitStatus::PlayerStart,
            HubError::PlayerEof { .. } => ExitStatus::PlayerEof,
            HubError::InvalidMessage { .. } => ExitStatus::InvalidMessage,
            HubError::InvalidCardChoice { .. } => ExitStatus::InvalidCardChoice,
            HubError::Signalled => ExitStatus::Signalled,
            // Bugs surface as a player error rather than a false success
            HubError::Internal { .. } => ExitStatus::PlayerEof,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.status().code()
    }

    /// The one-line stderr diagnostic for this failure.
    pub fn diagnostic(&self) -> &'static str {
        self.status().message()
    }

    /// Any failure while starting or handshaking a player.
    pub fn player_start(seat: PlayerId, detail: impl ToString) -> Self {
        HubError::PlayerStart {
            seat,
            detail: detail.to_string(),
        }
    }

    /// Classify a channel failure that happened mid-game.
    pub fn from_protocol(seat: PlayerId, err: ProtocolError) -> Self {
        match err {
            ProtocolError::Malformed { .. } | ProtocolError::BadHandshake(_) => {
                HubError::InvalidMessage { seat, source: err }
            }
            ProtocolError::Eof
            | ProtocolError::Read(_)
            | ProtocolError::Write(_)
            | ProtocolError::Closed => HubError::PlayerEof { seat, source: err },
        }
    }

    /// Classify a rule violation by the player in `seat` who tried `card`.
    pub fn from_play(seat: PlayerId, card: Card, err: DomainError) -> Self {
        match err.kind() {
            Some(ValidationKind::CardNotInHand) => HubError::InvalidCardChoice { seat, card },
            _ => HubError::from(err),
        }
    }
}

impl From<DomainError> for HubError {
    fn from(err: DomainError) -> Self {
        match err.kind() {
            Some(ValidationKind::NotEnoughCards) => HubError::NotEnoughCards { source: err },
            Some(
                ValidationKind::ParseCard
                | ValidationKind::DeckCount
                | ValidationKind::DeckLength
                | ValidationKind::DuplicateCard,
            ) => HubError::Deck { source: err },
            _ => HubError::Internal {
                detail: err.to_string(),
            },
        }
    }
}
