//! Domain-level error type used by the card model, deck loader and rules.
//!
//! This error type is process- and channel-agnostic. The runner converts it
//! into a `crate::error::HubError` carrying the matching exit category.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failure kinds, one per rule the domain enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    DeckCount,
    DeckLength,
    DuplicateCard,
    NotEnoughCards,
    CardNotInHand,
    PhaseMismatch,
    OutOfTurn,
    InvalidPlayerCount,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Broken internal invariant (a bug, never player input)
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }
}
