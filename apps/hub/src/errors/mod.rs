//! Error handling for the hub.

pub mod domain;
pub mod exit_status;

pub use domain::{DomainError, ValidationKind};
pub use exit_status::ExitStatus;
