//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent catalog rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("course identifier is empty")]
    EmptyIdentifier,

    #[error("course title is empty for {0}")]
    EmptyTitle(String),

    #[error("missing title column for {0}")]
    MissingTitle(String),
}
