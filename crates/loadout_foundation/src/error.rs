//! Error types for Loadout.
//!
//! Lookups and selection edits never fail; they return `Option` or an
//! outcome value. `Error` is reserved for structural misuse that would
//! break a session invariant.

use thiserror::Error;

use crate::key::SourceId;

/// The main error type for Loadout operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate source error.
    #[must_use]
    pub fn duplicate_source(id: SourceId) -> Self {
        Self::new(ErrorKind::DuplicateSource(id))
    }

    /// Creates an already-initialized error.
    #[must_use]
    pub fn already_initialized() -> Self {
        Self::new(ErrorKind::AlreadyInitialized)
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The same source pawn appeared twice in the starting set.
    #[error("duplicate source pawn: {0}")]
    DuplicateSource(SourceId),

    /// The session was initialized twice without a reset.
    #[error("session already initialized")]
    AlreadyInitialized,

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Loadout operations.
pub type Result<T> = std::result::Result<T, Error>;
