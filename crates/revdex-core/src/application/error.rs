//! Application layer errors.
//!
//! [`Rejection`] is the tagged outcome of a use case: every failure an
//! HTTP-style caller can observe, with the exact message it must display.
//! [`StoreError`] is what a repository adapter may fail with; it never
//! crosses the service boundary uncaught.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Result alias used by the repository ports.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by a repository adapter.
///
/// Business outcomes (duplicate, missing row) are NOT store errors; the
/// adapters report those through their return values and the services turn
/// them into [`Rejection`]s.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A lock guarding the store was poisoned.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Persisting a committed change failed (I/O, serialization).
    #[error("store persistence failed: {reason}")]
    Persistence { reason: String },
}

/// Which foreign key of a creation request failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Category,
    Owner,
    Type,
}

impl Reference {
    /// The label used in the user-facing rejection message.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Owner => "owner",
            Self::Type => "type",
        }
    }
}

/// Terminal outcome of a rejected use case.
///
/// The `Display` strings are part of the public contract - transport layers
/// surface them verbatim.
///
/// | Variant            | Status analogue |
/// |--------------------|-----------------|
/// | `InvalidRequest`   | 400             |
/// | `NotFound`         | 404             |
/// | `Duplicate`        | 422             |
/// | `MissingReference` | 422             |
/// | `Persistence`      | 500             |
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Malformed or absent payload; carries the validation detail.
    #[error("{0}")]
    InvalidRequest(String),

    /// The requested entity does not exist (read paths only).
    #[error("not found")]
    NotFound,

    /// A pokemon with the requested name already exists.
    #[error("This pokemon already exists.")]
    Duplicate,

    /// A foreign key in the request points at nothing.
    #[error("This {} doesn't exist, please check the id and try again.", .0.label())]
    MissingReference(Reference),

    /// The store reported that nothing was committed.
    #[error("Something went wrong saving this pokemon.")]
    Persistence,
}

impl Rejection {
    /// HTTP status analogue for transport-facing callers.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::NotFound => 404,
            Self::Duplicate | Self::MissingReference(_) => 422,
            Self::Persistence => 500,
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest(_) => ErrorCategory::Validation,
            Self::NotFound => ErrorCategory::NotFound,
            Self::Duplicate | Self::MissingReference(_) => ErrorCategory::Conflict,
            Self::Persistence => ErrorCategory::Internal,
        }
    }
}

/// Any store failure surfaces as a server-side outcome; the caller sent a
/// valid request and must not be blamed for it.
impl From<StoreError> for Rejection {
    fn from(_: StoreError) -> Self {
        Rejection::Persistence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The message strings are load-bearing: transport callers show them
    // verbatim, so they are pinned here character-for-character.

    #[test]
    fn duplicate_message_is_exact() {
        assert_eq!(Rejection::Duplicate.to_string(), "This pokemon already exists.");
    }

    #[test]
    fn missing_reference_messages_are_exact() {
        assert_eq!(
            Rejection::MissingReference(Reference::Category).to_string(),
            "This category doesn't exist, please check the id and try again."
        );
        assert_eq!(
            Rejection::MissingReference(Reference::Owner).to_string(),
            "This owner doesn't exist, please check the id and try again."
        );
        assert_eq!(
            Rejection::MissingReference(Reference::Type).to_string(),
            "This type doesn't exist, please check the id and try again."
        );
    }

    #[test]
    fn persistence_message_is_exact() {
        assert_eq!(
            Rejection::Persistence.to_string(),
            "Something went wrong saving this pokemon."
        );
    }

    #[test]
    fn status_analogues() {
        assert_eq!(Rejection::InvalidRequest("x".into()).status(), 400);
        assert_eq!(Rejection::NotFound.status(), 404);
        assert_eq!(Rejection::Duplicate.status(), 422);
        assert_eq!(Rejection::MissingReference(Reference::Owner).status(), 422);
        assert_eq!(Rejection::Persistence.status(), 500);
    }

    #[test]
    fn store_errors_become_persistence_failures() {
        assert_eq!(Rejection::from(StoreError::LockPoisoned), Rejection::Persistence);
        assert_eq!(
            Rejection::from(StoreError::Persistence { reason: "disk full".into() }),
            Rejection::Persistence
        );
    }
}
