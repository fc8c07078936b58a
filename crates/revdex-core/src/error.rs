//! Unified error handling for Revdex Core.
//!
//! This module provides a unified error type that wraps domain errors, store
//! errors, and use-case rejections, with user-actionable suggestions for the
//! CLI layer.

use thiserror::Error;

use crate::application::error::{Rejection, StoreError};
use crate::domain::DomainError;

/// Root error type for Revdex Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RevdexError {
    /// Structural validation failures from the domain layer.
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    /// Store adapter failures (locks, persistence).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A use case terminated with a tagged rejection.
    #[error("{0}")]
    Rejected(#[from] Rejection),
}

impl RevdexError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => vec![
                format!("The request payload is malformed: {}", e),
                "Fix the field and resubmit".into(),
            ],
            Self::Store(_) => vec![
                "The store failed to complete the operation".into(),
                "No changes were written; try again".into(),
            ],
            Self::Rejected(r) => match r {
                Rejection::InvalidRequest(detail) => vec![
                    format!("The request was rejected: {}", detail),
                    "Check the required fields and resubmit".into(),
                ],
                Rejection::NotFound => vec![
                    "No entity matches that id or name".into(),
                    "List existing entities with: revdex list".into(),
                ],
                Rejection::Duplicate => vec![
                    "A pokemon with that name already exists".into(),
                    "Pokemon names are unique and matched case-sensitively".into(),
                ],
                Rejection::MissingReference(reference) => vec![
                    format!("No {} row matches the referenced id", reference.label()),
                    format!(
                        "See valid ids with: revdex list --kind {}s",
                        reference.label()
                    ),
                ],
                Rejection::Persistence => vec![
                    "The store reported a failed commit".into(),
                    "No partial data was written; try again".into(),
                ],
            },
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Store(_) => ErrorCategory::Internal,
            Self::Rejected(r) => r.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type RevdexResult<T> = Result<T, RevdexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::Reference;

    #[test]
    fn rejection_categories_flow_through() {
        let err = RevdexError::from(Rejection::NotFound);
        assert_eq!(err.category(), ErrorCategory::NotFound);

        let err = RevdexError::from(Rejection::Duplicate);
        assert_eq!(err.category(), ErrorCategory::Conflict);

        let err = RevdexError::from(Rejection::Persistence);
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn missing_reference_suggestions_name_the_list_command() {
        let err = RevdexError::from(Rejection::MissingReference(Reference::Category));
        assert!(err.suggestions().iter().any(|s| s.contains("categories")));
    }

    #[test]
    fn display_preserves_rejection_message() {
        let err = RevdexError::from(Rejection::Duplicate);
        assert_eq!(err.to_string(), "This pokemon already exists.");
    }
}
