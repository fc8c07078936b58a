// ============================================================================
// domain/error.rs - STRUCTURAL VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a structural-validation failure: the payload itself is
/// malformed, independent of anything the store contains. Business-rule
/// failures (duplicates, dangling references) are application-layer
/// rejections, not domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("rating must be between 1 and 5, got {rating}")]
    RatingOutOfRange { rating: u8 },
}
