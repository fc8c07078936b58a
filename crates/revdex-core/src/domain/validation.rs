use crate::domain::{
    entities::pokemon::PokemonDraft, entities::review::ReviewDraft, error::DomainError,
};

/// Centralized domain validation.
///
/// All structural validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a creation payload: name populated, attached reviews sound.
    pub fn validate_draft(draft: &PokemonDraft) -> Result<(), DomainError> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        for review in &draft.reviews {
            Self::validate_review(review)?;
        }
        Ok(())
    }

    pub fn validate_review(review: &ReviewDraft) -> Result<(), DomainError> {
        if review.title.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "title" });
        }
        if !(1..=5).contains(&review.rating) {
            return Err(DomainError::RatingOutOfRange {
                rating: review.rating,
            });
        }
        Ok(())
    }
}
