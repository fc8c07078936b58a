//! Core domain layer for Revdex.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All storage concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Validation lives here**: Structural rules, not storage rules

// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    catalog::{Category, ElementType, Owner},
    pokemon::{Pokemon, PokemonCategory, PokemonDraft, PokemonOwner, PokemonType},
    review::{Review, ReviewDraft, Reviewer},
};

pub use error::DomainError;
pub use validation::DomainValidator;
