//! Application layer for Revdex.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PokemonService, CatalogService)
//! - **Ports**: Interface definitions (traits) for the repository adapters
//! - **Errors**: The tagged outcome taxonomy transport layers consume
//!
//! The application layer coordinates the domain layer but contains no
//! structural validation itself. All structural rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CatalogService, CreatePokemon, CreatedPokemon, PokemonService};

// Re-export port traits (for adapter implementation)
pub use ports::{CategoryRepository, OwnerRepository, PokemonRepository, TypeRepository};

pub use error::{Reference, Rejection, StoreError, StoreResult};
